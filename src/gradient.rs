use image::{Rgb, RgbImage};

/// Color of the first row (`#6b7280`)
pub const GRADIENT_START: Rgb<u8> = Rgb([107, 114, 128]);

/// Color the gradient approaches at the last row (`#9ca3af`)
pub const GRADIENT_END: Rgb<u8> = Rgb([156, 163, 175]);

/// Compute the color of `row` on a canvas that is `size` rows tall.
///
/// Each channel is `round(start + (end - start) * row / size)`, so the last
/// row lands on [`GRADIENT_END`] after rounding.
pub fn row_color(row: u32, size: u32) -> Rgb<u8> {
    let t = row as f64 / size as f64;
    let mut color = GRADIENT_START;
    let channels = GRADIENT_START.0.iter().zip(GRADIENT_END.0.iter());
    for (channel, (&start, &end)) in channels.enumerate() {
        let value = start as f64 + (end as f64 - start as f64) * t;
        color.0[channel] = value.round().clamp(0.0, 255.0) as u8;
    }
    color
}

/// Paint the whole canvas with the vertical gradient, one full-width band per row.
pub fn fill_vertical_gradient(canvas: &mut RgbImage) {
    let height = canvas.height();
    for (y, row) in canvas.enumerate_rows_mut() {
        let color = row_color(y, height);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }
}
