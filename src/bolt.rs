use image::{Rgb, RgbImage};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Transform};

/// A vertex in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Outline of the lightning bolt for one icon size.
///
/// The six vertices cross over each other, so the outline is filled with the
/// even-odd rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoltGeometry {
    pub center: Point,
    /// Bolt half-width, `0.15 * size` truncated
    pub half_width: i32,
    /// Bolt half-height, `0.4 * size` truncated
    pub half_height: i32,
    points: [Point; 6],
}

impl BoltGeometry {
    pub fn for_size(size: u32) -> Self {
        let c = (size / 2) as i32;
        let bw = (size as f64 * 0.15) as i32;
        let bh = (size as f64 * 0.4) as i32;

        // Every scaled offset is truncated before it is combined with the center.
        let off = |len: i32, frac: f64| (len as f64 * frac) as i32;

        let points = [
            Point::new(c - off(bw, 0.3), c - off(bh, 0.5)),
            Point::new(c + off(bw, 0.5), c - off(bh, 0.2)),
            Point::new(c - off(bw, 0.2), c),
            Point::new(c + off(bw, 0.3), c + off(bh, 0.5)),
            Point::new(c - off(bw, 0.5), c + off(bh, 0.2)),
            Point::new(c + off(bw, 0.2), c),
        ];

        Self {
            center: Point::new(c, c),
            half_width: bw,
            half_height: bh,
            points,
        }
    }

    /// The six vertices, in drawing order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>) {
        fill_polygon(canvas, &self.points, color);
    }
}

fn outline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in rest {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.close();
    pb.finish()
}

/// Fill a closed polygon with the even-odd rule, without anti-aliasing.
///
/// The outline is rasterized into a tiny-skia coverage mask the size of the
/// canvas, and every covered pixel is painted with `color`. Anything outside
/// the canvas is clipped; polygons with fewer than three vertices or no area
/// draw nothing.
pub fn fill_polygon(canvas: &mut RgbImage, points: &[Point], color: Rgb<u8>) {
    if points.len() < 3 {
        return;
    }
    let Some(path) = outline(points) else {
        return;
    };
    let Some(mut mask) = Pixmap::new(canvas.width(), canvas.height()) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(255, 255, 255, 255);
    paint.anti_alias = false;
    mask.fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);

    for (pixel, coverage) in canvas.pixels_mut().zip(mask.pixels()) {
        if coverage.alpha() > 0 {
            *pixel = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn geometry_for_192() {
        let bolt = BoltGeometry::for_size(192);
        assert_eq!(bolt.center, Point::new(96, 96));
        assert_eq!(bolt.half_width, 28);
        assert_eq!(bolt.half_height, 76);
        assert_eq!(
            bolt.points(),
            &[
                Point::new(88, 58),
                Point::new(110, 81),
                Point::new(91, 96),
                Point::new(104, 134),
                Point::new(82, 111),
                Point::new(101, 96),
            ]
        );
    }

    #[test]
    fn geometry_for_512() {
        let bolt = BoltGeometry::for_size(512);
        assert_eq!(bolt.half_width, 76);
        assert_eq!(bolt.half_height, 204);
        assert_eq!(bolt.points()[0], Point::new(234, 154));
        assert_eq!(bolt.points()[3], Point::new(278, 358));
    }

    #[test]
    fn vertices_stay_on_canvas() {
        for size in [20, 32, 48, 192, 512, 1024] {
            let bolt = BoltGeometry::for_size(size);
            for p in bolt.points() {
                assert!(p.x >= 0 && p.x < size as i32, "{p:?} outside {size}");
                assert!(p.y >= 0 && p.y < size as i32, "{p:?} outside {size}");
            }
        }
    }

    #[test]
    fn fills_a_square() {
        let mut canvas = RgbImage::new(10, 10);
        let square = [
            Point::new(2, 2),
            Point::new(6, 2),
            Point::new(6, 6),
            Point::new(2, 6),
        ];
        fill_polygon(&mut canvas, &square, WHITE);

        // Pixels whose centers fall inside the outline are painted
        assert_eq!(*canvas.get_pixel(2, 2), WHITE);
        assert_eq!(*canvas.get_pixel(5, 5), WHITE);
        assert_eq!(*canvas.get_pixel(1, 3), BLACK);
        assert_eq!(*canvas.get_pixel(7, 3), BLACK);
        assert_eq!(*canvas.get_pixel(3, 7), BLACK);
    }

    #[test]
    fn paints_only_solid_color() {
        let mut canvas = RgbImage::new(10, 10);
        let triangle = [Point::new(0, 0), Point::new(9, 1), Point::new(3, 9)];
        fill_polygon(&mut canvas, &triangle, WHITE);

        assert!(canvas.pixels().all(|p| *p == WHITE || *p == BLACK));
        assert!(canvas.pixels().any(|p| *p == WHITE));
    }

    #[test]
    fn clips_to_canvas() {
        let mut canvas = RgbImage::new(4, 4);
        let triangle = [Point::new(-10, -10), Point::new(20, -10), Point::new(5, 20)];
        fill_polygon(&mut canvas, &triangle, WHITE);
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(3, 3), WHITE);
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut canvas = RgbImage::new(4, 4);
        fill_polygon(&mut canvas, &[Point::new(0, 0), Point::new(3, 3)], WHITE);
        fill_polygon(
            &mut canvas,
            &[Point::new(0, 1), Point::new(3, 1), Point::new(2, 1)],
            WHITE,
        );
        assert!(canvas.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn bolt_covers_the_center() {
        for size in [192, 512] {
            let mut canvas = RgbImage::new(size, size);
            let bolt = BoltGeometry::for_size(size);
            bolt.draw(&mut canvas, WHITE);

            let c = bolt.center;
            assert_eq!(*canvas.get_pixel(c.x as u32, c.y as u32), WHITE);
            assert_eq!(*canvas.get_pixel(0, 0), BLACK);
            assert_eq!(*canvas.get_pixel(size - 1, size - 1), BLACK);
        }
    }
}
