use crate::bolt::BoltGeometry;
use crate::gradient::fill_vertical_gradient;
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use log::debug;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// The icons a PWA manifest expects: `(size, filename)`
pub const PWA_ICONS: [(u32, &str); 2] = [(192, "icon-192.png"), (512, "icon-512.png")];

const BOLT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Returned when this build has no PNG encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPngSupport;

impl fmt::Display for MissingPngSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PNG support is not available in this build")
    }
}

impl std::error::Error for MissingPngSupport {}

/// Whether the PNG encoder was compiled in (the `png` feature)
pub fn png_support_available() -> bool {
    cfg!(feature = "png")
}

/// Generate every icon in [`PWA_ICONS`] inside `out_dir`, one after the other.
///
/// Fails with [`MissingPngSupport`] before anything is written when
/// `png_support` is false. A failure on a later icon leaves the earlier files
/// in place.
pub fn generate_pwa_icons(out_dir: &Path, png_support: bool) -> Result<Vec<PathBuf>> {
    if !png_support {
        return Err(MissingPngSupport.into());
    }

    println!("Generating PWA icons...");

    let mut written = Vec::with_capacity(PWA_ICONS.len());
    for (size, filename) in PWA_ICONS {
        let path = out_dir.join(filename);
        generate_icon(size, &path)?;
        println!("  ✓ Created {filename}");
        written.push(path);
    }

    Ok(written)
}

/// Render a `size`×`size` icon and write it as an RGB PNG to `path`,
/// replacing any existing file.
pub fn generate_icon(size: u32, path: &Path) -> Result<()> {
    let canvas = render_icon(size)?;
    debug!("writing {}x{} icon to {}", size, size, path.display());

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_png(&canvas, &mut writer)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Draw the gradient background and the bolt onto a fresh canvas
pub fn render_icon(size: u32) -> Result<RgbImage> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive");
    }

    let mut canvas = RgbImage::new(size, size);
    fill_vertical_gradient(&mut canvas);

    let bolt = BoltGeometry::for_size(size);
    debug!("bolt outline for {}: {:?}", size, bolt.points());
    bolt.draw(&mut canvas, BOLT_COLOR);

    Ok(canvas)
}

// Encode image data as PNG with compression
#[cfg(feature = "png")]
fn write_png<W: Write>(canvas: &RgbImage, w: W) -> Result<()> {
    use image::codecs::png::{CompressionType, FilterType, PngEncoder};
    use image::{ColorType, ImageEncoder};

    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(canvas.as_raw(), canvas.width(), canvas.height(), ColorType::Rgb8)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_png<W: Write>(_canvas: &RgbImage, _w: W) -> Result<()> {
    Err(MissingPngSupport.into())
}
