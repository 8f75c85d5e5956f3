// Vector sources are drawn once at a fixed edge length and then go through the
// same resampling path as bitmaps.

use crate::error::{IconError, Result};
use image::{DynamicImage, RgbaImage};
use std::fs;
use std::path::Path;

pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"))
        .unwrap_or(false)
}

/// Renders the SVG at `path` into an `edge` x `edge` RGBA bitmap.
///
/// The drawing keeps its aspect ratio and is centered; uncovered area stays
/// transparent.
pub fn rasterize(path: &Path, edge: u32) -> Result<DynamicImage> {
    let data = fs::read(path).map_err(|e| IconError::decode(path, e))?;

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opts).map_err(|e| IconError::decode(path, e))?;

    let mut pixmap = tiny_skia::Pixmap::new(edge, edge)
        .ok_or_else(|| IconError::decode(path, format!("cannot allocate {edge}x{edge} canvas")))?;

    // Fit the SVG into the square, maintaining aspect ratio
    let svg_size = tree.size();
    let scale_x = edge as f32 / svg_size.width();
    let scale_y = edge as f32 / svg_size.height();
    let scale = scale_x.min(scale_y);
    let dx = (edge as f32 - svg_size.width() * scale) / 2.0;
    let dy = (edge as f32 - svg_size.height() * scale) / 2.0;

    let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    let image = RgbaImage::from_raw(edge, edge, rgba)
        .ok_or_else(|| IconError::decode(path, "rendered buffer has the wrong length"))?;

    log::debug!(
        "Rasterized {} ({}x{}) at {edge}x{edge}",
        path.display(),
        svg_size.width(),
        svg_size.height()
    );
    Ok(DynamicImage::ImageRgba8(image))
}
