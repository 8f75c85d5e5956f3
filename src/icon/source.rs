use super::svg;
use crate::error::{IconError, Result};
use image::{DynamicImage, ImageReader};
use std::io::ErrorKind;
use std::path::Path;

/// Checks that the output directory is already there. It is never created.
pub fn validate(output_dir: &Path) -> Result<()> {
    if output_dir.is_dir() {
        Ok(())
    } else {
        Err(IconError::MissingOutputDirectory(output_dir.to_path_buf()))
    }
}

/// Opens and decodes the source image.
///
/// The format is sniffed from the file contents first and the extension second,
/// so a mislabelled PNG still loads. SVG sources are rasterized to a square of
/// `svg_raster_size` pixels.
pub fn load_image(path: &Path, svg_raster_size: u32) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(IconError::MissingSourceFile(path.to_path_buf()));
    }

    if svg::is_svg(path) {
        return svg::rasterize(path, svg_raster_size);
    }

    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => IconError::MissingSourceFile(path.to_path_buf()),
        _ => IconError::decode(path, e),
    })?;
    let reader = reader
        .with_guessed_format()
        .map_err(|e| IconError::decode(path, e))?;
    let format = reader.format();
    let image = reader.decode().map_err(|e| IconError::decode(path, e))?;

    log::debug!(
        "Decoded {} as {:?} ({:?}, {}x{})",
        path.display(),
        format,
        image.color(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Makes sure the image carries alpha in an RGBA layout.
///
/// 8- and 16-bit RGBA are returned untouched. Anything else, including
/// luma+alpha and float buffers that PNG cannot hold, becomes 8-bit RGBA.
pub fn normalize(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgba8(_) | DynamicImage::ImageRgba16(_) => image,
        other => DynamicImage::ImageRgba8(other.to_rgba8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb, RgbImage, Rgba, RgbaImage};
    use std::fs;

    #[test]
    fn test_validate_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate(dir.path()).is_ok());
    }

    #[test]
    fn test_validate_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Runner");
        assert!(matches!(
            validate(&missing),
            Err(IconError::MissingOutputDirectory(p)) if p == missing
        ));
        assert!(!missing.exists());
    }

    #[test]
    fn test_validate_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir");
        fs::write(&file, b"x").unwrap();
        assert!(validate(&file).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert!(matches!(
            load_image(&path, 1024),
            Err(IconError::MissingSourceFile(_))
        ));
    }

    #[test]
    fn test_load_non_image_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "definitely not pixels").unwrap();
        assert!(matches!(
            load_image(&path, 1024),
            Err(IconError::Decode { .. })
        ));
    }

    #[test]
    fn test_load_corrupt_png_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n truncated").unwrap();
        assert!(matches!(
            load_image(&path, 1024),
            Err(IconError::Decode { .. })
        ));
    }

    #[test]
    fn test_load_sniffs_format_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.jpg");
        RgbaImage::from_pixel(8, 4, Rgba([1, 2, 3, 4]))
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();

        let image = load_image(&path, 1024).unwrap();
        assert_eq!((image.width(), image.height()), (8, 4));
        assert_eq!(image.color(), ColorType::Rgba8);
    }

    #[test]
    fn test_normalize_adds_alpha() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([10, 20, 30])));
        let normalized = normalize(rgb);
        assert_eq!(normalized.color(), ColorType::Rgba8);
        assert_eq!(normalized.to_rgba8().get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_normalize_keeps_rgba() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([9, 8, 7, 6]));
        let normalized = normalize(DynamicImage::ImageRgba8(rgba.clone()));
        assert_eq!(normalized, DynamicImage::ImageRgba8(rgba));
    }

    #[test]
    fn test_normalize_keeps_sixteen_bit_rgba() {
        let deep = DynamicImage::new_rgba16(3, 3);
        let normalized = normalize(deep.clone());
        assert_eq!(normalized.color(), ColorType::Rgba16);
        assert_eq!(normalized, deep);
    }

    #[test]
    fn test_normalize_luma_alpha_becomes_rgba() {
        let la = DynamicImage::new_luma_a8(4, 4);
        assert_eq!(normalize(la).color(), ColorType::Rgba8);
    }
}
