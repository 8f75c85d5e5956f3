use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Resamples `image` to a `size` x `size` square with a Lanczos3 filter.
/// The source is left untouched.
pub fn resize(image: &DynamicImage, size: u32) -> DynamicImage {
    image.resize_exact(size, size, FilterType::Lanczos3)
}

/// Encodes `image` as a maximally compressed PNG at `path`.
///
/// The bytes go to a temporary file next to the target and are renamed into
/// place once complete, so a failed write never leaves a truncated icon.
/// New icons get the same umask-derived mode as any other created file; an
/// icon being replaced keeps its mode. Returns the encoded length in bytes.
pub fn write_png(image: &DynamicImage, path: &Path) -> io::Result<u64> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = tempfile::Builder::new();
    builder.prefix(".appicon-").suffix(".png.tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir)?;

    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
    }

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder =
            PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive);
        image.write_with_encoder(encoder).map_err(io::Error::other)?;
        writer.flush()?;
    }

    let len = tmp.as_file().metadata()?.len();
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(len)
}
