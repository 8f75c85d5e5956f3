use super::render::{resize, write_png};
use crate::config::{icon_path, OutputConfig};
use crate::error::{IconError, Result};
use bytesize::ByteSize;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// One icon written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendition {
    pub size: u32,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Writes one rendition per entry of `sizes` into `output_dir`, in order.
///
/// A failing size is logged and skipped; the remaining sizes are still
/// attempted. The run only succeeds if every size was written. Unless
/// `output.cleanup_on_failure` is set, icons written before a failure stay on
/// disk.
pub fn generate(
    image: &DynamicImage,
    sizes: &[u32],
    output_dir: &Path,
    output: &OutputConfig,
) -> Result<Vec<Rendition>> {
    if let Some(&size) = sizes.iter().find(|&&size| size == 0) {
        return Err(IconError::Config(format!("invalid icon size {size}")));
    }

    let mut written = Vec::with_capacity(sizes.len());
    let mut failed = Vec::new();

    for &size in sizes {
        let path = icon_path(output_dir, size);
        let resized = resize(image, size);

        match write_png(&resized, &path) {
            Ok(bytes) => {
                log::info!(
                    "✓ Generated {} ({size}x{size}, {})",
                    file_name(&path),
                    ByteSize(bytes)
                );
                written.push(Rendition { size, path, bytes });
            }
            Err(source) => {
                let err = IconError::Write { size, path, source };
                log::error!("{}", err);
                failed.push(size);
            }
        }
    }

    if failed.is_empty() {
        return Ok(written);
    }

    if output.cleanup_on_failure {
        for rendition in &written {
            match fs::remove_file(&rendition.path) {
                Ok(()) => log::warn!("Removed {}", rendition.path.display()),
                Err(e) => log::warn!(
                    "Could not remove {}: {}",
                    rendition.path.display(),
                    e
                ),
            }
        }
    }

    Err(IconError::Incomplete { failed })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
