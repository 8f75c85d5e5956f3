use crate::error::{IconError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Xcode asset catalog slot that the icons are written into.
pub const OUTPUT_DIR: &str = "Runner/Assets.xcassets/AppIcon.appiconset";

/// Pixel sizes required by the macOS app icon set, in output order.
pub const SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

const FILE_PREFIX: &str = "app_icon";

/// Target path for the rendition of `size` inside `dir`
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("{}_{}.png", FILE_PREFIX, size))
}

/// Application configuration.
///
/// Only behavior around the fixed output contract is tunable here; the output
/// directory, sizes and file names are not.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub render: RenderConfig,
}

/// What happens to written icons when a run fails
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Remove icons written earlier in a run that ends in failure
    pub cleanup_on_failure: bool,
}

/// Vector rasterization
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Edge length SVG sources are rasterized at before resampling
    pub svg_raster_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            svg_raster_size: 1024,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "appicon")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the user's config file, or return defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_or_default(&path))
            .unwrap_or_default()
    }

    /// Load `path` if it exists, falling back to defaults when it is missing
    /// or cannot be read or parsed
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}", e);
                log::warn!("Using default configuration");
                Config::default()
            }
        }
    }

    /// Read and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            IconError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str::<Config>(&contents).map_err(|e| {
            IconError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.render.svg_raster_size == 0 {
            return Err(IconError::Config(
                "svg_raster_size must be non-zero".into(),
            ));
        }
        Ok(())
    }
}
