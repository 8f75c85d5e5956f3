use crate::config::{Config, SIZES};
use crate::error::{IconError, Result};
use crate::icon::{self, Rendition};
use bytesize::ByteSize;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: appicon <path-to-source-image>

Example:
  appicon ~/Downloads/app_icon.png";

/// Accepts exactly one positional argument, the program name already removed.
pub fn parse_args<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(source), None) => Ok(PathBuf::from(source)),
        _ => Err(IconError::Usage),
    }
}

/// Validate, load, then write every icon size into `output_dir`.
pub fn run(source: &Path, output_dir: &Path, config: &Config) -> Result<Vec<Rendition>> {
    config.validate()?;

    if !source.exists() {
        return Err(IconError::MissingSourceFile(source.to_path_buf()));
    }
    icon::validate(output_dir)?;

    let image = icon::load_image(source, config.render.svg_raster_size)?;
    log::info!("Generating icons from: {}", source.display());
    log::info!("Original size: {}x{}", image.width(), image.height());
    let image = icon::normalize(image);

    let renditions = icon::generate(&image, &SIZES, output_dir, &config.output)?;

    for rendition in &renditions {
        log::debug!("{}px -> {}", rendition.size, rendition.path.display());
    }
    let total: u64 = renditions.iter().map(|r| r.bytes).sum();
    log::info!(
        "All {} icons generated ({} total)",
        renditions.len(),
        ByteSize(total)
    );
    log::info!("Location: {}", output_dir.display());
    Ok(renditions)
}

/// Runs the tool for `args` and returns the process exit code.
///
/// The config is only loaded once the arguments are known to be valid.
pub fn execute<I, F>(args: I, output_dir: &Path, load_config: F) -> u8
where
    I: IntoIterator<Item = OsString>,
    F: FnOnce() -> Config,
{
    let result = parse_args(args).and_then(|source| {
        let config = load_config();
        run(&source, output_dir, &config)
    });

    match result {
        Ok(_) => 0,
        Err(e) => {
            report(&e, &mut io::stderr().lock());
            e.exit_code()
        }
    }
}

/// Prints a failed run for the user, independent of the log level.
pub fn report(err: &IconError, out: &mut impl Write) {
    let _ = match err {
        IconError::Usage => writeln!(out, "{}", USAGE),
        other => writeln!(out, "Error: {}", other),
    };
}
