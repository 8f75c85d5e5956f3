use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an icon run.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("expected exactly one argument: the path to the source image")]
    Usage,

    #[error("source file {} not found", .0.display())]
    MissingSourceFile(PathBuf),

    #[error("output directory {} not found", .0.display())]
    MissingOutputDirectory(PathBuf),

    #[error("could not decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to write {size}x{size} icon to {}: {source}", .path.display())]
    Write {
        size: u32,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} icon size(s) failed: {failed:?}", .failed.len())]
    Incomplete { failed: Vec<u32> },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl IconError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        IconError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Every failure is terminal for the run and maps to the same code.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T, E = IconError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = IconError::MissingSourceFile(PathBuf::from("missing.png"));
        assert_eq!(err.to_string(), "source file missing.png not found");

        let err = IconError::Write {
            size: 64,
            path: PathBuf::from("out/app_icon_64.png"),
            source: std::io::Error::other("disk full"),
        };
        assert!(err.to_string().contains("64x64"));
        assert!(err.to_string().contains("disk full"));

        let err = IconError::Incomplete {
            failed: vec![512, 1024],
        };
        assert_eq!(err.to_string(), "2 icon size(s) failed: [512, 1024]");
    }

    #[test]
    fn test_errors_exit_with_failure() {
        assert_eq!(IconError::Usage.exit_code(), 1);
        assert_eq!(IconError::Config("sizes".into()).exit_code(), 1);
    }
}
