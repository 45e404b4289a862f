// ⚠️ Errors - Fatal failures of a cleaning run
// Per-row problems are never errors; they are counted in the PipelineReport.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    /// File missing, unreadable, or destination not writable
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not parseable as delimited text
    #[error("malformed CSV in {path}: {message}")]
    Format { path: PathBuf, message: String },
}

impl CleanError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CleanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn format(path: &Path, message: impl Into<String>) -> Self {
        CleanError::Format {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Split a csv error into the two fatal kinds.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        if !err.is_io_error() {
            return CleanError::format(path, err.to_string());
        }

        match err.into_kind() {
            csv::ErrorKind::Io(source) => CleanError::io(path, source),
            other => CleanError::format(path, format!("{:?}", other)),
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = CleanError::format(Path::new("raw.csv"), "found record with 2 fields");
        assert_eq!(
            err.to_string(),
            "malformed CSV in raw.csv: found record with 2 fields"
        );

        let err = CleanError::io(
            Path::new("missing.csv"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("I/O error on missing.csv"));
    }
}
