//! Global error handling for srcdump
//!
//! Only run-level (fatal) failures are represented here. A file that cannot
//! be read is not an error of the run; see [`crate::types::FileRead`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for srcdump operations
#[derive(Error, Debug)]
pub enum SrcDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Traversal errors (a directory became unreadable mid-walk, etc.)
    #[error("Directory traversal error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Output file could not be created or written
    #[error("Cannot write output file {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for srcdump operations
pub type Result<T> = std::result::Result<T, SrcDumpError>;

/// Creates a SrcDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::SrcDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

impl SrcDumpError {
    /// Wrap an I/O failure on the output artifact
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}

// Allow converting SrcDumpError to io::Error for callers on io::Result
impl From<SrcDumpError> for io::Error {
    fn from(err: SrcDumpError) -> Self {
        match err {
            SrcDumpError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_root(exists: bool) -> Result<()> {
        ensure!(exists, PathNotFound, "root {}", "missing");
        Ok(())
    }

    #[test]
    fn test_ensure_macro() {
        assert!(check_root(true).is_ok());
        let err = check_root(false).unwrap_err();
        assert_eq!(err.to_string(), "Path not found: root missing");
    }

    #[test]
    fn test_output_error_display() {
        let err = SrcDumpError::output(
            "out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Cannot write output file out.txt: denied");
    }
}
