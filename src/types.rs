/*!
 * Core types and data structures for srcdump
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::path_label;

/// A file that survived every exclusion rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Path used to open the file
    pub abs_path: PathBuf,
    /// Path relative to the traversal root
    pub rel_path: PathBuf,
}

impl Candidate {
    /// Relative path with `/` separators, as written to the record header
    pub fn label(&self) -> String {
        path_label(&self.rel_path)
    }

    /// Parent directory relative to the root (empty for top-level files)
    pub fn parent(&self) -> &Path {
        self.rel_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Read the whole file as UTF-8
    pub fn read(&self) -> FileRead {
        match fs::read(&self.abs_path) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => FileRead::Content(content),
                Err(e) => FileRead::Failed {
                    reason: format!("invalid UTF-8: {}", e.utf8_error()),
                },
            },
            Err(e) => FileRead::Failed {
                reason: e.to_string(),
            },
        }
    }
}

/// Outcome of reading one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRead {
    /// Full decoded content
    Content(String),
    /// The file could not be read or decoded
    Failed {
        /// Human-readable cause
        reason: String,
    },
}

/// A candidate that was left out of the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Relative path label
    pub path: String,
    /// Why reading failed
    pub reason: String,
}

/// Statistics for one export run
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Labels of files written to the artifact, in emission order
    pub added: Vec<String>,
    /// Files that failed to read
    pub skipped: Vec<SkippedFile>,
    /// Bytes written to the artifact, header included
    pub bytes_written: u64,
    /// Wall time of the run
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_candidate_read() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "hello").unwrap();
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

        let candidate = Candidate {
            abs_path: good,
            rel_path: PathBuf::from("good.txt"),
        };
        assert_eq!(candidate.read(), FileRead::Content("hello".to_string()));

        let candidate = Candidate {
            abs_path: bad,
            rel_path: PathBuf::from("bad.txt"),
        };
        assert!(matches!(candidate.read(), FileRead::Failed { reason } if reason.starts_with("invalid UTF-8")));

        let candidate = Candidate {
            abs_path: dir.path().join("missing.txt"),
            rel_path: PathBuf::from("missing.txt"),
        };
        assert!(matches!(candidate.read(), FileRead::Failed { .. }));
    }

    #[test]
    fn test_candidate_label_and_parent() {
        let candidate = Candidate {
            abs_path: PathBuf::from("/root/src/lib.rs"),
            rel_path: Path::new("src").join("lib.rs"),
        };
        assert_eq!(candidate.label(), "src/lib.rs");
        assert_eq!(candidate.parent(), Path::new("src"));

        let top = Candidate {
            abs_path: PathBuf::from("/root/a.txt"),
            rel_path: PathBuf::from("a.txt"),
        };
        assert_eq!(top.parent(), Path::new(""));
    }
}
