/*!
 * srcdump - Concatenate a project's text files into a single export
 *
 * This library walks a directory tree, prunes dependency and build
 * directories, drops binary assets and secrets, and writes every remaining
 * text file into one artifact framed with its relative path.
 */

pub mod config;
pub mod error;
pub mod exclusions;
pub mod exporter;
pub mod report;
pub mod scanner;
pub mod status;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, SrcDumpError};
pub use exclusions::ExclusionConfig;
pub use exporter::Exporter;
pub use report::{ReportFormat, Reporter};
pub use scanner::{Candidates, Scanner};
pub use status::{ConsoleStatus, SilentStatus, StatusReporter};
pub use types::{Candidate, ExportStats, FileRead, SkippedFile};
pub use writer::ExportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
