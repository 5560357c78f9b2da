/*!
 * Status notifications for an export run
 */

use std::path::Path;

/// Receives progress notifications from the exporter
pub trait StatusReporter {
    /// The run is starting and will write to `output`
    fn started(&self, output: &Path);

    /// A file was appended to the artifact
    fn added(&self, path: &str);

    /// A file was left out because it could not be read
    fn skipped(&self, path: &str, reason: &str);

    /// The run completed
    fn finished(&self, output: &Path);
}

/// Human-readable status lines on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStatus;

impl StatusReporter for ConsoleStatus {
    fn started(&self, output: &Path) {
        println!("Collecting project files into {} ...", output.display());
    }

    fn added(&self, path: &str) {
        println!("Added: {}", path);
    }

    fn skipped(&self, path: &str, reason: &str) {
        println!("Skipped (Error reading): {} - {}", path, reason);
    }

    fn finished(&self, output: &Path) {
        println!("\nDone! All data has been written to: {}", output.display());
    }
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentStatus;

impl StatusReporter for SilentStatus {
    fn started(&self, _output: &Path) {}
    fn added(&self, _path: &str) {}
    fn skipped(&self, _path: &str, _reason: &str) {}
    fn finished(&self, _output: &Path) {}
}
