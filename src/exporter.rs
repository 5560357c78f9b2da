/*!
 * Export pipeline: enumerate, filter, read, emit
 */

use std::env;
use std::fs;
use std::time::Instant;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, SrcDumpError};
use crate::scanner::Scanner;
use crate::status::StatusReporter;
use crate::types::{ExportStats, FileRead, SkippedFile};
use crate::utils::base_name;
use crate::writer::ExportWriter;

/// Runs one export and reports progress to a [`StatusReporter`]
pub struct Exporter<R: StatusReporter> {
    config: Config,
    status: R,
}

impl<R: StatusReporter> Exporter<R> {
    /// Create a new exporter
    pub fn new(config: Config, status: R) -> Self {
        Self { config, status }
    }

    /// Build the scanner for this run, reserving the artifact and executable
    pub(crate) fn scanner(&self) -> Scanner {
        let output = &self.config.output_file;
        let mut scanner = Scanner::new(&self.config.target_dir, self.config.exclusions.clone())
            .reserve_name(base_name(output))
            .reserve_path(output);

        if self.config.exclude_self {
            if let Ok(exe) = env::current_exe() {
                scanner = scanner.reserve_path(&exe);
            }
        }

        scanner
    }

    /// Write the artifact.
    ///
    /// Files that cannot be read are reported and skipped. Failing to open
    /// or write the output, or a traversal error, aborts the run and leaves
    /// the partial artifact on disk.
    pub fn run(&self) -> Result<ExportStats> {
        let start = Instant::now();
        let output = &self.config.output_file;

        // Resolve before touching the output so a bad root never truncates it
        let root = fs::canonicalize(&self.config.target_dir).map_err(|e| {
            SrcDumpError::PathNotFound(format!("{}: {}", self.config.target_dir.display(), e))
        })?;

        self.status.started(output);

        let mut writer =
            ExportWriter::create(output).map_err(|e| SrcDumpError::output(output, e))?;
        writer
            .write_header(&base_name(&root))
            .map_err(|e| SrcDumpError::output(output, e))?;

        let scanner = self.scanner();
        let mut stats = ExportStats::default();

        for candidate in scanner.scan()? {
            let candidate = candidate?;
            let label = candidate.label();

            match candidate.read() {
                FileRead::Content(content) => {
                    writer
                        .write_record(&label, &content)
                        .map_err(|e| SrcDumpError::output(output, e))?;
                    self.status.added(&label);
                    stats.added.push(label);
                }
                FileRead::Failed { reason } => {
                    warn!("skipping {}: {}", candidate.abs_path.display(), reason);
                    self.status.skipped(&label, &reason);
                    stats.skipped.push(SkippedFile {
                        path: label,
                        reason,
                    });
                }
            }
        }

        stats.bytes_written = writer.bytes_written();
        writer.finish().map_err(|e| SrcDumpError::output(output, e))?;
        stats.duration = start.elapsed();

        info!(
            added = stats.added.len(),
            skipped = stats.skipped.len(),
            bytes = stats.bytes_written,
            "export complete"
        );
        self.status.finished(output);

        Ok(stats)
    }
}
