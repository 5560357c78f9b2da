/*!
 * Reporting functionality for srcdump
 *
 * Renders an end-of-run summary of an export with the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ExportStats;
use crate::utils::format_file_size;

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for export results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, output_file: &str, stats: &ExportStats) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(output_file, stats),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, output_file: &str, stats: &ExportStats) {
        println!("\n{}", self.generate_report(output_file, stats));
    }

    fn create_summary_table(&self, output_file: &str, stats: &ExportStats) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "Output File",
                value: output_file.to_string(),
            },
            SummaryRow {
                key: "Process Time",
                value: format!("{:.4?}", stats.duration),
            },
            SummaryRow {
                key: "Files Added",
                value: stats.added.len().to_string(),
            },
            SummaryRow {
                key: "Files Skipped",
                value: stats.skipped.len().to_string(),
            },
            SummaryRow {
                key: "Output Size",
                value: format_file_size(stats.bytes_written),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_skipped_table(&self, stats: &ExportStats) -> String {
        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = stats
            .skipped
            .iter()
            .map(|s| SkippedRow {
                path: s.path.clone(),
                reason: s.reason.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, output_file: &str, stats: &ExportStats) -> String {
        let summary = format!(
            "EXPORT SUMMARY\n{}",
            self.create_summary_table(output_file, stats)
        );

        if stats.skipped.is_empty() {
            return summary;
        }

        format!(
            "{}\n\nSKIPPED FILES\n{}",
            summary,
            self.create_skipped_table(stats)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkippedFile;

    #[test]
    fn test_report_lists_skipped_files() {
        let stats = ExportStats {
            added: vec!["a.txt".to_string()],
            skipped: vec![SkippedFile {
                path: "bad.bin".to_string(),
                reason: "invalid UTF-8".to_string(),
            }],
            bytes_written: 2048,
            ..Default::default()
        };

        let report = Reporter::new(ReportFormat::ConsoleTable).generate_report("out.txt", &stats);
        assert!(report.contains("EXPORT SUMMARY"));
        assert!(report.contains("out.txt"));
        assert!(report.contains("2.00 KB"));
        assert!(report.contains("SKIPPED FILES"));
        assert!(report.contains("bad.bin"));
    }

    #[test]
    fn test_report_without_skips() {
        let stats = ExportStats::default();
        let report = Reporter::new(ReportFormat::ConsoleTable).generate_report("out.txt", &stats);
        assert!(!report.contains("SKIPPED FILES"));
    }
}
