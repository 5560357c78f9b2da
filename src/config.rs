/*!
 * Configuration handling for srcdump
 */

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::exclusions::ExclusionConfig;

/// Default name of the export artifact
pub const DEFAULT_OUTPUT_FILE: &str = "full_project_code.txt";

/// Command-line arguments for srcdump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "srcdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's text files into one path-labelled export",
    long_about = "Walks a directory tree, skips dependency/build directories, binary assets and secrets, and writes every remaining text file into a single export framed with its relative path."
)]
pub struct Args {
    /// Directory to export (defaults to the current directory)
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output file, relative to the current directory
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Comma-separated directory names to skip, in addition to the defaults
    #[clap(long, value_delimiter = ',')]
    pub exclude_dirs: Vec<String>,

    /// Comma-separated file name suffixes to skip (case-insensitive)
    #[clap(long, value_delimiter = ',')]
    pub exclude_exts: Vec<String>,

    /// Comma-separated exact file names to skip
    #[clap(long, value_delimiter = ',')]
    pub exclude_files: Vec<String>,

    /// Do not apply the built-in exclusion lists
    #[clap(long)]
    pub no_default_excludes: bool,

    /// Allow the running executable to appear in the export
    #[clap(long)]
    pub include_self: bool,

    /// Print a summary table after the export
    #[clap(long)]
    pub summary: bool,

    /// Increase diagnostic logging on stderr (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Traversal root
    pub target_dir: PathBuf,

    /// Output artifact path
    pub output_file: PathBuf,

    /// Exclusion rules for the run
    pub exclusions: ExclusionConfig,

    /// Skip the running executable if it lives inside the tree
    pub exclude_self: bool,

    /// Print the summary tables
    pub summary: bool,

    /// Verbosity level for diagnostic logging
    pub verbose: u8,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let base = if args.no_default_excludes {
            ExclusionConfig::empty()
        } else {
            ExclusionConfig::default()
        };

        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file: PathBuf::from(args.output),
            exclusions: base.extended(args.exclude_dirs, args.exclude_exts, args.exclude_files),
            exclude_self: !args.include_self,
            summary: args.summary,
            verbose: args.verbose,
        }
    }

    /// Configuration for `target_dir` with default exclusions
    pub fn for_dir(target_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_file: output_file.into(),
            exclusions: ExclusionConfig::default(),
            exclude_self: true,
            summary: false,
            verbose: 0,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        ensure!(
            self.output_file.file_name().is_some(),
            InvalidArgument,
            "Output path has no file name: {}",
            self.output_file.display()
        );

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent == Path::new("") || parent.is_dir(),
                PathNotFound,
                "Output directory not found: {}",
                parent.display()
            );
        }

        ensure!(
            !self.output_file.is_dir(),
            Config,
            "Output path is a directory: {}",
            self.output_file.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SrcDumpError;
    use tempfile::tempdir;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["srcdump"]);
        let config = Config::from_args(args);
        assert_eq!(config.target_dir, PathBuf::from("."));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.exclusions, ExclusionConfig::default());
        assert!(config.exclude_self);
        assert!(!config.summary);
    }

    #[test]
    fn test_args_exclusions() {
        let args = Args::parse_from([
            "srcdump",
            "proj",
            "-o",
            "out.txt",
            "--exclude-dirs",
            "target,vendor",
            "--exclude-exts",
            ".MD",
            "--no-default-excludes",
            "--include-self",
            "-vv",
        ]);
        let config = Config::from_args(args);
        assert_eq!(config.target_dir, PathBuf::from("proj"));
        assert_eq!(config.output_file, PathBuf::from("out.txt"));
        assert!(config.exclusions.excludes_dir("target"));
        assert!(config.exclusions.excludes_dir("vendor"));
        assert!(!config.exclusions.excludes_dir("node_modules"));
        assert!(config.exclusions.excludes_file("README.md"));
        assert!(!config.exclude_self);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_validate() {
        let dir = tempdir().unwrap();
        let config = Config::for_dir(dir.path(), dir.path().join("out.txt"));
        assert!(config.validate().is_ok());

        let config = Config::for_dir(dir.path().join("missing"), dir.path().join("out.txt"));
        assert!(matches!(config.validate(), Err(SrcDumpError::PathNotFound(_))));

        let config = Config::for_dir(dir.path(), dir.path().join("nope").join("out.txt"));
        assert!(matches!(config.validate(), Err(SrcDumpError::PathNotFound(_))));

        let config = Config::for_dir(dir.path(), dir.path());
        assert!(config.validate().is_err());
    }
}
