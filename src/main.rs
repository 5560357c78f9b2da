/*!
 * Command-line interface for srcdump
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use srcdump::config::{Args, Config};
use srcdump::report::{ReportFormat, Reporter};
use srcdump::status::ConsoleStatus;
use srcdump::Exporter;

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("srcdump=info"),
        _ => EnvFilter::new("srcdump=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "srcdump", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let exporter = Exporter::new(config.clone(), ConsoleStatus);
    match exporter.run() {
        Ok(stats) => {
            if config.summary {
                let reporter = Reporter::new(ReportFormat::ConsoleTable);
                reporter.print_report(&config.output_file.display().to_string(), &stats);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
