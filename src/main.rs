//! Gas Report Diff CLI
//!
//! Compares two gas-usage report files and prints a markdown diff
//! to standard output.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use gas_report_diff::commands::{execute_diff, DiffArgs};
use gas_report_diff::utils::config::{DEFAULT_AFTER_PATH, DEFAULT_BEFORE_PATH};
use gas_report_diff::utils::error::LoadError;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Gas Report Diff - markdown diffs of smart-contract gas reports
#[derive(Parser, Debug)]
#[command(name = "gas-report-diff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the baseline gas report
    #[arg(default_value = DEFAULT_BEFORE_PATH)]
    before: PathBuf,

    /// Path to the updated gas report
    #[arg(default_value = DEFAULT_AFTER_PATH)]
    after: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            // Load failures carry their own exit codes; anything else is 1
            let code = err
                .downcast_ref::<LoadError>()
                .map(LoadError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let args = DiffArgs {
        before_path: cli.before,
        after_path: cli.after,
    };

    execute_diff(args)
}
