//! Diff command implementation.
//!
//! The diff command:
//! 1. Loads the before and after gas reports
//! 2. Diffs every contract appearing in either report
//! 3. Prints a markdown section per changed contract

use crate::differ::diff_contract;
use crate::parser::schema::Report;
use crate::parser::load_report;
use crate::report::{render_contract_section, render_header, simplify_contract_name};
use crate::utils::config::{DEFAULT_AFTER_PATH, DEFAULT_BEFORE_PATH};
use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Arguments for the diff command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct DiffArgs {
    /// Path to the baseline gas report
    pub before_path: PathBuf,

    /// Path to the updated gas report
    pub after_path: PathBuf,
}

impl Default for DiffArgs {
    fn default() -> Self {
        Self {
            before_path: PathBuf::from(DEFAULT_BEFORE_PATH),
            after_path: PathBuf::from(DEFAULT_AFTER_PATH),
        }
    }
}

/// Execute the diff command
///
/// **Public** - main entry point called from main.rs
///
/// Both reports are loaded before anything is printed, so a failing load
/// produces no partial output.
///
/// # Errors
/// * Report load failures (missing file, bad JSON, missing `contract` key)
pub fn execute_diff(args: DiffArgs) -> Result<()> {
    info!(
        "Diffing gas reports: {} -> {}",
        args.before_path.display(),
        args.after_path.display()
    );

    let before = load_report(&args.before_path)
        .with_context(|| format!("failed to load {}", args.before_path.display()))?;
    let after = load_report(&args.after_path)
        .with_context(|| format!("failed to load {}", args.after_path.display()))?;

    print!("{}", build_report(&before, &after));

    Ok(())
}

/// Build the full markdown report from two loaded reports
///
/// **Public** - pure, separated from I/O for testing
///
/// Walks the union of contract identifiers in sorted order; contracts with
/// no changed metric contribute no section.
pub fn build_report(before: &Report, after: &Report) -> String {
    let mut out = render_header();

    let contracts: BTreeSet<&String> = before.keys().chain(after.keys()).collect();
    debug!("Comparing {} contract(s)", contracts.len());

    for contract in contracts {
        let diff = diff_contract(before.get(contract.as_str()), after.get(contract.as_str()));
        if !diff.is_empty() {
            out.push_str(&render_contract_section(
                simplify_contract_name(contract),
                &diff,
            ));
        }
    }

    out
}
