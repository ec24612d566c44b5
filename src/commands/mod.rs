//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod diff;

// Re-export main command functions
pub use diff::{build_report, execute_diff, DiffArgs};
