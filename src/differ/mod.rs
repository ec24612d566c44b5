//! Diff computation between two gas reports.
//!
//! This module handles:
//! - Per-metric before/after/delta arithmetic
//! - Collecting every changed metric of a contract
//! - Overload-aware function name normalization

pub mod metrics;
pub mod names;

// Re-export main types
pub use metrics::{
    compute_diff, compute_diff_f64, diff_contract, ContractDiff, DeploymentDiff, FunctionDiff,
    MetricDiff,
};
pub use names::normalize_function_names;
