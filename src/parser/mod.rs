//! Report loading and schema definitions.
//!
//! This module handles:
//! - Defining the input report schema
//! - Parsing report JSON files into keyed maps

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::load_report;
pub use schema::{ContractRecord, DeploymentStats, FunctionMetric, FunctionStats, Report};
