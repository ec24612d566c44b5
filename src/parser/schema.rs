//! Input JSON schema definitions for gas reports.
//!
//! This module defines the structure of the report files we read from disk.
//! Every numeric field is optional in the wire format; absent metrics are
//! treated as 0 at diff time.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// A full gas report: contract identifier -> per-contract data.
///
/// Keyed by the raw `contract` string (e.g. `"src/Token.sol:Token"`).
/// A `BTreeMap` keeps contracts in sorted order for deterministic output.
pub type Report = BTreeMap<String, ContractRecord>;

/// Gas data recorded for a single contract
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractRecord {
    /// Deployment cost, if the contract was deployed during the run
    #[serde(default)]
    pub deployment: Option<DeploymentStats>,

    /// Per-function call statistics, keyed by full signature
    #[serde(default)]
    pub functions: HashMap<String, FunctionStats>,
}

/// Cost of deploying a contract
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DeploymentStats {
    /// Gas spent by the deployment transaction
    #[serde(default)]
    pub gas: i64,

    /// Deployed bytecode size in bytes
    #[serde(default)]
    pub size: i64,
}

/// Gas statistics across recorded calls of one function
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FunctionStats {
    /// Number of recorded calls
    #[serde(default)]
    pub calls: Option<u64>,

    #[serde(default)]
    pub min: Option<f64>,

    #[serde(default)]
    pub mean: Option<f64>,

    #[serde(default)]
    pub median: Option<f64>,

    #[serde(default)]
    pub max: Option<f64>,
}

/// The four per-function gas metrics, in report row order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionMetric {
    Min,
    Mean,
    Median,
    Max,
}

impl FunctionMetric {
    /// Fixed rendering order: `min, mean, median, max`
    pub const ALL: [FunctionMetric; 4] = [
        FunctionMetric::Min,
        FunctionMetric::Mean,
        FunctionMetric::Median,
        FunctionMetric::Max,
    ];

    /// Metric name as it appears in report rows and input JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionMetric::Min => "min",
            FunctionMetric::Mean => "mean",
            FunctionMetric::Median => "median",
            FunctionMetric::Max => "max",
        }
    }
}

impl FunctionStats {
    /// Look up one metric; `None` when the field was absent from the input
    pub fn metric(&self, metric: FunctionMetric) -> Option<f64> {
        match metric {
            FunctionMetric::Min => self.min,
            FunctionMetric::Mean => self.mean,
            FunctionMetric::Median => self.median,
            FunctionMetric::Max => self.max,
        }
    }
}
