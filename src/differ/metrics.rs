//! Per-metric diff arithmetic between two gas reports.
//!
//! Unchanged metrics produce no diff at all, so the rendered report only
//! contains rows that actually moved.

use crate::differ::names::normalize_function_names;
use crate::parser::schema::{ContractRecord, FunctionMetric};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Change in one deployment metric (integer-valued)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeploymentDiff {
    pub before: i64,
    pub after: i64,
    pub delta: i64,
    /// Percentage change relative to `before`; infinite when `before == 0`
    pub relative_percent: f64,
}

/// Change in one function gas metric (float-valued)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDiff {
    pub before: f64,
    pub after: f64,
    pub delta: f64,
    /// Percentage change relative to `before`; infinite when `before == 0`
    pub relative_percent: f64,
}

/// All changed metrics of one function, plus its call counts
#[derive(Debug, Clone, Default)]
pub struct FunctionDiff {
    /// Call count on the before side, when recorded
    pub calls_before: Option<u64>,

    /// Call count on the after side, when recorded
    pub calls_after: Option<u64>,

    /// Changed metrics in fixed `min, mean, median, max` order
    pub metrics: Vec<(FunctionMetric, MetricDiff)>,
}

/// Everything that changed for one contract
#[derive(Debug, Clone, Default)]
pub struct ContractDiff {
    /// Changed deployment metrics, `gas` before `size`
    pub deployment: Vec<(&'static str, DeploymentDiff)>,

    /// Changed functions keyed by normalized display name (sorted)
    pub functions: BTreeMap<String, FunctionDiff>,
}

impl ContractDiff {
    /// True when nothing changed; such contracts get no report section
    pub fn is_empty(&self) -> bool {
        self.deployment.is_empty() && self.functions.is_empty()
    }
}

/// Compute the diff of one integer metric
///
/// **Public** - shared by deployment diffing and tests
///
/// Returns `None` when the value did not change. On a zero baseline the
/// relative delta is infinite, with the sign of the delta.
pub fn compute_diff(before: i64, after: i64) -> Option<(i64, f64)> {
    if after == before {
        return None;
    }
    let delta = after - before;
    let relative = if before == 0 {
        if delta > 0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        delta as f64 / before as f64 * 100.0
    };
    Some((delta, relative))
}

/// Compute the diff of one float metric
///
/// **Public** - shared by function diffing and tests
///
/// Same contract as [`compute_diff`], for float-valued metrics.
pub fn compute_diff_f64(before: f64, after: f64) -> Option<(f64, f64)> {
    if after == before {
        return None;
    }
    let delta = after - before;
    let relative = if before == 0.0 {
        // IEEE 754 division would give the right infinity here, but the
        // sign convention is part of the output contract, so spell it out.
        if delta > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        delta / before * 100.0
    };
    Some((delta, relative))
}

/// Diff two versions of one contract
///
/// **Public** - main entry point for the differ
///
/// # Arguments
/// * `before` - the contract's record in the baseline report, if present
/// * `after` - the contract's record in the updated report, if present
///
/// # Returns
/// A `ContractDiff` holding every changed metric. Absent sides are treated
/// as empty records. Deployment metrics are compared only when both sides
/// carry a deployment section; missing numeric fields default to 0.
pub fn diff_contract(
    before: Option<&ContractRecord>,
    after: Option<&ContractRecord>,
) -> ContractDiff {
    let empty = ContractRecord::default();
    let before = before.unwrap_or(&empty);
    let after = after.unwrap_or(&empty);

    let mut diff = ContractDiff::default();

    if let (Some(before_dep), Some(after_dep)) = (&before.deployment, &after.deployment) {
        for (name, b, a) in [
            ("gas", before_dep.gas, after_dep.gas),
            ("size", before_dep.size, after_dep.size),
        ] {
            if let Some((delta, relative_percent)) = compute_diff(b, a) {
                diff.deployment.push((
                    name,
                    DeploymentDiff {
                        before: b,
                        after: a,
                        delta,
                        relative_percent,
                    },
                ));
            }
        }
    }

    let signatures: HashSet<&String> = before
        .functions
        .keys()
        .chain(after.functions.keys())
        .collect();

    let name_map = normalize_function_names(signatures.iter().map(|s| s.as_str()));

    for signature in signatures {
        let before_fn = before.functions.get(signature).copied().unwrap_or_default();
        let after_fn = after.functions.get(signature).copied().unwrap_or_default();

        let mut function_diff = FunctionDiff {
            calls_before: before_fn.calls,
            calls_after: after_fn.calls,
            metrics: Vec::new(),
        };

        for metric in FunctionMetric::ALL {
            let b = before_fn.metric(metric).unwrap_or(0.0);
            let a = after_fn.metric(metric).unwrap_or(0.0);
            if let Some((delta, relative_percent)) = compute_diff_f64(b, a) {
                function_diff.metrics.push((
                    metric,
                    MetricDiff {
                        before: b,
                        after: a,
                        delta,
                        relative_percent,
                    },
                ));
            }
        }

        if !function_diff.metrics.is_empty() {
            let display_name = name_map
                .get(signature.as_str())
                .cloned()
                .unwrap_or_else(|| signature.to_string());
            diff.functions.insert(display_name, function_diff);
        }
    }

    debug!(
        "Contract diff: {} deployment metric(s), {} function(s) changed",
        diff.deployment.len(),
        diff.functions.len()
    );

    diff
}
