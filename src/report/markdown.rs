//! Markdown rendering of computed gas diffs.
//!
//! One level-3 section per changed contract, each holding a
//! Metric / Before / After / Difference table.

use crate::differ::metrics::{ContractDiff, DeploymentDiff, MetricDiff};
use std::fmt::Write;

const TABLE_COLUMNS: [&str; 4] = ["Metric", "Before", "After", "Difference"];

/// Render the report title and attribution lines
///
/// **Public** - printed once, ahead of all contract sections
pub fn render_header() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        "# Gas report diff\n_This report was generated by \
         [gas-report-diff {version}](https://crates.io/crates/gas-report-diff/{version})_\n"
    )
}

/// Strip path and namespace prefixes from a contract identifier
///
/// **Public** - turns `"src/Token.sol:Token"` into `"Token"`
pub fn simplify_contract_name(contract: &str) -> &str {
    let after_colon = contract.rsplit(':').next().unwrap_or(contract);
    after_colon.rsplit('/').next().unwrap_or(after_colon)
}

/// Render one contract's section as a markdown table
///
/// **Public** - main entry point for rendering
///
/// # Arguments
/// * `contract_name` - simplified display name for the heading
/// * `diff` - every changed metric of the contract
///
/// # Returns
/// The section as a string: heading, table header, one row per changed
/// metric. Deployment rows come first, then function rows grouped by
/// normalized name in sorted order.
pub fn render_contract_section(contract_name: &str, diff: &ContractDiff) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n### {contract_name}\n");
    let _ = writeln!(out, "| {} |", TABLE_COLUMNS.join(" | "));
    let _ = writeln!(out, "| {} |", vec!["-"; TABLE_COLUMNS.len()].join(" | "));

    for (metric, values) in &diff.deployment {
        let _ = writeln!(
            out,
            "| Deployment {metric} | {} | {} | {} |",
            values.before,
            values.after,
            format_deployment_diff(values)
        );
    }

    for (function_name, function) in &diff.functions {
        for (metric, values) in &function.metrics {
            let _ = writeln!(
                out,
                "| {function_name} {} | {} | {} | {} |",
                metric.as_str(),
                format_side(values.before, function.calls_before),
                format_side(values.after, function.calls_after),
                format_metric_diff(values)
            );
        }
    }

    out
}

/// Format one Before/After cell, appending the call count when recorded
fn format_side(value: f64, calls: Option<u64>) -> String {
    match calls {
        Some(calls) => format!("{value} ({calls})"),
        None => format!("{value}"),
    }
}

/// Format a deployment Difference cell: `+100 (10.0%)`
fn format_deployment_diff(values: &DeploymentDiff) -> String {
    format!("{:+} ({:.1}%)", values.delta, values.relative_percent)
}

/// Format a function-metric Difference cell: `+10 (100.0%)`
fn format_metric_diff(values: &MetricDiff) -> String {
    format!("{:+} ({:.1}%)", values.delta, values.relative_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::metrics::FunctionDiff;
    use crate::parser::schema::FunctionMetric;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simplify_contract_name() {
        assert_eq!(simplify_contract_name("src/Token.sol:Token"), "Token");
        assert_eq!(simplify_contract_name("a/b/c.sol:Nested"), "Nested");
        assert_eq!(simplify_contract_name("Plain"), "Plain");
        assert_eq!(simplify_contract_name("dir/NoColon"), "NoColon");
    }

    #[test]
    fn test_render_deployment_row() {
        let diff = ContractDiff {
            deployment: vec![(
                "gas",
                DeploymentDiff {
                    before: 1000,
                    after: 1100,
                    delta: 100,
                    relative_percent: 10.0,
                },
            )],
            functions: Default::default(),
        };

        let section = render_contract_section("Foo", &diff);

        assert_eq!(
            section,
            "\n### Foo\n\n\
             | Metric | Before | After | Difference |\n\
             | - | - | - | - |\n\
             | Deployment gas | 1000 | 1100 | +100 (10.0%) |\n"
        );
    }

    #[test]
    fn test_render_function_row_with_calls() {
        let mut diff = ContractDiff::default();
        diff.functions.insert(
            "bar".to_string(),
            FunctionDiff {
                calls_before: Some(5),
                calls_after: Some(5),
                metrics: vec![(
                    FunctionMetric::Min,
                    MetricDiff {
                        before: 10.0,
                        after: 20.0,
                        delta: 10.0,
                        relative_percent: 100.0,
                    },
                )],
            },
        );

        let section = render_contract_section("Foo", &diff);

        assert!(section.contains("| bar min | 10 (5) | 20 (5) | +10 (100.0%) |"));
    }

    #[test]
    fn test_render_without_call_counts() {
        let mut diff = ContractDiff::default();
        diff.functions.insert(
            "bar".to_string(),
            FunctionDiff {
                calls_before: None,
                calls_after: None,
                metrics: vec![(
                    FunctionMetric::Max,
                    MetricDiff {
                        before: 12.5,
                        after: 10.0,
                        delta: -2.5,
                        relative_percent: -20.0,
                    },
                )],
            },
        );

        let section = render_contract_section("Foo", &diff);

        assert!(section.contains("| bar max | 12.5 | 10 | -2.5 (-20.0%) |"));
    }

    #[test]
    fn test_render_infinite_relative_delta() {
        let mut diff = ContractDiff::default();
        diff.functions.insert(
            "mint".to_string(),
            FunctionDiff {
                calls_before: None,
                calls_after: Some(1),
                metrics: vec![(
                    FunctionMetric::Min,
                    MetricDiff {
                        before: 0.0,
                        after: 30.0,
                        delta: 30.0,
                        relative_percent: f64::INFINITY,
                    },
                )],
            },
        );

        let section = render_contract_section("Foo", &diff);

        assert!(section.contains("| mint min | 0 | 30 (1) | +30 (inf%) |"));
    }
}
