//! Gas Report Diff
//!
//! Compares two gas-usage reports (before/after a code change) for
//! smart-contract deployments and function calls, and renders a
//! markdown table of the differences.
//!
//! This crate provides the core implementation for the
//! `gas-report-diff` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install gas-report-diff
//! gas-report-diff before.json after.json
//! ```

pub mod commands;
pub mod differ;
pub mod parser;
pub mod report;
pub mod utils;
