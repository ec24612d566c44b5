//! Markdown report output.

pub mod markdown;

// Re-export main functions
pub use markdown::{render_contract_section, render_header, simplify_contract_name};
