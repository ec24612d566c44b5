//! Configuration and constants for the CLI.

/// Default baseline report path when no argument is given
pub const DEFAULT_BEFORE_PATH: &str = "before.json";

/// Default updated report path when no argument is given
pub const DEFAULT_AFTER_PATH: &str = "after.json";
