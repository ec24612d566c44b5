//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a gas report file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("report file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("entry {index} in {path} is missing the \"contract\" field")]
    MissingContract { path: PathBuf, index: usize },
}

impl LoadError {
    /// Process exit code for this failure.
    ///
    /// Distinct codes let callers (CI scripts, mostly) tell a missing file
    /// apart from a malformed one.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound(_) | LoadError::Io { .. } => 2,
            LoadError::Json { .. } => 3,
            LoadError::MissingContract { .. } => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = LoadError::FileNotFound(PathBuf::from("x.json"));
        assert_eq!(not_found.exit_code(), 2);

        let bad_json = LoadError::Json {
            path: PathBuf::from("x.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(bad_json.exit_code(), 3);

        let no_contract = LoadError::MissingContract {
            path: PathBuf::from("x.json"),
            index: 1,
        };
        assert_eq!(no_contract.exit_code(), 4);
    }
}
