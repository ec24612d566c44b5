//! Gas report file loader.
//!
//! Reads a JSON array of per-contract entries and keys it by the required
//! `contract` field. Duplicate identifiers within one file are not validated;
//! the last entry wins.

use crate::parser::schema::{ContractRecord, Report};
use crate::utils::error::LoadError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Load a gas report from a JSON file
///
/// **Public** - main entry point for report loading
///
/// # Arguments
/// * `path` - Path to the report JSON file
///
/// # Returns
/// The report as a sorted map from contract identifier to its record
///
/// # Errors
/// * `LoadError::FileNotFound` - the file does not exist
/// * `LoadError::Io` - any other read failure
/// * `LoadError::Json` - the file is not a valid JSON array of report entries
/// * `LoadError::MissingContract` - an entry has no `contract` field
pub fn load_report(path: impl AsRef<Path>) -> Result<Report, LoadError> {
    let path = path.as_ref();

    debug!("Loading gas report from: {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::FileNotFound(path.to_path_buf())
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut report = Report::new();

    for (index, entry) in entries.into_iter().enumerate() {
        // The `contract` key is the only required part of the schema; its
        // absence is a distinct error so the exit code can tell it apart
        // from malformed JSON.
        let contract = entry
            .get("contract")
            .and_then(|value| value.as_str())
            .ok_or_else(|| LoadError::MissingContract {
                path: path.to_path_buf(),
                index,
            })?
            .to_string();

        let record: ContractRecord =
            serde_json::from_value(entry).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        report.insert(contract, record);
    }

    debug!(
        "Loaded {} contract(s) from {}",
        report.len(),
        path.display()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_report(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_report() {
        let file = write_report(
            r#"[
                {
                    "contract": "src/Token.sol:Token",
                    "deployment": {"gas": 1000, "size": 240},
                    "functions": {"transfer(address,uint256)": {"calls": 2, "min": 10, "max": 30}}
                }
            ]"#,
        );

        let report = load_report(file.path()).unwrap();

        assert_eq!(report.len(), 1);
        let record = &report["src/Token.sol:Token"];
        assert_eq!(record.deployment.unwrap().gas, 1000);
        assert_eq!(record.functions["transfer(address,uint256)"].calls, Some(2));
    }

    #[test]
    fn test_duplicate_contract_last_wins() {
        let file = write_report(
            r#"[
                {"contract": "a.sol:A", "deployment": {"gas": 1}},
                {"contract": "a.sol:A", "deployment": {"gas": 2}}
            ]"#,
        );

        let report = load_report(file.path()).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report["a.sol:A"].deployment.unwrap().gas, 2);
    }

    #[test]
    fn test_missing_file() {
        let result = load_report("does-not-exist.json");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_report("not json at all");
        let result = load_report(file.path());
        assert!(matches!(result, Err(LoadError::Json { .. })));
    }

    #[test]
    fn test_missing_contract_field() {
        let file = write_report(r#"[{"deployment": {"gas": 1}}]"#);
        let result = load_report(file.path());
        assert!(matches!(
            result,
            Err(LoadError::MissingContract { index: 0, .. })
        ));
    }
}
