//! Seed file loading
//!
//! One read of a static JSON file at startup. The load is
//! fire-and-forget: any failure leaves the store at its prior (empty)
//! contents with a WARN, and the server keeps serving. No retry, no
//! timeout.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::model::InsuranceRecord;
use crate::observability::Logger;

use super::RecordStore;

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not a valid record list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and deserialize a seed file.
pub fn load_records(path: &Path) -> Result<Vec<InsuranceRecord>, SeedError> {
    let content = fs::read_to_string(path)?;
    let records: Vec<InsuranceRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// Load the seed file into the store, tolerating failure.
///
/// Returns the number of records loaded; 0 on any failure.
pub fn apply(store: &RecordStore, path: &Path) -> usize {
    match load_records(path) {
        Ok(records) => {
            let count = records.len();
            if store.load(records).is_err() {
                Logger::warn("SEED_SKIPPED", &[("reason", "store lock poisoned")]);
                return 0;
            }
            Logger::info(
                "SEED_LOADED",
                &[
                    ("path", &path.display().to_string()),
                    ("records", &count.to_string()),
                ],
            );
            count
        }
        Err(e) => {
            Logger::warn(
                "SEED_SKIPPED",
                &[
                    ("path", &path.display().to_string()),
                    ("reason", &e.to_string()),
                ],
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_seed(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const VALID_SEED: &str = r#"[
        {
            "id": "seed-1",
            "name": "Alice Johnson",
            "email": "alice@example.com",
            "phone": "(555) 111-2233",
            "policyNumber": "POL-1001",
            "insuranceType": "health",
            "startDate": "2024-01-01",
            "endDate": "2025-01-01",
            "premium": 150.5,
            "status": "active"
        }
    ]"#;

    #[test]
    fn test_load_valid_seed() {
        let tmp = TempDir::new().unwrap();
        let path = write_seed(&tmp, "insurers.json", VALID_SEED);

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "seed-1");
        assert_eq!(records[0].premium, 150.5);
    }

    #[test]
    fn test_apply_populates_store() {
        let tmp = TempDir::new().unwrap();
        let path = write_seed(&tmp, "insurers.json", VALID_SEED);

        let store = RecordStore::new();
        assert_eq!(apply(&store, &path), 1);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_missing_file_leaves_store_untouched() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::new();

        assert_eq!(apply(&store, &tmp.path().join("nope.json")), 0);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_malformed_seed_leaves_store_untouched() {
        let tmp = TempDir::new().unwrap();
        let path = write_seed(&tmp, "bad.json", "{not json");

        let store = RecordStore::new();
        assert_eq!(apply(&store, &path), 0);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_wrong_shape_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_seed(&tmp, "obj.json", r#"{"records": []}"#);

        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
