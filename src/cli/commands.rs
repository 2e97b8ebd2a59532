//! CLI command implementations
//!
//! `serve` loads config, seeds the store (tolerating failure), and
//! blocks on the HTTP server. `check-seed` is a one-shot validation
//! of the seed file, including the unique-identity invariant that the
//! serving path deliberately does not enforce.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, RecordsState, ServerConfig};
use crate::observability::Logger;
use crate::store::seed;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::CheckSeed { config } => check_seed(&config),
    }
}

/// Boot sequence: config, store, seed, listener.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    Logger::info(
        "CONFIG_LOADED",
        &[("path", &config_path.display().to_string())],
    );

    let records = Arc::new(RecordsState::new());
    // Fire-and-forget: a missing or malformed seed file logs a WARN
    // and the server starts with an empty store.
    seed::apply(&records.store, &config.seed_path);

    let server = HttpServer::with_config(config, records);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

/// One-shot seed validation.
pub fn check_seed(config_path: &Path) -> CliResult<()> {
    let config = ServerConfig::load(config_path)?;
    let records = seed::load_records(&config.seed_path)?;

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(CliError::DuplicateId(record.id.clone()));
        }
    }

    println!(
        "{}: {} records, ids unique",
        config.seed_path.display(),
        records.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_pointing_at(seed: &Path, dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("coverdesk.json");
        let body = serde_json::json!({ "seed_path": seed });
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    #[test]
    fn test_check_seed_accepts_valid_file() {
        let tmp = TempDir::new().unwrap();
        let seed_path = tmp.path().join("insurers.json");
        fs::write(
            &seed_path,
            r#"[{
                "id": "a", "name": "A", "email": "a@example.com",
                "phone": "1", "policyNumber": "P", "insuranceType": "auto",
                "startDate": "2024-01-01", "endDate": "2025-01-01",
                "premium": 1.0, "status": "pending"
            }]"#,
        )
        .unwrap();

        let config = config_pointing_at(&seed_path, &tmp);
        assert!(check_seed(&config).is_ok());
    }

    #[test]
    fn test_check_seed_rejects_duplicate_ids() {
        let tmp = TempDir::new().unwrap();
        let seed_path = tmp.path().join("insurers.json");
        let record = r#"{
            "id": "dup", "name": "A", "email": "a@example.com",
            "phone": "1", "policyNumber": "P", "insuranceType": "auto",
            "startDate": "2024-01-01", "endDate": "2025-01-01",
            "premium": 1.0, "status": "pending"
        }"#;
        fs::write(&seed_path, format!("[{record},{record}]")).unwrap();

        let config = config_pointing_at(&seed_path, &tmp);
        let err = check_seed(&config).unwrap_err();
        assert!(matches!(err, CliError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn test_check_seed_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let config = config_pointing_at(&tmp.path().join("absent.json"), &tmp);
        assert!(matches!(check_seed(&config), Err(CliError::Seed(_))));
    }
}
