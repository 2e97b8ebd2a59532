//! CLI-specific error types
//!
//! All CLI errors are fatal: they print to stderr and the process
//! exits non-zero.

use thiserror::Error;

use crate::http_server::ConfigError;
use crate::store::seed::SeedError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Seed file failed validation (check-seed only; serve tolerates it)
    #[error("seed error: {0}")]
    Seed(#[from] SeedError),

    /// Seed file violates the unique-identity invariant
    #[error("duplicate record id in seed: {0}")]
    DuplicateId(String),

    /// Runtime or listener failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
