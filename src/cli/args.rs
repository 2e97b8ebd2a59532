//! CLI argument definitions using clap
//!
//! Commands:
//! - coverdesk serve --config <path>
//! - coverdesk check-seed --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coverdesk - a small, self-hostable admin backend for insurance records
#[derive(Parser, Debug)]
#[command(name = "coverdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the admin API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./coverdesk.json")]
        config: PathBuf,
    },

    /// Validate the seed file and exit
    CheckSeed {
        /// Path to configuration file
        #[arg(long, default_value = "./coverdesk.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_default_config_path() {
        let cli = Cli::try_parse_from(["coverdesk", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config } => {
                assert_eq!(config, PathBuf::from("./coverdesk.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_seed_custom_config_path() {
        let cli =
            Cli::try_parse_from(["coverdesk", "check-seed", "--config", "/tmp/c.json"]).unwrap();
        match cli.command {
            Command::CheckSeed { config } => {
                assert_eq!(config, PathBuf::from("/tmp/c.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["coverdesk"]).is_err());
    }
}
