//! CLI module for coverdesk
//!
//! Provides the command-line interface:
//! - serve: boot the admin API server
//! - check-seed: one-shot seed file validation

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_seed, run_command, serve};
pub use errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}
