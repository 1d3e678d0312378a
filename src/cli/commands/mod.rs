//! CLI command implementations
//!
//! One module per command; `dispatch` routes a parsed [`Cli`] to it.

mod catalogs;
mod simulate;
mod validate;

use crate::cli::args::{Cli, Commands};
use crate::error::PhishdrillError;

/// Routes the parsed CLI to its command implementation.
///
/// # Errors
///
/// Whatever the command propagates; the caller maps the error to an
/// exit code.
pub fn dispatch(cli: Cli) -> Result<(), PhishdrillError> {
    match cli.command {
        Commands::Catalogs(cmd) => catalogs::run(&cmd),
        Commands::Validate(args) => validate::run(&args),
        Commands::Simulate(args) => simulate::run(&args),
    }
}
