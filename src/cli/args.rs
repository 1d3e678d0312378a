//! CLI argument definitions
//!
//! All Clap derive structs for `phishdrill` command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::catalogs::CatalogKind;

// ============================================================================
// Root CLI
// ============================================================================

/// Security-awareness training game engine.
#[derive(Parser, Debug)]
#[command(name = "phishdrill", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "PHISHDRILL_COLOR")]
    pub color: ColorChoice,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List or inspect the built-in catalogs.
    Catalogs(CatalogsCommand),

    /// Validate a catalog file without playing it.
    Validate(ValidateArgs),

    /// Run a scripted session against a catalog and print the report.
    Simulate(SimulateArgs),
}

/// Color output control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and NO_COLOR is unset.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

// ============================================================================
// Catalogs Command
// ============================================================================

/// Catalog registry commands.
#[derive(Args, Debug)]
pub struct CatalogsCommand {
    /// Catalogs subcommand.
    #[command(subcommand)]
    pub subcommand: CatalogsSubcommand,
}

/// Catalogs subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogsSubcommand {
    /// List the built-in catalogs.
    List(CatalogsListArgs),

    /// Print a built-in catalog's YAML.
    Show(CatalogsShowArgs),
}

/// Arguments for `catalogs list`.
#[derive(Args, Debug)]
pub struct CatalogsListArgs {
    /// Only list catalogs of this kind.
    #[arg(long, value_enum)]
    pub kind: Option<CatalogKind>,

    /// Emit the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `catalogs show`.
#[derive(Args, Debug)]
pub struct CatalogsShowArgs {
    /// Name of the built-in catalog.
    pub name: String,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the catalog YAML file.
    pub path: PathBuf,

    /// How to interpret the file.
    #[arg(long, value_enum, default_value_t = CatalogKind::Questions)]
    pub kind: CatalogKind,
}

// ============================================================================
// Simulate Command
// ============================================================================

/// Arguments for `simulate`.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Built-in catalog name to play.
    #[arg(long, default_value = "phishing")]
    pub catalog: String,

    /// Questions per session (question catalogs only).
    #[arg(long, default_value_t = 8)]
    pub questions: usize,

    /// Per-question countdown budget (e.g. "15s").
    #[arg(long, value_parser = humantime::parse_duration, default_value = "15s")]
    pub time_budget: Duration,

    /// Answer every item correctly instead of guessing.
    #[arg(long)]
    pub oracle: bool,

    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_defaults() {
        let cli = Cli::try_parse_from(["phishdrill", "simulate"]).unwrap();
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.catalog, "phishing");
        assert_eq!(args.questions, 8);
        assert_eq!(args.time_budget, Duration::from_secs(15));
        assert!(!args.oracle);
    }

    #[test]
    fn time_budget_accepts_humantime() {
        let cli =
            Cli::try_parse_from(["phishdrill", "simulate", "--time-budget", "30s"]).unwrap();
        let Commands::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.time_budget, Duration::from_secs(30));
    }
}
