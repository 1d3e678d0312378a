//! `phishdrill` — security-awareness training game engine

use clap::Parser;

use phishdrill::cli::args::Cli;
use phishdrill::cli::commands;
use phishdrill::error::ExitCode;
use phishdrill::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
