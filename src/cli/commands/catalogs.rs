//! `catalogs list` and `catalogs show`.

use phishdrill_core::error::CatalogError;
use serde_json::json;

use crate::catalogs;
use crate::cli::args::{CatalogsCommand, CatalogsListArgs, CatalogsShowArgs, CatalogsSubcommand};
use crate::error::PhishdrillError;

/// Runs a `catalogs` subcommand.
///
/// # Errors
///
/// [`CatalogError::UnknownBuiltin`] from `show`, JSON errors from
/// `list --json`.
pub fn run(cmd: &CatalogsCommand) -> Result<(), PhishdrillError> {
    match &cmd.subcommand {
        CatalogsSubcommand::List(args) => list(args),
        CatalogsSubcommand::Show(args) => show(args),
    }
}

fn list(args: &CatalogsListArgs) -> Result<(), PhishdrillError> {
    let listed: Vec<_> = catalogs::all()
        .iter()
        .filter(|c| args.kind.is_none_or(|k| c.kind == k))
        .collect();

    if args.json {
        let entries: Vec<_> = listed
            .iter()
            .map(|c| {
                json!({
                    "name": c.name,
                    "description": c.description,
                    "kind": c.kind.to_string(),
                    "tags": c.tags,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for catalog in listed {
        println!(
            "{:<16} {:<10} {}",
            catalog.name,
            catalog.kind.label(),
            catalog.description
        );
    }
    Ok(())
}

fn show(args: &CatalogsShowArgs) -> Result<(), PhishdrillError> {
    let builtin = catalogs::find(&args.name).ok_or_else(|| CatalogError::UnknownBuiltin {
        name: args.name.clone(),
    })?;
    print!("{}", builtin.yaml);
    Ok(())
}
