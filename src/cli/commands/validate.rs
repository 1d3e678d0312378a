//! `validate` — lint a catalog file without playing it.

use crate::catalog::loader::{load_clue_case, load_question_catalog};
use crate::catalogs::CatalogKind;
use crate::cli::args::ValidateArgs;
use crate::error::PhishdrillError;

/// Loads the file through the full pipeline and prints a summary.
/// Warnings surface through the logging layer; any error-severity issue
/// fails the command with the issue list.
///
/// # Errors
///
/// [`phishdrill_core::error::CatalogError`] on any load failure.
pub fn run(args: &ValidateArgs) -> Result<(), PhishdrillError> {
    match args.kind {
        CatalogKind::Questions => {
            let catalog = load_question_catalog(&args.path)?;
            println!(
                "{}: question catalog '{}' is valid ({} question(s))",
                args.path.display(),
                catalog.catalog.name,
                catalog.len()
            );
        }
        CatalogKind::ClueCase => {
            let case = load_clue_case(&args.path)?;
            println!(
                "{}: clue case '{}' is valid ({} zone(s), {} wheel option(s))",
                args.path.display(),
                case.id,
                case.total_clues(),
                case.reasons.len()
            );
        }
    }
    Ok(())
}
