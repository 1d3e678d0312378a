//! Catalog loader
//!
//! Reads, parses, validates, and freezes catalog files. Warnings are
//! logged and ignored; any error-severity issue fails the load with the
//! full issue list attached.

use std::path::Path;
use std::sync::Arc;

use phishdrill_core::catalog::{ClueCase, QuestionCatalog};
use phishdrill_core::error::{CatalogError, Severity, ValidationIssue};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::catalog::validation::{validate_clue_case, validate_questions};

/// Loads and validates a question catalog from a YAML file.
///
/// # Errors
///
/// [`CatalogError`] on missing/unreadable files, parse failures, or
/// error-severity validation issues.
pub fn load_question_catalog(path: &Path) -> Result<Arc<QuestionCatalog>, CatalogError> {
    let yaml = read_file(path)?;
    parse_question_catalog(&path.display().to_string(), &yaml)
}

/// Parses and validates a question catalog from YAML text.
///
/// `source` labels the origin (a path or a built-in name) in errors.
///
/// # Errors
///
/// [`CatalogError::Parse`] or [`CatalogError::Validation`].
pub fn parse_question_catalog(
    source: &str,
    yaml: &str,
) -> Result<Arc<QuestionCatalog>, CatalogError> {
    let catalog: QuestionCatalog = parse(source, yaml)?;
    let issues = validate_questions(&catalog);
    check(source, issues)?;
    debug!(source, questions = catalog.len(), "question catalog loaded");
    Ok(Arc::new(catalog))
}

/// Loads and validates a clue case from a YAML file.
///
/// # Errors
///
/// Same conditions as [`load_question_catalog`].
pub fn load_clue_case(path: &Path) -> Result<Arc<ClueCase>, CatalogError> {
    let yaml = read_file(path)?;
    parse_clue_case(&path.display().to_string(), &yaml)
}

/// Parses and validates a clue case from YAML text.
///
/// # Errors
///
/// [`CatalogError::Parse`] or [`CatalogError::Validation`].
pub fn parse_clue_case(source: &str, yaml: &str) -> Result<Arc<ClueCase>, CatalogError> {
    let case: ClueCase = parse(source, yaml)?;
    let issues = validate_clue_case(&case);
    check(source, issues)?;
    debug!(source, zones = case.total_clues(), "clue case loaded");
    Ok(Arc::new(case))
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(source: &str, yaml: &str) -> Result<T, CatalogError> {
    serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
        path: source.to_string(),
        line: e.location().map(|l| l.line()),
        message: e.to_string(),
    })
}

fn check(source: &str, issues: Vec<ValidationIssue>) -> Result<(), CatalogError> {
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!(source, %issue, "catalog warning");
    }
    if issues.iter().any(|i| i.severity == Severity::Error) {
        return Err(CatalogError::Validation {
            path: source.to_string(),
            issues,
        });
    }
    Ok(())
}
