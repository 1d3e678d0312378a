//! Built-in catalogs
//!
//! Curated training content embedded in the binary at compile time.
//! Enables zero-configuration usage: `phishdrill simulate --catalog phishing`

use std::fmt;
use std::sync::{Arc, LazyLock};

use phishdrill_core::catalog::{ClueCase, QuestionCatalog};
use phishdrill_core::error::CatalogError;

use crate::catalog::loader::{parse_clue_case, parse_question_catalog};

// ============================================================================
// Types
// ============================================================================

/// A built-in catalog embedded in the binary.
pub struct BuiltinCatalog {
    /// Unique identifier (kebab-case, e.g., "phishing").
    pub name: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Which game the catalog feeds.
    pub kind: CatalogKind,

    /// Tags for filtering.
    pub tags: &'static [&'static str],

    /// Raw YAML content (embedded at compile time).
    pub yaml: &'static str,
}

/// Which engine a built-in catalog is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogKind {
    /// A question catalog for the timed true/false games.
    Questions,
    /// A clue case for the detective exercise.
    ClueCase,
}

impl CatalogKind {
    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questions => "Questions",
            Self::ClueCase => "Clue case",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Questions => write!(f, "questions"),
            Self::ClueCase => write!(f, "clue_case"),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Global registry of all built-in catalogs.
static BUILTIN_CATALOGS: LazyLock<Vec<BuiltinCatalog>> = LazyLock::new(|| {
    vec![
        BuiltinCatalog {
            name: "phishing",
            description: "Phishing recognition across emails, logins, contests, and messages",
            kind: CatalogKind::Questions,
            tags: &["phishing", "email", "timed"],
            yaml: include_str!("../../catalogs/phishing.yaml"),
        },
        BuiltinCatalog {
            name: "imagery",
            description: "Real photo or AI-generated? Untimed quiz with hints",
            kind: CatalogKind::Questions,
            tags: &["imagery", "deepfake", "hints"],
            yaml: include_str!("../../catalogs/imagery.yaml"),
        },
        BuiltinCatalog {
            name: "urgent-invoice",
            description: "Clue-discovery case: a spoofed payment-provider email",
            kind: CatalogKind::ClueCase,
            tags: &["detective", "email", "clues"],
            yaml: include_str!("../../catalogs/urgent-invoice.yaml"),
        },
    ]
});

/// Returns every built-in catalog in display order.
#[must_use]
pub fn all() -> &'static [BuiltinCatalog] {
    &BUILTIN_CATALOGS
}

/// Looks up a built-in catalog by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static BuiltinCatalog> {
    BUILTIN_CATALOGS.iter().find(|c| c.name == name)
}

/// Loads and freezes a built-in question catalog.
///
/// # Errors
///
/// [`CatalogError::UnknownBuiltin`] for unregistered names or names
/// registered as a clue case; parse/validation errors should not occur
/// for embedded content but are propagated rather than unwrapped.
pub fn load_questions(name: &str) -> Result<Arc<QuestionCatalog>, CatalogError> {
    let builtin = find(name)
        .filter(|c| c.kind == CatalogKind::Questions)
        .ok_or_else(|| CatalogError::UnknownBuiltin { name: name.into() })?;
    parse_question_catalog(builtin.name, builtin.yaml)
}

/// Loads and freezes a built-in clue case.
///
/// # Errors
///
/// Same conditions as [`load_questions`].
pub fn load_clue_case(name: &str) -> Result<Arc<ClueCase>, CatalogError> {
    let builtin = find(name)
        .filter(|c| c.kind == CatalogKind::ClueCase)
        .ok_or_else(|| CatalogError::UnknownBuiltin { name: name.into() })?;
    parse_clue_case(builtin.name, builtin.yaml)
}
