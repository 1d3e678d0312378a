//! Core error types for `phishdrill`
//!
//! Catalog loading and validation error types shared across the workspace.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading and validation errors.
///
/// These errors cover all failure modes between reading a catalog file
/// and handing a frozen, validated catalog to the engine.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Parse {
        /// Path or name of the catalog source
        path: String,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Catalog validation failed
    #[error("validation failed for {path}: {}", format_issues(issues))]
    Validation {
        /// Path or name of the catalog source
        path: String,
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
    },

    /// Referenced catalog file not found
    #[error("catalog file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Reading the catalog file failed
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path to the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No built-in catalog registered under the given name
    #[error("no built-in catalog named '{name}'")]
    UnknownBuiltin {
        /// The requested catalog name
        name: String,
    },
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    format!("{errors} error(s), {} warning(s)", issues.len() - errors)
}

/// A single validation issue found during catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path to the problematic entry (e.g., `questions[3].difficulty`)
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl ValidationIssue {
    /// Creates an error-severity issue.
    #[must_use]
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Creates a warning-severity issue.
    #[must_use]
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.path, self.message)
    }
}

/// Severity of a validation issue.
///
/// Only `Error` issues block loading; warnings are reported and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The catalog cannot be used
    Error,
    /// Suspicious but loadable
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}
