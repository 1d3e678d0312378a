//! Error types for `phishdrill`
//!
//! The engine reports contract violations as typed errors and never
//! mutates state on a failed operation: preconditions are checked before
//! any field is written.

use phishdrill_core::error::CatalogError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `phishdrill` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Catalog error (invalid YAML, validation failure)
    pub const CATALOG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `phishdrill` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum PhishdrillError {
    /// Catalog loading or validation error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Engine contract violation
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid CLI usage not caught by argument parsing
    #[error("{0}")]
    Usage(String),
}

impl PhishdrillError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(_) => ExitCode::CATALOG_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
            Self::Engine(_) | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Engine Errors
// ============================================================================

/// Contract violations reported by the session and clue engines.
///
/// All variants are local, synchronous conditions: the call is rejected,
/// state is left unchanged, and retrying the identical call cannot
/// succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An operation was called in a phase that forbids it
    #[error("'{operation}' is not valid in the {phase} phase")]
    InvalidTransition {
        /// The rejected operation
        operation: &'static str,
        /// Human-readable description of the phase the engine was in
        phase: String,
    },

    /// A session was started over zero sampleable items
    #[error("cannot start a session from an empty catalog")]
    EmptyCatalog,

    /// More items were requested than the catalog holds
    #[error("sample of {requested} question(s) requested but only {available} available")]
    SampleTooLarge {
        /// Requested sample size
        requested: usize,
        /// Catalog size
        available: usize,
    },

    /// A clue case was finalized with no verdict set
    #[error("cannot finalize a case before a verdict is set")]
    MissingVerdict,

    /// The referenced zone is not part of the current document
    #[error("unknown zone '{0}'")]
    UnknownZone(String),

    /// The proposed reason code is not offered on the wheel
    #[error("unknown reason code '{0}'")]
    UnknownReason(String),

    /// The hint for the current question was already revealed
    #[error("a hint was already used for this question")]
    HintAlreadyUsed,
}

impl EngineError {
    /// Builds an [`EngineError::InvalidTransition`] for `operation`
    /// attempted in `phase`.
    #[must_use]
    pub fn invalid_transition(operation: &'static str, phase: impl Into<String>) -> Self {
        Self::InvalidTransition {
            operation,
            phase: phase.into(),
        }
    }
}
