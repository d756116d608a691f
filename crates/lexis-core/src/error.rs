//! Error types for `Lexis`.
//!
//! This module provides a unified error type for all term index operations.
//! Absence (a term or prefix that is not indexed) is never an error: it is
//! reported as `false` or an empty result set.

use thiserror::Error;

/// Result type alias for `Lexis` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `Lexis` operations.
///
/// Each variant includes a descriptive error message suitable for end-users.
/// Error codes follow the pattern `LEXIS-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid argument (LEXIS-001).
    ///
    /// Raised before any mutation or I/O for empty or whitespace-only terms.
    #[error("[LEXIS-001] Invalid argument: {0}")]
    InvalidArgument(String),

    /// Corrupt data (LEXIS-002).
    ///
    /// A node block or index file could not be decoded to its fixed shape.
    /// Never skipped silently: a bad block desynchronizes every block after it.
    #[error("[LEXIS-002] Corrupt data: {0}")]
    CorruptData(String),

    /// IO error (LEXIS-003).
    #[error("[LEXIS-003] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error (LEXIS-004).
    #[error("[LEXIS-004] Configuration error: {0}")]
    Config(String),

    /// Serialization error (LEXIS-005).
    #[error("[LEXIS-005] Serialization error: {0}")]
    Serialization(String),

    /// Index not found (LEXIS-006).
    #[error("[LEXIS-006] Term index not found at '{0}'")]
    IndexNotFound(String),
}

impl Error {
    /// Returns the error code (e.g., "LEXIS-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "LEXIS-001",
            Self::CorruptData(_) => "LEXIS-002",
            Self::Io(_) => "LEXIS-003",
            Self::Config(_) => "LEXIS-004",
            Self::Serialization(_) => "LEXIS-005",
            Self::IndexNotFound(_) => "LEXIS-006",
        }
    }

    /// Returns true if this error is recoverable.
    ///
    /// Corrupt data is not recoverable: the index must be rebuilt.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CorruptData(_))
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
