// Copyright 2025 Cowboy AI, LLC.

//! Error types for taxonomy loading and classification

use thiserror::Error;

/// Errors that can occur around a classification run
///
/// Classification itself is total; every variant here is raised at a
/// boundary (loading the taxonomy, validating the requested depth, or
/// rendering a report).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// The taxonomy resource could not be read or decoded
    #[error("Data source error: {source_id} - {reason}")]
    DataSource {
        /// Identifier of the resource (usually a file path)
        source_id: String,
        /// Why loading failed
        reason: String,
    },

    /// The requested depth is not a positive integer
    #[error("Invalid depth: {0}")]
    InvalidDepth(String),

    /// A report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for lexicon operations
pub type LexiconResult<T> = Result<T, LexiconError>;

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Serialization(err.to_string())
    }
}

impl LexiconError {
    /// Create a data source error for the given resource
    pub fn data_source(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        LexiconError::DataSource {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a data source error
    pub fn is_data_source(&self) -> bool {
        matches!(self, LexiconError::DataSource { .. })
    }

    /// Check if this is an invalid depth error
    pub fn is_invalid_depth(&self) -> bool {
        matches!(self, LexiconError::InvalidDepth(_))
    }
}
