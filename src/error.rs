//! Error types for stepsort.
//!
//! The step engine itself is total: `advance` never fails. Errors only arise
//! at the edges (loading configuration, reading files, emitting reports) and
//! from the invariant guard used by `verify` and the tests.

use thiserror::Error;

/// Result type alias for stepsort operations.
pub type SortResult<T> = Result<T, SortError>;

/// Unified error type for all stepsort operations.
#[derive(Debug, Error)]
pub enum SortError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ===== Invariant Errors =====
    /// A sequence invariant did not hold after a step.
    #[error("Invariant '{name}' violated: {detail}")]
    InvariantViolation {
        /// Name of the violated invariant.
        name: String,
        /// What was observed.
        detail: String,
    },
}

impl SortError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an invariant violation error.
    #[must_use]
    pub fn invariant(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            name: name.into(),
            detail: detail.into(),
        }
    }

    /// Check if this error reports a broken sequence invariant.
    #[must_use]
    pub const fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
