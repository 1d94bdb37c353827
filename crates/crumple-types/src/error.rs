//! Error types for the Crumple engine.
//!
//! All crates return `CrumpleResult<T>` from fallible operations.
//! Gesture handling never fails: rejected folds are reported as
//! outcomes, not errors.

use thiserror::Error;

/// Unified error type for the Crumple engine.
#[derive(Debug, Error)]
pub enum CrumpleError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, CrumpleError>`.
pub type CrumpleResult<T> = Result<T, CrumpleError>;
