//! Error types for KAIROS

use thiserror::Error;

/// Core KAIROS errors
#[derive(Error, Debug)]
pub enum KairosError {
    // Configuration errors
    #[error("Invalid timer configuration: acceleration factor {0} must be non-negative")]
    NegativeAcceleration(f64),

    // Sync errors
    #[error("No sync authority is wired up")]
    AuthorityUnavailable,

    #[error("Sync authority failed: {0}")]
    Authority(String),
}

/// Result type for KAIROS operations
pub type KairosResult<T> = Result<T, KairosError>;
