//! Unified error types for the catalog service
//!
//! This module defines one error type for all layers:
//! - `DomainError`: Core business logic and persistence errors

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A caller-supplied value failed validation.
    /// Carries the operator-facing message verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(String),
}
