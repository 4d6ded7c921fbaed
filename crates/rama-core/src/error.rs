//! # Validation Errors
//!
//! Errors raised while turning raw request input into domain primitives.
//! The `Display` text of each variant is returned to the caller as-is.

use thiserror::Error;

/// Validation errors for the case query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `radicado` parameter is absent or empty.
    #[error("missing radicado parameter")]
    MissingRadicado,

    /// The `radicado` parameter does not have the required length.
    #[error("radicado must be exactly 23 characters")]
    InvalidLength {
        /// Character count of the rejected value.
        actual: usize,
    },
}
