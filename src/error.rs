//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, BreakerError>`](BreakerError).
//!
//! Statistical degeneracies (a Friedman denominator of zero, an empty column)
//! are recovered locally with neutral values and never show up here.

use thiserror::Error;

/// The error type for all key recovery and cipher operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakerError {
    /// Not enough alphabetic data to compute any statistic.
    ///
    /// Returned when the ciphertext contains no ASCII letters at all, so the
    /// index of coincidence and every column are undefined.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A caller-supplied setting is unusable.
    ///
    /// This variant is used for:
    /// - a maximum key length below 1
    /// - a candidate length window that collapsed to nothing
    /// - an empty cipher key, or one containing non-alphabetic characters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, BreakerError>;
