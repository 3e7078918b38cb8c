//! # Friedman Test
//!
//! Turns an index of coincidence into an approximate repeating-key length:
//!
//! ```text
//! K ≈ 0.0279 / (IC − 0.0385) + 1
//! ```
//!
//! The result is a hint. The key recovery search always tries a window of
//! lengths around it and never trusts it exactly.

use crate::consts::{FRIEDMAN_NUMERATOR, FRIEDMAN_SENTINEL, RANDOM_IC};
use crate::stats::{index_of_coincidence, AlphabeticStream};

/// Friedman key length estimate for a given index of coincidence.
///
/// Returns exactly [`FRIEDMAN_SENTINEL`] (1.0) when `ic <= 0`, when
/// `ic − 0.0385` is zero, or when the formula would not produce a finite
/// number. An `ic` a little below 0.0385 gives a large negative estimate,
/// which leaves no key length to search.
///
/// # Example
///
/// ```
/// use vigenere_breaker::friedman::estimate_key_length;
///
/// assert_eq!(estimate_key_length(0.0385), 1.0);
/// assert_eq!(estimate_key_length(0.0), 1.0);
/// let k = estimate_key_length(0.0664);
/// assert!((k - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn estimate_key_length(ic: f64) -> f64 {
    let excess = ic - RANDOM_IC;
    if ic <= 0.0 || excess == 0.0 || !ic.is_finite() {
        return FRIEDMAN_SENTINEL;
    }

    let estimate = FRIEDMAN_NUMERATOR / excess + 1.0;
    if estimate.is_finite() {
        estimate
    } else {
        FRIEDMAN_SENTINEL
    }
}

/// Friedman estimate straight from text: IC of its letters, then
/// [`estimate_key_length`].
#[must_use]
pub fn friedman_test(text: &str) -> f64 {
    estimate_key_length(index_of_coincidence(&AlphabeticStream::from_text(text)))
}
