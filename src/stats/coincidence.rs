//! src/stats/coincidence.rs
//! Index of coincidence.

use crate::stats::AlphabeticStream;

/// Probability that two letters drawn without replacement from `stream` match.
///
/// `IC = Σ count(c)·(count(c) − 1) / (N·(N − 1))`, where `N` is the stream
/// length. Defined as 0.0 when `N < 2`. Depends only on the letter counts,
/// never on their order. Always within `[0, 1]`.
///
/// # Example
///
/// ```
/// use vigenere_breaker::stats::{index_of_coincidence, AlphabeticStream};
///
/// let ic = index_of_coincidence(&AlphabeticStream::from_text("a-a b-b"));
/// assert!((ic - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn index_of_coincidence(stream: &AlphabeticStream) -> f64 {
    let n = stream.len();
    if n < 2 {
        return 0.0;
    }

    let matching_pairs: u64 = stream
        .letter_counts()
        .iter()
        .map(|&count| count as u64 * (count as u64).saturating_sub(1))
        .sum();
    let total_pairs = n as u64 * (n as u64 - 1);

    matching_pairs as f64 / total_pairs as f64
}
