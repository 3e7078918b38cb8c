//! # Candidate Scoring
//!
//! A cheap English plausibility check on a fully decrypted candidate. It is
//! only used to rank candidates of different key lengths against each other;
//! each column has already been fitted by frequency distance.

use std::fmt::Debug;

use crate::consts::VOWELS;

/// Ranks decrypted candidates; higher means more English-like.
///
/// Implementations must be pure: the same text always gets the same score.
pub trait CandidateScorer: Debug + Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// `spaces + 0.5 × vowels` over the whole text.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelSpaceScorer;

impl CandidateScorer for VowelSpaceScorer {
    #[inline]
    fn score(&self, text: &str) -> f64 {
        english_score(text)
    }
}

/// Counts spaces plus half the vowels (`AEIOU`, either case) in `text`.
///
/// Punctuation and spacing stay in the text being scored.
///
/// # Example
///
/// ```
/// use vigenere_breaker::analysis::english_score;
///
/// assert_eq!(english_score("Hello, World! Again"), 5.0);
/// ```
#[must_use]
pub fn english_score(text: &str) -> f64 {
    let (spaces, vowels) = text.chars().fold((0usize, 0usize), |(s, v), c| {
        if c == ' ' {
            (s + 1, v)
        } else if VOWELS.contains(&c) {
            (s, v + 1)
        } else {
            (s, v)
        }
    });
    spaces as f64 + 0.5 * vowels as f64
}
