//! # Key Recovery
//!
//! Drives the whole pipeline for one ciphertext:
//!
//! 1. index of coincidence of the alphabetic stream
//! 2. Friedman estimate, rounded and widened into a window of lengths
//! 3. per length: split into columns, solve each column's shift, decrypt, score
//! 4. keep the best score; ties go to the shorter key, then the smaller key
//!
//! Lengths and columns are independent, so with the `parallel` feature they
//! run on the rayon pool. The final pick is a total order over candidates, so
//! the result never depends on evaluation order.

use std::cmp::Ordering;
use std::ops::RangeInclusive;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::column::{ColumnShiftSolver, ShiftGuess};
use crate::analysis::score::{CandidateScorer, VowelSpaceScorer};
use crate::cipher::vigenere;
use crate::consts::{DEFAULT_MAX_KEY_LEN, MIN_KEY_LEN, WINDOW_RADIUS};
use crate::error::{BreakerError, Result};
use crate::friedman::estimate_key_length;
use crate::stats::{index_of_coincidence, AlphabeticStream};

/// One fully evaluated key length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScoredCandidate {
    pub key_length: usize,
    /// Uppercase key, one letter per column.
    pub key: String,
    /// Scorer output on the decrypted text; higher is better.
    pub score: f64,
    /// Sum of the column distances to the reference table.
    pub distance: f64,
    /// The ciphertext decrypted with `key`.
    pub plaintext: String,
}

/// Result of a key recovery run, with the numbers that led to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RecoveryReport {
    pub best: ScoredCandidate,
    pub index_of_coincidence: f64,
    pub friedman_estimate: f64,
    /// First and last key length searched (inclusive).
    pub window: (usize, usize),
    /// Every evaluated length, shortest first.
    pub candidates: Vec<ScoredCandidate>,
}

impl RecoveryReport {
    /// The recovered key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.best.key
    }

    /// The ciphertext decrypted with [`key`](Self::key).
    #[must_use]
    pub fn plaintext(&self) -> &str {
        &self.best.plaintext
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.best.score
    }

    /// The candidate evaluated for `key_length`, if it was in the window.
    #[must_use]
    pub fn candidate(&self, key_length: usize) -> Option<&ScoredCandidate> {
        self.candidates.iter().find(|c| c.key_length == key_length)
    }
}

/// Configured key recovery engine.
///
/// Build one with [`KeyRecoveryBuilder`](crate::builders::KeyRecoveryBuilder),
/// or use [`KeyRecovery::default`] for English with a maximum key length of
/// [`DEFAULT_MAX_KEY_LEN`].
///
/// # Thread Safety
///
/// `Send + Sync` and cheap to clone; a single engine can analyse many
/// ciphertexts concurrently.
#[derive(Debug, Clone)]
pub struct KeyRecovery {
    pub(crate) max_key_len: usize,
    pub(crate) solver: ColumnShiftSolver,
    pub(crate) scorer: Arc<dyn CandidateScorer>,
}

impl Default for KeyRecovery {
    fn default() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            solver: ColumnShiftSolver::english(),
            scorer: Arc::new(VowelSpaceScorer),
        }
    }
}

impl KeyRecovery {
    #[must_use]
    pub const fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    #[must_use]
    pub const fn solver(&self) -> &ColumnShiftSolver {
        &self.solver
    }

    /// Recovers the most likely key for `ciphertext`.
    ///
    /// # Errors
    ///
    /// - [`BreakerError::InsufficientData`] if the ciphertext has no letters
    /// - [`BreakerError::InvalidConfiguration`] if no key length can be searched
    pub fn recover(&self, ciphertext: &str) -> Result<RecoveryReport> {
        let stream = AlphabeticStream::from_text(ciphertext);
        if stream.is_empty() {
            return Err(BreakerError::InsufficientData(
                "ciphertext contains no alphabetic characters".into(),
            ));
        }

        let ic = index_of_coincidence(&stream);
        let estimate = estimate_key_length(ic);
        let window = candidate_window(estimate, self.max_key_len);
        if window.is_empty() {
            warn!(
                ic,
                estimate,
                max_key_len = self.max_key_len,
                "Friedman estimate leaves no key lengths to search"
            );
            return Err(BreakerError::InvalidConfiguration(format!(
                "no key lengths to search: estimate {estimate:.2}, max key length {}",
                self.max_key_len
            )));
        }

        info!(
            letters = stream.len(),
            ic,
            estimate,
            start = *window.start(),
            end = *window.end(),
            "Friedman estimate"
        );

        let (start, end) = (*window.start(), *window.end());
        let candidates = self.evaluate_window(&stream, ciphertext, window)?;
        let best = select_best(&candidates).cloned().ok_or_else(|| {
            BreakerError::InvalidConfiguration("no candidate key lengths evaluated".into())
        })?;

        info!(key = %best.key, score = best.score, "best guessed key");

        Ok(RecoveryReport {
            best,
            index_of_coincidence: ic,
            friedman_estimate: estimate,
            window: (start, end),
            candidates,
        })
    }

    /// Solves and scores `ciphertext` for one forced key length.
    ///
    /// Lengths longer than the alphabetic stream are allowed; the empty
    /// columns come back as shift 0 (`A`).
    ///
    /// # Errors
    ///
    /// [`BreakerError::InvalidConfiguration`] if `key_length` is zero.
    pub fn evaluate_length(&self, ciphertext: &str, key_length: usize) -> Result<ScoredCandidate> {
        let stream = AlphabeticStream::from_text(ciphertext);
        self.evaluate_stream(&stream, ciphertext, key_length)
    }

    fn evaluate_stream(
        &self,
        stream: &AlphabeticStream,
        ciphertext: &str,
        key_length: usize,
    ) -> Result<ScoredCandidate> {
        if key_length < MIN_KEY_LEN {
            return Err(BreakerError::InvalidConfiguration(
                "key length must be at least 1".into(),
            ));
        }

        let columns = stream.columns(key_length);
        let guesses = self.solve_columns(&columns);
        for (column, guess) in guesses.iter().enumerate() {
            debug!(
                key_length,
                column,
                shift = guess.shift,
                letter = %guess.key_letter(),
                distance = guess.distance,
                "guessed column shift"
            );
        }

        let key: String = guesses.iter().map(ShiftGuess::key_letter).collect();
        let distance: f64 = guesses.iter().map(|g| g.distance).sum();
        let plaintext = vigenere::decrypt(ciphertext, &key)?;
        let score = self.scorer.score(&plaintext);

        debug!(key_length, key = %key, score, distance, "candidate key");

        Ok(ScoredCandidate {
            key_length,
            key,
            score,
            distance,
            plaintext,
        })
    }

    #[cfg(feature = "parallel")]
    fn evaluate_window(
        &self,
        stream: &AlphabeticStream,
        ciphertext: &str,
        window: RangeInclusive<usize>,
    ) -> Result<Vec<ScoredCandidate>> {
        window
            .into_par_iter()
            .map(|key_length| self.evaluate_stream(stream, ciphertext, key_length))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_window(
        &self,
        stream: &AlphabeticStream,
        ciphertext: &str,
        window: RangeInclusive<usize>,
    ) -> Result<Vec<ScoredCandidate>> {
        window
            .map(|key_length| self.evaluate_stream(stream, ciphertext, key_length))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn solve_columns(&self, columns: &[AlphabeticStream]) -> Vec<ShiftGuess> {
        columns
            .par_iter()
            .map(|column| self.solver.best_shift(column))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_columns(&self, columns: &[AlphabeticStream]) -> Vec<ShiftGuess> {
        columns
            .iter()
            .map(|column| self.solver.best_shift(column))
            .collect()
    }
}

/// Recovers a key with the default English configuration.
///
/// # Errors
///
/// See [`KeyRecovery::recover`].
///
/// # Example
///
/// ```
/// use vigenere_breaker::recover_key;
///
/// assert!(recover_key("1234 !?").is_err());
/// ```
pub fn recover_key(ciphertext: &str) -> Result<RecoveryReport> {
    KeyRecovery::default().recover(ciphertext)
}

/// Key lengths to try around a Friedman `estimate`.
///
/// With `r = round(estimate)` the window is `max(1, r − 2) ..= min(max_key_len, r + 2)`.
/// It is empty when that range collapses: an estimate far above `max_key_len`,
/// an estimate below −2.5, a non-finite estimate, or a `max_key_len` of 0.
///
/// # Example
///
/// ```
/// use vigenere_breaker::analysis::candidate_window;
///
/// assert_eq!(candidate_window(3.6, 20), 2..=6);
/// assert_eq!(candidate_window(1.0, 20), 1..=3);
/// assert_eq!(candidate_window(19.2, 20), 17..=20);
/// assert!(candidate_window(40.0, 20).is_empty());
/// ```
#[must_use]
#[allow(clippy::reversed_empty_ranges)]
pub fn candidate_window(estimate: f64, max_key_len: usize) -> RangeInclusive<usize> {
    if !estimate.is_finite() {
        return MIN_KEY_LEN..=0;
    }

    // Saturating casts keep absurd estimates representable.
    let centre = estimate.round() as i64;
    let radius = WINDOW_RADIUS as i64;
    let start = centre.saturating_sub(radius).max(MIN_KEY_LEN as i64);
    let end = centre
        .saturating_add(radius)
        .min(i64::try_from(max_key_len).unwrap_or(i64::MAX));
    if end < start {
        return MIN_KEY_LEN..=0;
    }
    start as usize..=end as usize
}

/// Highest-scoring candidate; ties go to the shorter key length, then to the
/// lexicographically smaller key.
///
/// The order is total, so the pick is the same whatever order the
/// candidates arrive in.
#[must_use]
pub fn select_best(candidates: &[ScoredCandidate]) -> Option<&ScoredCandidate> {
    candidates.iter().max_by(|a, b| rank(a, b))
}

fn rank(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| b.key_length.cmp(&a.key_length))
        .then_with(|| b.key.cmp(&a.key))
}
