//! src/builders/recovery_builder.rs
//! Fluent configuration for the key recovery engine.

use std::sync::Arc;

use crate::analysis::{CandidateScorer, ColumnShiftSolver, KeyRecovery, VowelSpaceScorer};
use crate::consts::{DEFAULT_MAX_KEY_LEN, ENGLISH_FREQUENCIES, MIN_KEY_LEN};
use crate::error::{BreakerError, Result};
use crate::stats::FrequencyTable;

/// Key recovery builder
///
/// Defaults: maximum key length [`DEFAULT_MAX_KEY_LEN`] (20), the English
/// fraction table as reference, and the vowel/space baseline scorer.
///
/// # Example
///
/// ```
/// use vigenere_breaker::KeyRecoveryBuilder;
///
/// let recovery = KeyRecoveryBuilder::new().with_max_key_len(12).build()?;
/// assert_eq!(recovery.max_key_len(), 12);
///
/// assert!(KeyRecoveryBuilder::new().with_max_key_len(0).build().is_err());
/// # Ok::<(), vigenere_breaker::BreakerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct KeyRecoveryBuilder {
    max_key_len: usize,
    reference: &'static FrequencyTable,
    scorer: Arc<dyn CandidateScorer>,
}

impl KeyRecoveryBuilder {
    /// Create builder with English defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
            reference: &ENGLISH_FREQUENCIES,
            scorer: Arc::new(VowelSpaceScorer),
        }
    }

    /// Upper bound on candidate key lengths (must be at least 1, checked in [`build`](Self::build))
    #[must_use]
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = max_key_len;
        self
    }

    /// Reference distribution for the column solver, as fractions of 1
    #[must_use]
    pub fn with_reference(mut self, reference: &'static FrequencyTable) -> Self {
        self.reference = reference;
        self
    }

    /// Replace the candidate scorer
    #[must_use]
    pub fn with_scorer<S>(mut self, scorer: S) -> Self
    where
        S: CandidateScorer + 'static,
    {
        self.scorer = Arc::new(scorer);
        self
    }

    #[must_use]
    pub const fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Validate and produce the engine.
    ///
    /// # Errors
    ///
    /// [`BreakerError::InvalidConfiguration`] if the maximum key length is 0.
    pub fn build(self) -> Result<KeyRecovery> {
        if self.max_key_len < MIN_KEY_LEN {
            return Err(BreakerError::InvalidConfiguration(format!(
                "max key length must be at least {MIN_KEY_LEN}, got {}",
                self.max_key_len
            )));
        }

        Ok(KeyRecovery {
            max_key_len: self.max_key_len,
            solver: ColumnShiftSolver::new(self.reference),
            scorer: self.scorer,
        })
    }
}

impl Default for KeyRecoveryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
