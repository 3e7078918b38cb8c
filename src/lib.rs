// src/lib.rs

pub mod analysis;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod cipher;
pub mod consts;
pub mod error;
pub mod friedman;
pub mod stats;

// High-level API — recover a key from ciphertext alone
pub use analysis::{recover_key, KeyRecovery, RecoveryReport, ScoredCandidate};
pub use builders::KeyRecoveryBuilder;
pub use error::BreakerError;

// Building blocks, re-exported for callers that run pipeline stages on their own
pub use analysis::{english_score, CandidateScorer, ColumnShiftSolver, ShiftGuess};
pub use friedman::{estimate_key_length, friedman_test};
pub use stats::{
    frequency_percentages, index_of_coincidence, observed_frequencies, AlphabeticStream,
    FrequencyTable, PercentageTable,
};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{recover_keys_batch, try_recover_keys_batch};
