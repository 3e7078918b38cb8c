//! # Cryptanalysis
//!
//! The key recovery pipeline and its building blocks.
//!
//! ## Modules
//!
//! - [`column`] - best Caesar shift for one column of ciphertext
//! - [`score`] - English plausibility of a decrypted candidate
//! - [`recovery`] - Friedman-seeded search over candidate key lengths
//!
//! ## Usage
//!
//! Most callers only need [`recover_key`] or a [`KeyRecovery`] built through
//! [`KeyRecoveryBuilder`](crate::builders::KeyRecoveryBuilder).

pub mod column;
pub mod recovery;
pub mod score;

pub use column::{ColumnShiftSolver, ShiftGuess};
pub use recovery::{
    candidate_window, recover_key, select_best, KeyRecovery, RecoveryReport, ScoredCandidate,
};
pub use score::{english_score, CandidateScorer, VowelSpaceScorer};
