//! src/batch_ops.rs
//! Key recovery over many ciphertexts at once (feature `batch-ops`).

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::analysis::{KeyRecovery, RecoveryReport};
#[cfg(feature = "batch-ops")]
use crate::error::Result;

/// Recovers keys for many independent ciphertexts on the rayon pool.
///
/// Results come back in input order. Stops at the first ciphertext that
/// cannot be analysed and returns its error.
#[cfg(feature = "batch-ops")]
pub fn recover_keys_batch<S>(ciphertexts: &[S], recovery: &KeyRecovery) -> Result<Vec<RecoveryReport>>
where
    S: AsRef<str> + Sync,
{
    ciphertexts
        .par_iter()
        .map(|ciphertext| recovery.recover(ciphertext.as_ref()))
        .collect()
}

/// Like [`recover_keys_batch`], but keeps going and reports each outcome.
#[cfg(feature = "batch-ops")]
pub fn try_recover_keys_batch<S>(ciphertexts: &[S], recovery: &KeyRecovery) -> Vec<Result<RecoveryReport>>
where
    S: AsRef<str> + Sync,
{
    ciphertexts
        .par_iter()
        .map(|ciphertext| recovery.recover(ciphertext.as_ref()))
        .collect()
}
