//! # Vigenère cipher
//!
//! Each ASCII letter of the input is rotated by the alphabet position of the
//! current key letter (`A` = 0). The key repeats cyclically and its index only
//! advances on letters, so punctuation, digits and whitespace neither change
//! nor consume key material. Case is kept per character.

use crate::cipher::shift::{letter_index, rotate};
use crate::error::{BreakerError, Result};

/// Encrypts `plaintext` under `key`.
///
/// Key letters may be upper or lower case.
///
/// # Errors
///
/// [`BreakerError::InvalidConfiguration`] if `key` is empty or contains a
/// character that is not an ASCII letter.
///
/// # Example
///
/// ```
/// use vigenere_breaker::cipher::vigenere;
///
/// let ciphertext = vigenere::encrypt("Hello, World!", "KEY")?;
/// assert_eq!(ciphertext, "Rijvs, Uyvjn!");
/// assert_eq!(vigenere::decrypt(&ciphertext, "key")?, "Hello, World!");
/// # Ok::<(), vigenere_breaker::BreakerError>(())
/// ```
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    Ok(apply_keystream(plaintext, &shifts, 1))
}

/// Decrypts `ciphertext` under `key`; the exact inverse of [`encrypt`].
///
/// # Errors
///
/// Same as [`encrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    let shifts = key_shifts(key)?;
    Ok(apply_keystream(ciphertext, &shifts, -1))
}

/// Converts a key into per-position shifts, validating it on the way.
fn key_shifts(key: &str) -> Result<Vec<i32>> {
    if key.is_empty() {
        return Err(BreakerError::InvalidConfiguration("empty key".into()));
    }

    key.chars()
        .map(|c| {
            letter_index(c).map(i32::from).ok_or_else(|| {
                BreakerError::InvalidConfiguration(format!(
                    "key contains non-alphabetic character {c:?}"
                ))
            })
        })
        .collect()
}

/// `direction` is `1` to encrypt and `-1` to decrypt.
fn apply_keystream(text: &str, shifts: &[i32], direction: i32) -> String {
    let mut key_index = 0usize;
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = shifts[key_index % shifts.len()];
                key_index += 1;
                rotate(c, direction * shift)
            } else {
                c
            }
        })
        .collect()
}
