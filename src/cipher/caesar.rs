//! # Caesar cipher
//!
//! A single fixed rotation applied to every letter. Infallible: any shift is
//! reduced modulo 26.

use crate::cipher::shift::rotate;

/// Rotates every letter of `text` forward by `shift`.
///
/// # Example
///
/// ```
/// use vigenere_breaker::cipher::caesar;
///
/// assert_eq!(caesar::encrypt("Hail, Caesar!", 3), "Kdlo, Fdhvdu!");
/// ```
pub fn encrypt(text: &str, shift: i32) -> String {
    text.chars().map(|c| rotate(c, shift)).collect()
}

/// Undoes [`encrypt`] with the same `shift`.
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, -shift)
}
