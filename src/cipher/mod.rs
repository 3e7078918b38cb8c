// src/cipher/mod.rs

//! Classical keystream ciphers over the 26-letter ASCII alphabet.
//!
//! Core API: `vigenere::encrypt(text, key)?` / `vigenere::decrypt(text, key)?`.
//! Single-shift variant: `caesar::encrypt(text, shift)`.
//! Both preserve case and pass every non-letter through untouched.

pub mod caesar;
pub(crate) mod shift;
pub mod vigenere;

pub use shift::rotate;
