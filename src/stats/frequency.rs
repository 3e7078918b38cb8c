//! # Letter Frequencies
//!
//! [`FrequencyTable`] holds fractions and is what distances are computed on.
//! [`PercentageTable`] holds rounded percentages and exists for external
//! visualizers that plot ciphertext letters against [`ENGLISH_PERCENTAGES`].
//!
//! [`ENGLISH_PERCENTAGES`]: crate::consts::ENGLISH_PERCENTAGES

use crate::consts::{ALPHABET_LEN, ENGLISH_PERCENTAGES};
use crate::stats::AlphabeticStream;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Fraction of the text taken by each letter, indexed `A..=Z`.
///
/// Observed tables sum to 1.0 (or are all zero for an empty stream); the
/// English reference sums to 1.0 within rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FrequencyTable([f64; ALPHABET_LEN]);

impl FrequencyTable {
    /// Wraps 26 fractions, `A` first.
    #[must_use]
    pub const fn new(values: [f64; ALPHABET_LEN]) -> Self {
        Self(values)
    }

    /// The all-zero table.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; ALPHABET_LEN])
    }

    /// Normalizes letter counts by `total`. A `total` of zero gives [`zero`](Self::zero).
    #[must_use]
    pub fn from_counts(counts: &[usize; ALPHABET_LEN], total: usize) -> Self {
        if total == 0 {
            return Self::zero();
        }
        let total = total as f64;
        Self((*counts).map(|count| count as f64 / total))
    }

    /// Frequency of `letter` (either case); 0.0 for anything that is not an ASCII letter.
    #[must_use]
    pub fn get(&self, letter: char) -> f64 {
        if letter.is_ascii_alphabetic() {
            self.0[(letter.to_ascii_uppercase() as u8 - b'A') as usize]
        } else {
            0.0
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; ALPHABET_LEN] {
        &self.0
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// `Σ |self[c] − other[c]|` over the 26 letters.
    #[must_use]
    pub fn l1_distance(&self, other: &FrequencyTable) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// The table of the same text after rotating every letter back by `shift`.
    ///
    /// Entry `p` of the result is entry `(p + shift) mod 26` of `self`, which
    /// is exactly what counting the un-shifted letters would produce.
    #[must_use]
    pub fn unshifted(&self, shift: u8) -> Self {
        let shift = shift as usize % ALPHABET_LEN;
        Self(std::array::from_fn(|plain| {
            self.0[(plain + shift) % ALPHABET_LEN]
        }))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::zero()
    }
}

/// Counts each letter of `stream` and divides by its length.
///
/// An empty stream yields the all-zero table rather than dividing by zero.
#[must_use]
pub fn observed_frequencies(stream: &AlphabeticStream) -> FrequencyTable {
    FrequencyTable::from_counts(&stream.letter_counts(), stream.len())
}

/// Letter → percentage (0–100, two decimals), indexed `A..=Z`.
///
/// Display-side counterpart of [`FrequencyTable`]; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PercentageTable([f64; ALPHABET_LEN]);

impl PercentageTable {
    #[must_use]
    pub const fn new(values: [f64; ALPHABET_LEN]) -> Self {
        Self(values)
    }

    /// The English reference percentages, for side-by-side plots.
    #[must_use]
    pub fn english() -> Self {
        ENGLISH_PERCENTAGES
    }

    /// Percentage for `letter` (either case); 0.0 for non-letters.
    #[must_use]
    pub fn get(&self, letter: char) -> f64 {
        if letter.is_ascii_alphabetic() {
            self.0[(letter.to_ascii_uppercase() as u8 - b'A') as usize]
        } else {
            0.0
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; ALPHABET_LEN] {
        &self.0
    }

    /// `('A', pct), ('B', pct), …`
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &pct)| ((b'A' + i as u8) as char, pct))
    }
}

/// Percentage of each letter among the letters of `text`, rounded to two decimals.
///
/// Letters that do not occur report 0.0, as does everything for a text
/// without letters.
///
/// # Example
///
/// ```
/// use vigenere_breaker::stats::frequency_percentages;
///
/// let pct = frequency_percentages("AAB!");
/// assert_eq!(pct.get('A'), 66.67);
/// assert_eq!(pct.get('b'), 33.33);
/// assert_eq!(pct.get('Z'), 0.0);
/// ```
#[must_use]
pub fn frequency_percentages(text: &str) -> PercentageTable {
    let observed = observed_frequencies(&AlphabeticStream::from_text(text));
    PercentageTable(
        (*observed.as_array()).map(|fraction| (fraction * 100.0 * 100.0).round() / 100.0),
    )
}
