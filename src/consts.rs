//! # Constants
//!
//! Reference letter distributions, Friedman test parameters and the defaults
//! used by the key recovery search.
//!
//! Two English reference tables live here on purpose. [`ENGLISH_FREQUENCIES`]
//! holds fractions and is what the column solver measures distance against.
//! [`ENGLISH_PERCENTAGES`] holds rounded percentages for display next to a
//! [`PercentageTable`] produced from ciphertext. They use different units and
//! are distinct types, so one cannot be passed where the other is expected.

use crate::stats::{FrequencyTable, PercentageTable};

/// Number of letters in the alphabet the ciphers and statistics operate on.
pub const ALPHABET_LEN: usize = 26;

/// English letter frequencies as fractions of 1, indexed `A..=Z`.
///
/// Sums to 1.0 within rounding. Used by the column shift solver.
pub static ENGLISH_FREQUENCIES: FrequencyTable = FrequencyTable::new([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
]);

/// English letter frequencies in percent (two decimals), indexed `A..=Z`.
///
/// Display only. Never mix with [`ENGLISH_FREQUENCIES`] in a distance.
pub static ENGLISH_PERCENTAGES: PercentageTable = PercentageTable::new([
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
]);

/// Index of coincidence of uniformly random letters (≈ 1/26).
pub const RANDOM_IC: f64 = 0.0385;

/// Typical index of coincidence of English prose.
pub const ENGLISH_IC: f64 = 0.067;

/// Numerator of the Friedman estimate, `κp − κr` for English.
pub const FRIEDMAN_NUMERATOR: f64 = 0.0279;

/// Estimate returned when the Friedman formula is undefined.
pub const FRIEDMAN_SENTINEL: f64 = 1.0;

/// Default upper bound on candidate key lengths.
pub const DEFAULT_MAX_KEY_LEN: usize = 20;

/// Smallest key length that can be searched.
pub const MIN_KEY_LEN: usize = 1;

/// Lengths tried on each side of the rounded Friedman estimate.
///
/// A radius of 2 gives a window of five lengths before clipping.
pub const WINDOW_RADIUS: usize = 2;

/// Distance reported for a column that holds no letters.
///
/// Far above any real L1 distance between two distributions (at most 2.0),
/// so an empty column never looks like a good fit.
pub const EMPTY_COLUMN_DISTANCE: f64 = 9999.0;

/// Letters counted as vowels by the baseline candidate scorer.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'a', 'e', 'i', 'o', 'u'];
