//! src/analysis/column.rs
//! Per-column Caesar shift recovery by frequency distance.

use crate::consts::{ALPHABET_LEN, EMPTY_COLUMN_DISTANCE, ENGLISH_FREQUENCIES};
use crate::stats::{observed_frequencies, AlphabeticStream, FrequencyTable};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Best-fit shift for one column and how far it still is from the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShiftGuess {
    /// Shift in `0..26`; also the key letter `b'A' + shift`.
    pub shift: u8,
    /// L1 distance between the un-shifted column and the reference table.
    pub distance: f64,
}

impl ShiftGuess {
    /// The key letter this shift stands for.
    #[must_use]
    pub const fn key_letter(&self) -> char {
        (b'A' + self.shift) as char
    }
}

/// Brute-forces the 26 shifts of a column against a reference distribution.
///
/// The reference is passed in explicitly and must hold fractions, never
/// percentages.
///
/// # Thread Safety
///
/// `Copy` and `Sync`; one solver can serve every column in parallel.
#[derive(Debug, Clone, Copy)]
pub struct ColumnShiftSolver {
    reference: &'static FrequencyTable,
}

impl ColumnShiftSolver {
    #[must_use]
    pub const fn new(reference: &'static FrequencyTable) -> Self {
        Self { reference }
    }

    /// Solver measuring against [`ENGLISH_FREQUENCIES`].
    #[must_use]
    pub fn english() -> Self {
        Self::new(&ENGLISH_FREQUENCIES)
    }

    #[must_use]
    pub const fn reference(&self) -> &'static FrequencyTable {
        self.reference
    }

    /// Shift whose inverse makes `column` look most like the reference.
    ///
    /// Ties go to the smallest shift. An empty column returns shift 0 with
    /// [`EMPTY_COLUMN_DISTANCE`].
    ///
    /// # Example
    ///
    /// ```
    /// use vigenere_breaker::analysis::ColumnShiftSolver;
    /// use vigenere_breaker::stats::AlphabeticStream;
    ///
    /// let column = AlphabeticStream::from_text("");
    /// let guess = ColumnShiftSolver::english().best_shift(&column);
    /// assert_eq!(guess.shift, 0);
    /// ```
    #[must_use]
    pub fn best_shift(&self, column: &AlphabeticStream) -> ShiftGuess {
        if column.is_empty() {
            return ShiftGuess {
                shift: 0,
                distance: EMPTY_COLUMN_DISTANCE,
            };
        }

        let observed = observed_frequencies(column);
        let mut best = ShiftGuess {
            shift: 0,
            distance: f64::INFINITY,
        };

        for shift in 0..ALPHABET_LEN as u8 {
            let distance = observed.unshifted(shift).l1_distance(self.reference);
            if distance < best.distance {
                best = ShiftGuess { shift, distance };
            }
        }

        best
    }
}

impl Default for ColumnShiftSolver {
    fn default() -> Self {
        Self::english()
    }
}
