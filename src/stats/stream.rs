//! src/stats/stream.rs
//! The letters of a text, upper-cased, with everything else dropped.

use std::fmt;

use crate::consts::ALPHABET_LEN;

/// Ordered uppercase ASCII letters extracted from a text.
///
/// Positions of punctuation and whitespace are not kept; only the cipher
/// transforms care about those.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AlphabeticStream {
    letters: Vec<u8>,
}

impl AlphabeticStream {
    /// Filters `text` down to its ASCII letters, upper-cased.
    pub fn from_text(text: &str) -> Self {
        Self {
            letters: text
                .bytes()
                .filter(u8::is_ascii_alphabetic)
                .map(|b| b.to_ascii_uppercase())
                .collect(),
        }
    }

    /// Number of letters.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters as bytes in `b'A'..=b'Z'`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    /// Occurrences of each letter, indexed `A..=Z`.
    pub fn letter_counts(&self) -> [usize; ALPHABET_LEN] {
        let mut counts = [0usize; ALPHABET_LEN];
        for &b in &self.letters {
            counts[(b - b'A') as usize] += 1;
        }
        counts
    }

    /// Splits the stream into `count` columns by position modulo `count`.
    ///
    /// Column `i` holds the letters at indices `i, i + count, i + 2·count, …`
    /// in their original order. Columns beyond the stream length are empty.
    /// A `count` of zero yields no columns.
    pub fn columns(&self, count: usize) -> Vec<AlphabeticStream> {
        let mut columns = vec![AlphabeticStream::default(); count];
        if count == 0 {
            return columns;
        }
        for (i, &b) in self.letters.iter().enumerate() {
            columns[i % count].letters.push(b);
        }
        columns
    }
}

impl fmt::Display for AlphabeticStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl From<&str> for AlphabeticStream {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
