//! # Letter Statistics
//!
//! Everything the cryptanalysis needs to know about a text's letters:
//!
//! - [`stream`] - the case-folded alphabetic stream and its columns
//! - [`frequency`] - counts, observed distributions and display percentages
//! - [`coincidence`] - index of coincidence
//!
//! All functions are pure and safe on empty input.

pub mod coincidence;
pub mod frequency;
pub mod stream;

pub use coincidence::index_of_coincidence;
pub use frequency::{frequency_percentages, observed_frequencies, FrequencyTable, PercentageTable};
pub use stream::AlphabeticStream;
