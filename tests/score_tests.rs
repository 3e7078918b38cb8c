//! tests/score_tests.rs
//! Baseline English plausibility score

mod common;

use common::WILDE_PREFACE;
use vigenere_breaker::analysis::{CandidateScorer, VowelSpaceScorer};
use vigenere_breaker::cipher::vigenere;
use vigenere_breaker::english_score;

#[test]
fn counts_spaces_and_half_vowels() {
    assert_eq!(english_score(""), 0.0);
    assert_eq!(english_score("   "), 3.0);
    assert_eq!(english_score("aeiouAEIOU"), 5.0);
    assert_eq!(english_score("xyz bcd"), 1.0);
    assert_eq!(english_score("Hello, World! Again"), 5.0);
}

#[test]
fn other_whitespace_does_not_count() {
    assert_eq!(english_score("\t\n\r"), 0.0);
}

#[test]
fn y_is_not_a_vowel() {
    assert_eq!(english_score("yYyY"), 0.0);
}

#[test]
fn plaintext_beats_ciphertext() {
    let ciphertext = vigenere::encrypt(WILDE_PREFACE, "SECRET").unwrap();
    assert!(english_score(WILDE_PREFACE) > english_score(&ciphertext));
}

#[test]
fn scorer_trait_matches_function() {
    let scorer = VowelSpaceScorer;
    assert_eq!(scorer.score(WILDE_PREFACE), english_score(WILDE_PREFACE));
}
