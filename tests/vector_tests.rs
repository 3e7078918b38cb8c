//! tests/vector_tests.rs
//! Known-answer Vigenère vectors loaded from tests/vectors/*.json

use serde::Deserialize;
use std::fs;
use std::path::Path;
use vigenere_breaker::cipher::vigenere;

#[derive(Debug, Deserialize)]
struct VigenereVector {
    plaintext: String,
    key: String,
    ciphertext: String,
}

fn load_vectors(filename: &str) -> Vec<VigenereVector> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vectors")
        .join(filename);
    let content =
        fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}

#[test]
fn vigenere_vectors_encrypt() {
    let vectors = load_vectors("vigenere_vectors.json");
    assert!(!vectors.is_empty());

    for (i, v) in vectors.iter().enumerate() {
        let ciphertext = vigenere::encrypt(&v.plaintext, &v.key).unwrap();
        assert_eq!(ciphertext, v.ciphertext, "vector {i} (key {:?})", v.key);
    }
}

#[test]
fn vigenere_vectors_decrypt() {
    for (i, v) in load_vectors("vigenere_vectors.json").iter().enumerate() {
        let plaintext = vigenere::decrypt(&v.ciphertext, &v.key).unwrap();
        assert_eq!(plaintext, v.plaintext, "vector {i} (key {:?})", v.key);
    }
}
