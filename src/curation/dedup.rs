//! Word-set signatures for near-duplicate suppression.
//!
//! Two tweets count as duplicates when they contain exactly the same set
//! of lowercase words, regardless of order. Signatures are Sha256 digests
//! so the seen-set stays small even for large profiles.

use sha2::{Digest, Sha256};

/// Stable signature over the sorted, deduplicated word set of a text.
pub fn word_set_signature(text: &str) -> [u8; 32] {
    let mut sorted: Vec<String> = text
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();
    sorted.sort();
    sorted.dedup();

    let mut hasher = Sha256::new();
    for word in &sorted {
        hasher.update(word.as_bytes());
        hasher.update([0u8]);
    }
    hasher.finalize().into()
}
