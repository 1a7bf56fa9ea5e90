//! Splitting and parsing of concatenated dump envelopes.
//!
//! Scraper exports glue whole `{"data": {"items": [...]}}` responses
//! together in one file with no separator. Splitting at `{"data":` and
//! re-prefixing each piece recovers parseable objects; anything that still
//! fails to parse is reported as an issue, never a hard error.

use super::error::{DumpIssue, DumpIssueReason};
use super::tweet::RawTweet;
use rayon::prelude::*;
use serde::Deserialize;

const ENVELOPE_MARKER: &str = "{\"data\":";

#[derive(Debug, Deserialize)]
struct DumpEnvelope {
    data: DumpData,
}

#[derive(Debug, Deserialize)]
struct DumpData {
    #[serde(default)]
    items: Vec<RawTweet>,
}

/// Splits raw dump text into candidate JSON fragments.
pub fn split_fragments(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    // The split consumes the marker, so every surviving part needs it
    // restored. Text before the first marker becomes a part too and will
    // surface as a malformed-fragment issue downstream.
    trimmed
        .split(ENVELOPE_MARKER)
        .filter(|part| !part.trim().is_empty())
        .map(|part| format!("{ENVELOPE_MARKER}{part}"))
        .collect()
}

/// Result of parsing one fragment: tweets on success, an issue otherwise.
pub(crate) enum FragmentOutcome {
    Tweets(Vec<RawTweet>),
    Issue(DumpIssue),
}

/// Parses all fragments in parallel, preserving fragment order.
pub(crate) fn parse_fragments(fragments: &[String]) -> Vec<FragmentOutcome> {
    fragments
        .par_iter()
        .enumerate()
        .map(|(index, fragment)| parse_fragment(index, fragment))
        .collect()
}

fn parse_fragment(index: usize, fragment: &str) -> FragmentOutcome {
    if fragment.trim().is_empty() {
        return FragmentOutcome::Issue(DumpIssue::new(
            index,
            DumpIssueReason::EmptyFragment,
            "fragment contained only whitespace",
        ));
    }
    match serde_json::from_str::<DumpEnvelope>(fragment) {
        Ok(envelope) => FragmentOutcome::Tweets(envelope.data.items),
        Err(err) => {
            // Distinguish a shape mismatch from outright broken JSON.
            let reason = match serde_json::from_str::<serde_json::Value>(fragment) {
                Ok(_) => DumpIssueReason::UnexpectedShape,
                Err(_) => DumpIssueReason::MalformedJson,
            };
            FragmentOutcome::Issue(DumpIssue::new(index, reason, err.to_string()))
        }
    }
}
