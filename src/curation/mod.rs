pub mod dedup;
pub mod signals;

pub use dedup::word_set_signature;
pub use signals::{engagement_score, tweet_signals, TweetSignals};

use crate::profiles::{Profile, TweetRecord};
use crate::workspace::{CurationSettings, Workspace};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// Bookkeeping attached to every curated set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationMetadata {
    pub total_analyzed: usize,
    pub selected: usize,
    pub extracted_at: DateTime<Utc>,
}

/// A capped, deduplicated subset of a profile's tweets selected for
/// prompt inclusion, ordered by descending engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedSet {
    pub username: String,
    pub tweets: Vec<TweetRecord>,
    pub metadata: CurationMetadata,
}

impl CuratedSet {
    /// The `n` highest-engagement curated tweets.
    pub fn top_by_engagement(&self, n: usize) -> &[TweetRecord] {
        &self.tweets[..self.tweets.len().min(n)]
    }
}

/// Selects representative tweets: scores, sorts, deduplicates, caps.
///
/// Empty-text tweets are dropped before scoring. The sort is stable so
/// tweets with equal engagement keep their dump order, which makes the
/// curated artifact reproducible.
pub fn curate(profile: &Profile, settings: &CurationSettings) -> CuratedSet {
    let total_analyzed = profile.tweets.len();
    let mut candidates: Vec<(&TweetRecord, TweetSignals)> = profile
        .tweets
        .iter()
        .filter(|tweet| !tweet.text.trim().is_empty())
        .map(|tweet| (tweet, tweet_signals(tweet, settings)))
        .collect();
    candidates.sort_by(|a, b| {
        b.1.engagement_score
            .partial_cmp(&a.1.engagement_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let limit = settings.curated_limit as usize;
    let mut seen: HashSet<[u8; 32]> = HashSet::new();
    let mut selected = Vec::new();
    for (tweet, _) in candidates {
        if selected.len() >= limit {
            break;
        }
        if seen.insert(word_set_signature(&tweet.text)) {
            selected.push(tweet.clone());
        }
    }

    CuratedSet {
        username: profile.username.clone(),
        metadata: CurationMetadata {
            total_analyzed,
            selected: selected.len(),
            extracted_at: Utc::now(),
        },
        tweets: selected,
    }
}

/// Random sample of the profile's most recent tweets, for the creative
/// prompt. Recency is dump order (scrapers emit newest first).
pub fn recent_sample<R: Rng>(
    profile: &Profile,
    sample_size: usize,
    rng: &mut R,
) -> Vec<TweetRecord> {
    let window = profile.tweets.len().min(sample_size * 2);
    let recent: Vec<&TweetRecord> = profile.tweets[..window]
        .iter()
        .filter(|tweet| !tweet.text.trim().is_empty())
        .collect();
    let mut sampled: Vec<TweetRecord> = recent
        .choose_multiple(rng, sample_size.min(recent.len()))
        .map(|tweet| (*tweet).clone())
        .collect();
    // Keep chronological order within the sample.
    sampled.sort_by_key(|tweet| {
        profile
            .tweets
            .iter()
            .position(|t| t.id == tweet.id)
            .unwrap_or(usize::MAX)
    });
    sampled
}

pub fn curated_json_path(workspace: &Workspace, username: &str) -> PathBuf {
    workspace.paths.profile_dir(username).join("curated.json")
}

/// Persists a curated set beside its profile.
pub fn save_curated(workspace: &Workspace, set: &CuratedSet) -> Result<PathBuf> {
    let dir = workspace.paths.profile_dir(&set.username);
    fs::create_dir_all(&dir)?;
    let path = dir.join("curated.json");
    let data = serde_json::to_vec_pretty(set)?;
    fs::write(&path, data).with_context(|| format!("Failed to write curated set {:?}", path))?;
    Ok(path)
}

/// Loads the curated set for a username.
pub fn load_curated(workspace: &Workspace, username: &str) -> Result<CuratedSet> {
    let path = curated_json_path(workspace, username);
    let data = fs::read(&path)
        .with_context(|| format!("No curated set for {username} at {:?}", path))?;
    let set = serde_json::from_slice(&data)
        .with_context(|| format!("Failed to parse curated set {:?}", path))?;
    Ok(set)
}
