//! Persistence for processed profiles.
//!
//! Each profile lives at `data/processed/<username>/profile.json` inside
//! the workspace, capped at the configured tweet limit.

use super::Profile;
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn profile_json_path(workspace: &Workspace, username: &str) -> PathBuf {
    workspace.paths.profile_dir(username).join("profile.json")
}

/// Writes every profile to its own directory, returning the paths written.
/// Profiles that end up with zero tweets are not written.
pub fn save_profiles(workspace: &Workspace, profiles: &[Profile]) -> Result<Vec<PathBuf>> {
    let cap = workspace.config.ingestion.max_tweets_per_profile as usize;
    let mut written = Vec::new();
    for profile in profiles {
        if profile.tweets.is_empty() {
            continue;
        }
        let mut to_save = profile.clone();
        if to_save.tweets.len() > cap {
            to_save.tweets.truncate(cap);
        }
        let dir = workspace.paths.profile_dir(&to_save.username);
        fs::create_dir_all(&dir)?;
        let path = dir.join("profile.json");
        let data = serde_json::to_vec_pretty(&to_save)?;
        fs::write(&path, data)
            .with_context(|| format!("Failed to write profile {:?}", path))?;
        written.push(path);
    }
    Ok(written)
}

/// Loads one processed profile by username.
pub fn load_profile(workspace: &Workspace, username: &str) -> Result<Profile> {
    let path = profile_json_path(workspace, username);
    let data = fs::read(&path)
        .with_context(|| format!("No processed profile for {username} at {:?}", path))?;
    let profile = serde_json::from_slice(&data)
        .with_context(|| format!("Failed to parse profile {:?}", path))?;
    Ok(profile)
}
