pub mod error;
pub mod fragment;
pub mod tweet;

pub use error::{DumpIssue, DumpIssueReason};
pub use fragment::split_fragments;
pub use tweet::{AttachedVideo, RawTweet};

use crate::workspace::WorkspacePaths;
use anyhow::{Context, Result};
use fragment::FragmentOutcome;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Summary of one dump file load.
#[derive(Debug, Clone, Default)]
pub struct DumpSummary {
    pub fragments: usize,
    pub parsed_fragments: usize,
    pub tweets: usize,
    pub issues: Vec<DumpIssue>,
}

/// Tweets recovered from a dump plus the load summary.
#[derive(Debug)]
pub struct DumpLoad {
    pub tweets: Vec<RawTweet>,
    pub summary: DumpSummary,
}

/// Loads a scraped dump file, tolerating concatenated and partially
/// malformed envelopes. Only an unreadable file is a hard error.
pub fn load_dump<P: AsRef<Path>>(path: P) -> Result<DumpLoad> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dump file {:?}", path))?;

    let fragments = split_fragments(&raw);
    let mut summary = DumpSummary {
        fragments: fragments.len(),
        ..Default::default()
    };
    let mut tweets = Vec::new();

    for outcome in fragment::parse_fragments(&fragments) {
        match outcome {
            FragmentOutcome::Tweets(items) => {
                summary.parsed_fragments += 1;
                tweets.extend(items);
            }
            FragmentOutcome::Issue(issue) => summary.issues.push(issue),
        }
    }

    summary.tweets = tweets.len();
    Ok(DumpLoad { tweets, summary })
}

fn is_dump_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json") | Some("txt")
    )
}

/// Walks the raw data directory and returns candidate dump files, sorted
/// for deterministic processing order.
pub fn scan_raw_dir(paths: &WorkspacePaths) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(&paths.raw_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_dump_file(path))
        .collect();
    files.sort();
    Ok(files)
}
