//! Grouping raw tweets into per-author profiles.

use super::{clean_tweet, EngagementTotals, Profile};
use crate::ingestion::RawTweet;
use chrono::Utc;
use std::collections::BTreeMap;

/// Groups tweets by author and aggregates engagement totals.
///
/// Tweets missing an author id or username are skipped; profile header
/// fields (name, description, follower counts) come from the first tweet
/// that carries them. Output is ordered by author id so repeated runs over
/// the same dump produce identical artifacts.
pub fn extract_profiles(tweets: &[RawTweet]) -> Vec<Profile> {
    let mut profiles: BTreeMap<String, Profile> = BTreeMap::new();

    for raw in tweets {
        let (author_id, username) = match (&raw.author_id, &raw.author_username) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
                (id.clone(), name.clone())
            }
            _ => continue,
        };

        let profile = profiles.entry(author_id.clone()).or_insert_with(|| Profile {
            author_id,
            username,
            name: None,
            description: None,
            followers_count: 0,
            friends_count: 0,
            totals: EngagementTotals::default(),
            tweets: Vec::new(),
            processed_at: Utc::now(),
        });

        if profile.name.is_none() {
            profile.name = raw.author_name.clone().filter(|n| !n.is_empty());
        }
        if profile.description.is_none() {
            profile.description = raw.author_description.clone().filter(|d| !d.is_empty());
        }
        if profile.followers_count == 0 {
            profile.followers_count = raw.author_followers_count;
        }
        if profile.friends_count == 0 {
            profile.friends_count = raw.author_friends_count;
        }

        let record = clean_tweet(raw);
        profile.totals.add(&record);
        profile.tweets.push(record);
    }

    profiles.into_values().collect()
}
