use crate::profiles::TweetRecord;
use crate::workspace::CurationSettings;
use serde::{Deserialize, Serialize};

/// Per-tweet features derived for ranking and prompt formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetSignals {
    pub engagement_score: f64,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub has_media: bool,
    pub has_links: bool,
    pub has_mentions: bool,
    pub length: usize,
}

/// Weighted sum of favorites and retweets used to rank tweets.
pub fn engagement_score(tweet: &TweetRecord, settings: &CurationSettings) -> f64 {
    tweet.favorite_count as f64 * settings.favorite_weight as f64
        + tweet.retweet_count as f64 * settings.retweet_weight as f64
}

pub fn tweet_signals(tweet: &TweetRecord, settings: &CurationSettings) -> TweetSignals {
    TweetSignals {
        engagement_score: engagement_score(tweet, settings),
        favorite_count: tweet.favorite_count,
        retweet_count: tweet.retweet_count,
        has_media: tweet.has_media(),
        has_links: tweet.has_links(),
        has_mentions: tweet.has_mentions(),
        length: tweet.text.chars().count(),
    }
}
