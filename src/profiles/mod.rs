pub mod extract;
pub mod store;

pub use extract::extract_profiles;
pub use store::{load_profile, profile_json_path, save_profiles};

use crate::ingestion::RawTweet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cleaned tweet retained in a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetRecord {
    pub id: String,
    pub text: String,
    pub created_time: String,
    pub favorite_count: u64,
    pub retweet_count: u64,
    pub reply_count: u64,
    pub quote_count: u64,
    pub view_count: u64,
    pub source: String,
    pub post_type: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub mentioned_users: Vec<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub video_urls: Vec<String>,
    #[serde(default)]
    pub link_urls: Vec<String>,
    pub is_reply: bool,
    pub is_quote: bool,
    /// ISO 639-3 code from the dump, else whatlang detection on the text.
    #[serde(default)]
    pub language: Option<String>,
}

impl TweetRecord {
    pub fn has_media(&self) -> bool {
        !self.media_urls.is_empty() || !self.video_urls.is_empty()
    }

    pub fn has_links(&self) -> bool {
        !self.link_urls.is_empty() || self.text.to_lowercase().contains("http")
    }

    pub fn has_mentions(&self) -> bool {
        !self.mentioned_users.is_empty()
    }
}

/// Running totals across all of a profile's tweets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngagementTotals {
    pub favorites: u64,
    pub retweets: u64,
    pub replies: u64,
    pub quotes: u64,
    pub views: u64,
}

impl EngagementTotals {
    pub fn add(&mut self, tweet: &TweetRecord) {
        self.favorites += tweet.favorite_count;
        self.retweets += tweet.retweet_count;
        self.replies += tweet.reply_count;
        self.quotes += tweet.quote_count;
        self.views += tweet.view_count;
    }
}

/// Aggregated tweet author record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub author_id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub followers_count: u64,
    pub friends_count: u64,
    pub totals: EngagementTotals,
    pub tweets: Vec<TweetRecord>,
    pub processed_at: DateTime<Utc>,
}

impl Profile {
    pub fn tweet_count(&self) -> usize {
        self.tweets.len()
    }

    pub fn avg_favorites(&self) -> f64 {
        self.average(self.totals.favorites)
    }

    pub fn avg_retweets(&self) -> f64 {
        self.average(self.totals.retweets)
    }

    pub fn avg_views(&self) -> f64 {
        self.average(self.totals.views)
    }

    fn average(&self, total: u64) -> f64 {
        if self.tweets.is_empty() {
            0.0
        } else {
            total as f64 / self.tweets.len() as f64
        }
    }
}

/// Converts a raw scraped tweet into the cleaned record kept on profiles.
pub fn clean_tweet(raw: &RawTweet) -> TweetRecord {
    let language = raw
        .text_lang
        .clone()
        .filter(|lang| !lang.is_empty())
        .or_else(|| detect_language(&raw.text));
    TweetRecord {
        id: raw.id.clone(),
        text: raw.text.clone(),
        created_time: raw.created_time.clone(),
        favorite_count: raw.favorite_count,
        retweet_count: raw.retweet_count,
        reply_count: raw.reply_count,
        quote_count: raw.quote_count,
        view_count: raw.view_count,
        source: raw.source.clone(),
        post_type: raw.post_type.clone(),
        hashtags: raw.text_tags.clone(),
        mentioned_users: raw.text_tagged_users.clone(),
        media_urls: raw.attached_medias_url.clone(),
        video_urls: raw.video_urls(),
        link_urls: raw.attached_links_expanded_url.clone(),
        is_reply: raw.is_reply(),
        is_quote: raw.is_quote(),
        language,
    }
}

fn detect_language(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    whatlang::detect(text).map(|info| info.lang().code().to_string())
}
