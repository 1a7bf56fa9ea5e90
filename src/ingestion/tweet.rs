//! Raw tweet shape as it appears in scraped dumps.
//!
//! Scraper output is heterogeneous: counts may be absent or `null`, array
//! fields may be `null` instead of `[]`, and unknown keys come and go
//! between scraper versions. Everything here is best-effort; a field the
//! dump does not carry simply defaults.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One tweet as emitted by the scraper, before cleaning.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTweet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_time: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub favorite_count: u64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub retweet_count: u64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reply_count: u64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub quote_count: u64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub view_count: u64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub post_type: String,
    #[serde(default)]
    pub text_lang: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text_tags: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub text_tagged_users: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attached_medias_url: Vec<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attached_videos: Vec<AttachedVideo>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub attached_links_expanded_url: Vec<String>,
    #[serde(default)]
    pub in_reply_to_post_id: Option<String>,
    #[serde(default)]
    pub in_reply_to_profile_id: Option<String>,
    #[serde(default)]
    pub quoted_status_id: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_description: Option<String>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author_followers_count: u64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub author_friends_count: u64,
}

/// Video attachment; scrapers emit these as objects with an optional url.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachedVideo {
    #[serde(default)]
    pub url: Option<String>,
}

impl RawTweet {
    /// Non-empty video URLs attached to this tweet.
    pub fn video_urls(&self) -> Vec<String> {
        self.attached_videos
            .iter()
            .filter_map(|video| video.url.clone())
            .filter(|url| !url.is_empty())
            .collect()
    }

    pub fn is_reply(&self) -> bool {
        self.in_reply_to_post_id.is_some() || self.in_reply_to_profile_id.is_some()
    }

    pub fn is_quote(&self) -> bool {
        self.quoted_status_id.is_some()
    }
}
