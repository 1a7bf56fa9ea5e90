use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds one scraper tweet object with sensible defaults.
pub fn tweet(author: &str, id: &str, text: &str, favorites: u64, retweets: u64) -> Value {
    json!({
        "id": id,
        "text": text,
        "created_time": "2024-01-15T12:00:00Z",
        "favorite_count": favorites,
        "retweet_count": retweets,
        "reply_count": 0,
        "quote_count": 0,
        "view_count": favorites * 20,
        "author_id": format!("{author}-id"),
        "author_username": author,
        "author_name": format!("{author} name"),
        "author_followers_count": 1000,
        "author_friends_count": 100,
    })
}

/// Wraps tweets in the scraper's `{"data": {"items": [...]}}` envelope.
pub fn envelope(tweets: &[Value]) -> String {
    json!({"data": {"items": tweets}}).to_string()
}

/// Writes dump fragments concatenated with no separator, like scrapers do.
pub fn write_dump(dir: &Path, name: &str, fragments: &[String]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, fragments.concat()).expect("failed to write dump fixture");
    path
}
