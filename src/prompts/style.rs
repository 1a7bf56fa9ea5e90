//! Writing-style signals derived from a profile's tweets.
//!
//! These feed the prompt templates as human-readable lines; none of them
//! claim analytical rigor beyond what an LLM needs as grounding context.

use crate::profiles::Profile;
use std::collections::HashMap;

const COMMON_WORD_COUNT: usize = 20;
const MEME_RATE_THRESHOLD: f64 = 0.2;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "i",
    "if", "in", "is", "it", "its", "just", "me", "my", "no", "not", "of", "on", "or", "so",
    "that", "the", "then", "this", "to", "was", "we", "were", "will", "with", "you", "your",
];

/// Simple tone tag attached to individual tweets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Enthusiastic,
    Inquisitive,
    Assertive,
    Neutral,
}

impl Tone {
    pub fn label(self) -> &'static str {
        match self {
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Inquisitive => "Inquisitive",
            Tone::Assertive => "Assertive",
            Tone::Neutral => "Neutral",
        }
    }
}

/// Classifies the tone of one tweet from surface punctuation and modals.
pub fn tweet_tone(text: &str) -> Tone {
    let lowered = text.to_lowercase();
    if lowered.contains('!') {
        Tone::Enthusiastic
    } else if lowered.contains('?') {
        Tone::Inquisitive
    } else if ["should", "must", "need"]
        .iter()
        .any(|word| contains_word(&lowered, word))
    {
        Tone::Assertive
    } else {
        Tone::Neutral
    }
}

/// Aggregate style metrics over a whole profile.
#[derive(Debug, Clone)]
pub struct StyleSignals {
    pub avg_tweet_length: f64,
    pub uses_emojis: bool,
    /// Fraction of tweets carrying media; a rough meme-usage proxy.
    pub media_rate: f64,
    pub reply_rate: f64,
    pub self_reference_rate: f64,
    /// Top words after stopword removal, most frequent first.
    pub common_words: Vec<(String, usize)>,
    /// Language code -> tweet count, dominant languages first.
    pub languages: Vec<(String, usize)>,
}

impl StyleSignals {
    pub fn compute(profile: &Profile) -> Self {
        let tweets = &profile.tweets;
        if tweets.is_empty() {
            return Self {
                avg_tweet_length: 0.0,
                uses_emojis: false,
                media_rate: 0.0,
                reply_rate: 0.0,
                self_reference_rate: 0.0,
                common_words: Vec::new(),
                languages: Vec::new(),
            };
        }

        let count = tweets.len() as f64;
        let total_len: usize = tweets.iter().map(|t| t.text.chars().count()).sum();
        let uses_emojis = tweets.iter().any(|t| contains_emoji(&t.text));
        let with_media = tweets.iter().filter(|t| t.has_media()).count() as f64;
        let replies = tweets.iter().filter(|t| t.is_reply).count() as f64;
        let self_refs = tweets
            .iter()
            .filter(|t| {
                let lowered = t.text.to_lowercase();
                ["i", "me", "my"]
                    .iter()
                    .any(|word| contains_word(&lowered, word))
            })
            .count() as f64;

        let mut word_counts: HashMap<String, usize> = HashMap::new();
        for tweet in tweets {
            for word in words_of(&tweet.text) {
                if STOPWORDS.contains(&word.as_str()) {
                    continue;
                }
                *word_counts.entry(word).or_insert(0) += 1;
            }
        }
        let mut common_words: Vec<(String, usize)> = word_counts.into_iter().collect();
        common_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        common_words.truncate(COMMON_WORD_COUNT);

        let mut language_counts: HashMap<String, usize> = HashMap::new();
        for tweet in tweets {
            if let Some(lang) = &tweet.language {
                *language_counts.entry(lang.clone()).or_insert(0) += 1;
            }
        }
        let mut languages: Vec<(String, usize)> = language_counts.into_iter().collect();
        languages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            avg_tweet_length: total_len as f64 / count,
            uses_emojis,
            media_rate: with_media / count,
            reply_rate: replies / count,
            self_reference_rate: self_refs / count,
            common_words,
            languages,
        }
    }

    pub fn heavy_meme_user(&self) -> bool {
        self.media_rate > MEME_RATE_THRESHOLD
    }

    /// One-line prose description of the language style for templates.
    pub fn language_style_line(&self) -> String {
        let mut parts = Vec::new();
        if self.uses_emojis {
            parts.push("Frequent emoji use".to_string());
        }
        if self.heavy_meme_user() {
            parts.push("Heavy meme references".to_string());
        }
        if self.avg_tweet_length < 100.0 {
            parts.push("Concise".to_string());
        } else if self.avg_tweet_length > 200.0 {
            parts.push("Verbose".to_string());
        }
        if parts.is_empty() {
            "Standard communication style".to_string()
        } else {
            parts.join(", ")
        }
    }

    pub fn interaction_style_line(&self) -> String {
        let mut parts = Vec::new();
        if self.reply_rate > 0.3 {
            parts.push("Engaged with community".to_string());
        }
        if self.avg_tweet_length < 100.0 {
            parts.push("Quick, punchy responses".to_string());
        }
        if parts.is_empty() {
            "Balanced interaction style".to_string()
        } else {
            parts.join(", ")
        }
    }

    pub fn response_patterns_line(&self) -> String {
        let mut parts = Vec::new();
        if self.reply_rate > 0.3 {
            parts.push("Highly interactive".to_string());
        }
        if self.heavy_meme_user() {
            parts.push("Often responds with memes".to_string());
        }
        if parts.is_empty() {
            "Standard response patterns".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn words_of(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

fn contains_word(lowered: &str, word: &str) -> bool {
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .any(|candidate| candidate == word)
}

fn contains_emoji(text: &str) -> bool {
    text.chars()
        .any(|c| ('\u{1F300}'..='\u{1F9FF}').contains(&c))
}
