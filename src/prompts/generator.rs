//! Renders the three prompt templates forwarded verbatim to LLM providers.

use super::chat_styles::ChatStyle;
use super::style::{tweet_tone, StyleSignals};
use crate::curation::CuratedSet;
use crate::profiles::{Profile, TweetRecord};

const TOP_TWEETS_PERSONALITY: usize = 10;
const TOP_TWEETS_CHAT: usize = 5;
const EXAMPLE_INTERACTIONS: usize = 2;
const TWEET_EXCERPT_CHARS: usize = 280;

pub struct PromptGenerator<'a> {
    profile: &'a Profile,
    curated: &'a CuratedSet,
    signals: StyleSignals,
}

impl<'a> PromptGenerator<'a> {
    pub fn new(profile: &'a Profile, curated: &'a CuratedSet) -> Self {
        let signals = StyleSignals::compute(profile);
        Self {
            profile,
            curated,
            signals,
        }
    }

    /// Personality analysis prompt: metrics, top tweets, instruction list.
    pub fn render_personality_analysis(&self) -> String {
        let top = self.curated.top_by_engagement(TOP_TWEETS_PERSONALITY);
        let mut tweet_lines = String::new();
        for (i, tweet) in top.iter().enumerate() {
            tweet_lines.push_str(&format!(
                "{}. \"{}\"\n   Engagement: {} favorites, {} retweets, {} views\n   Tone: {}\n",
                i + 1,
                excerpt(&tweet.text),
                tweet.favorite_count,
                tweet.retweet_count,
                tweet.view_count,
                tweet_tone(&tweet.text).label()
            ));
        }
        let common_words = self
            .signals
            .common_words
            .iter()
            .take(10)
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Analyze the Twitter personality of @{username} based on the following data:\n\n\
             Profile Information:\n\
             - Username: @{username}\n\
             - Name: {name}\n\
             - Description: {description}\n\
             - Followers: {followers}, Following: {friends}\n\
             - Total Tweets Analyzed: {total}\n\n\
             Key Metrics:\n\
             - Average engagement: {avg_favs:.0} favorites, {avg_rts:.0} retweets, {avg_views:.0} views per tweet\n\
             - Tweet style: {style_line}\n\
             - Average tweet length: {avg_len:.0} characters\n\
             - Reply rate: {reply_rate:.1}% of tweets are replies\n\
             - Self-reference rate: {self_rate:.1}% of tweets\n\n\
             Most Popular Tweets:\n{tweet_lines}\n\
             Common Topics & Language:\n{common_words}\n\n\
             Based on this data, provide a casual but insightful psychoanalysis that:\n\
             1. Identifies core personality traits and quirks\n\
             2. Analyzes their communication style and social dynamics\n\
             3. Highlights unique behavioral patterns\n\
             4. Speculates about their motivations and insecurities\n\
             5. Discusses how they present themselves versus potential underlying traits\n\n\
             Write in an entertaining, accessible style while maintaining psychological depth. \
             Include specific examples from their tweets to support your analysis.",
            username = self.profile.username,
            name = self.profile.name.as_deref().unwrap_or("N/A"),
            description = self.profile.description.as_deref().unwrap_or("N/A"),
            followers = self.profile.followers_count,
            friends = self.profile.friends_count,
            total = self.profile.tweet_count(),
            avg_favs = self.profile.avg_favorites(),
            avg_rts = self.profile.avg_retweets(),
            avg_views = self.profile.avg_views(),
            style_line = self.signals.language_style_line(),
            avg_len = self.signals.avg_tweet_length,
            reply_rate = self.signals.reply_rate * 100.0,
            self_rate = self.signals.self_reference_rate * 100.0,
            tweet_lines = tweet_lines,
            common_words = if common_words.is_empty() {
                "N/A".to_string()
            } else {
                common_words
            },
        )
    }

    /// Chat-persona system prompt in the given named style.
    pub fn render_chat_system(&self, style: &ChatStyle) -> String {
        let top = self.curated.top_by_engagement(TOP_TWEETS_CHAT);
        let mut examples = String::new();
        for tweet in top.iter().take(EXAMPLE_INTERACTIONS) {
            examples.push_str(&format!(
                "User: [Relevant topic]\n{}: {}\n\n",
                self.profile.username,
                excerpt(&tweet.text)
            ));
        }
        let mut style_examples = String::new();
        for example in &style.examples {
            style_examples.push_str(&format!(
                "Human: {}\nAssistant: {}\n\n",
                example.user, example.assistant
            ));
        }
        let responsiveness = if self.signals.reply_rate > 0.3 {
            "Highly responsive"
        } else {
            "Selective in responses"
        };

        format!(
            "You are a chat AI that embodies the Twitter personality of @{username}. \
             Your responses should reflect the following characteristics:\n\n\
             Communication Style: {style_name}\n\
             {style_description}\n\
             Primary Tone: {style_tone}\n\
             - Tweet length: Typically uses {avg_len:.0} characters\n\
             - Engagement style: {responsiveness}\n\
             - Language: {language_line}\n\n\
             Behavioral Guidelines:\n\
             1. Match their response patterns: {response_patterns}\n\
             2. Use similar language patterns and common phrases\n\
             3. Maintain consistent opinions and viewpoints\n\
             4. Reflect their interaction style: {interaction_style}\n\n\
             Example Interactions (based on high-engagement tweets):\n{examples}\
             Example Interactions (in {style_name} style):\n{style_examples}\
             Boundaries:\n\
             1. Stay within their established topic areas and interests\n\
             2. Maintain their typical emotional range and reaction patterns\n\
             3. Use similar humor style and meme references\n\
             4. Preserve their unique quirks while avoiding caricature\n\
             5. Avoid market predictions or financial advice\n\n\
             Your goal is to provide responses that feel authentic to their personality while \
             maintaining appropriate boundaries and ethical considerations.",
            username = self.profile.username,
            style_name = style.name,
            style_description = style.description,
            style_tone = style.tone,
            avg_len = self.signals.avg_tweet_length,
            responsiveness = responsiveness,
            language_line = self.signals.language_style_line(),
            response_patterns = self.signals.response_patterns_line(),
            interaction_style = self.signals.interaction_style_line(),
            examples = examples,
            style_examples = style_examples,
        )
    }

    /// Creative analysis prompt over a recent-tweet sample.
    pub fn render_creative_analysis(&self, sample: &[TweetRecord]) -> String {
        let mut tweet_lines = String::new();
        for tweet in sample {
            tweet_lines.push_str(&format!("- {}\n\n", excerpt(&tweet.text)));
        }
        format!(
            "Create a unique creative analysis of @{username}'s Twitter presence.\n\n\
             Based on these recent tweets:\n\n{tweet_lines}\
             Choose ONE of the following creative approaches:\n\n\
             1. Write a short story that captures their Twitter personality\n\
             2. Create a \"day in the life\" narrative based on their tweet patterns\n\
             3. Design a fictional interview that reveals their character\n\
             4. Analyze their tweets as if they were modern poetry\n\
             5. Create a sitcom character description based on their online presence\n\n\
             Be creative but ground your analysis in specific examples from their tweets.",
            username = self.profile.username,
            tweet_lines = tweet_lines,
        )
    }
}

/// Truncates tweet text for prompt embedding.
fn excerpt(text: &str) -> String {
    let flattened = text.replace('\n', " ");
    if flattened.chars().count() <= TWEET_EXCERPT_CHARS {
        flattened
    } else {
        let cut: String = flattened.chars().take(TWEET_EXCERPT_CHARS).collect();
        format!("{cut}...")
    }
}
