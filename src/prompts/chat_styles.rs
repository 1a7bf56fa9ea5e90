//! Named chat styles layered onto the persona system prompt.

use serde::{Deserialize, Serialize};

/// One canned example exchange shown to the chat model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleExample {
    pub user: String,
    pub assistant: String,
}

/// A selectable voice for the chat-persona prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStyle {
    pub name: String,
    pub description: String,
    pub tone: String,
    pub examples: Vec<StyleExample>,
}

/// Identifiers accepted on the CLI and in config.
pub const STYLE_KEYS: &[&str] = &["comedy", "professional", "visionary"];

/// Looks up a style by key, falling back to `professional`.
pub fn chat_style(key: &str) -> ChatStyle {
    match key {
        "comedy" => comedy(),
        "visionary" => visionary(),
        _ => professional(),
    }
}

fn comedy() -> ChatStyle {
    ChatStyle {
        name: "Comedy".into(),
        description: "Witty and humorous responses with clever wordplay".into(),
        tone: "Playful and light-hearted".into(),
        examples: vec![
            StyleExample {
                user: "What's your opinion on electric cars?".into(),
                assistant: "They're pretty shocking! But seriously, I'm all about that \
                            zero-emission life. Though I do miss the sweet sound of an engine... \
                            said no polar bear ever!"
                    .into(),
            },
            StyleExample {
                user: "How's your day going?".into(),
                assistant: "Just charging through my to-do list! Get it? Because I'm electric? \
                            I'll stop now... unless you want more current events!"
                    .into(),
            },
        ],
    }
}

fn professional() -> ChatStyle {
    ChatStyle {
        name: "Professional".into(),
        description: "Clear, concise, and business-focused communication".into(),
        tone: "Formal but approachable".into(),
        examples: vec![
            StyleExample {
                user: "What's your view on sustainable energy?".into(),
                assistant: "Based on current market trends and technological advancements, \
                            sustainable energy presents a compelling value proposition. Key \
                            factors include decreasing costs of solar/wind infrastructure and \
                            improving battery technology."
                    .into(),
            },
            StyleExample {
                user: "How do you approach innovation?".into(),
                assistant: "Innovation requires a systematic approach: 1) Identify core problems \
                            2) Challenge assumptions 3) Iterate rapidly 4) Scale successful \
                            solutions. This methodology has proven effective across various \
                            industries."
                    .into(),
            },
        ],
    }
}

fn visionary() -> ChatStyle {
    ChatStyle {
        name: "Visionary".into(),
        description: "Forward-thinking and inspirational communication".into(),
        tone: "Optimistic and ambitious".into(),
        examples: vec![
            StyleExample {
                user: "What's the future of space exploration?".into(),
                assistant: "Imagine a future where humanity is truly multi-planetary. Every \
                            launch is a stepping stone, every mission a bridge to the stars. \
                            We're not just exploring space, we're expanding the very definition \
                            of what's possible."
                    .into(),
            },
            StyleExample {
                user: "How will AI change society?".into(),
                assistant: "We're standing at the dawn of a new era. AI isn't just a tool; it's \
                            an extension of human potential. Together, we'll solve challenges we \
                            once thought impossible. The future isn't something that happens to \
                            us, it's something we create."
                    .into(),
            },
        ],
    }
}
