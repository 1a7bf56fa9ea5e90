pub mod chat_styles;
pub mod generator;
pub mod style;

pub use chat_styles::{chat_style, ChatStyle, StyleExample, STYLE_KEYS};
pub use generator::PromptGenerator;
pub use style::{tweet_tone, StyleSignals, Tone};

use crate::curation::{recent_sample, CuratedSet};
use crate::profiles::Profile;
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::PathBuf;

/// The three prompt artifacts written per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    PersonalityAnalysis,
    ChatSystem,
    CreativeAnalysis,
}

impl PromptKind {
    pub const ALL: [PromptKind; 3] = [
        PromptKind::PersonalityAnalysis,
        PromptKind::ChatSystem,
        PromptKind::CreativeAnalysis,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            PromptKind::PersonalityAnalysis => "personality_analysis.txt",
            PromptKind::ChatSystem => "chat_system.txt",
            PromptKind::CreativeAnalysis => "creative_analysis.txt",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::PersonalityAnalysis => "personality_analysis",
            PromptKind::ChatSystem => "chat_system",
            PromptKind::CreativeAnalysis => "creative_analysis",
        }
    }
}

/// All three rendered prompts for one profile.
#[derive(Debug, Clone)]
pub struct RenderedPrompts {
    pub username: String,
    pub personality_analysis: String,
    pub chat_system: String,
    pub creative_analysis: String,
}

impl RenderedPrompts {
    pub fn get(&self, kind: PromptKind) -> &str {
        match kind {
            PromptKind::PersonalityAnalysis => &self.personality_analysis,
            PromptKind::ChatSystem => &self.chat_system,
            PromptKind::CreativeAnalysis => &self.creative_analysis,
        }
    }
}

/// Renders all three prompts for a profile with the given chat style.
pub fn render_all<R: Rng>(
    workspace: &Workspace,
    profile: &Profile,
    curated: &CuratedSet,
    style_key: &str,
    rng: &mut R,
) -> RenderedPrompts {
    let generator = PromptGenerator::new(profile, curated);
    let style = chat_style(style_key);
    let sample = recent_sample(
        profile,
        workspace.config.curation.recent_sample_size as usize,
        rng,
    );
    RenderedPrompts {
        username: profile.username.clone(),
        personality_analysis: generator.render_personality_analysis(),
        chat_system: generator.render_chat_system(&style),
        creative_analysis: generator.render_creative_analysis(&sample),
    }
}

/// Writes the rendered prompts under `prompts/<username>/`.
pub fn save_prompts(workspace: &Workspace, prompts: &RenderedPrompts) -> Result<Vec<PathBuf>> {
    let dir = workspace.paths.prompt_dir(&prompts.username);
    fs::create_dir_all(&dir)?;
    let mut written = Vec::new();
    for kind in PromptKind::ALL {
        let path = dir.join(kind.file_name());
        fs::write(&path, prompts.get(kind))
            .with_context(|| format!("Failed to write prompt {:?}", path))?;
        written.push(path);
    }
    Ok(written)
}
