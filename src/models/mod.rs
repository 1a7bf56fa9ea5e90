pub mod client;

pub use client::ModelClient;

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// LLM providers a prompt can be forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    Anthropic,
    OpenAi,
    Local,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Anthropic, Provider::OpenAi, Provider::Local];

    pub fn label(self) -> &'static str {
        match self {
            Provider::Anthropic => "claude",
            Provider::OpenAi => "gpt4",
            Provider::Local => "local",
        }
    }

    /// Environment variable holding the API key, if the provider needs one.
    pub fn env_key(self) -> Option<&'static str> {
        match self {
            Provider::Anthropic => Some("ANTHROPIC_API_KEY"),
            Provider::OpenAi => Some("OPENAI_API_KEY"),
            Provider::Local => None,
        }
    }

    pub fn mock_placeholder(self) -> &'static str {
        match self {
            Provider::Anthropic => "[Claude's analysis would appear here - mock response]",
            Provider::OpenAi => "[GPT-4's analysis would appear here - mock response]",
            Provider::Local => "[Local model's analysis would appear here - mock response]",
        }
    }

    fn error_placeholder(self) -> &'static str {
        match self {
            Provider::Anthropic => "[Error: Could not generate Claude's analysis]",
            Provider::OpenAi => "[Error: Could not generate GPT-4's analysis]",
            Provider::Local => "[Error: Could not generate local model's analysis]",
        }
    }
}

/// One provider's answer to one prompt. A failed call keeps the run going
/// and records the error alongside a placeholder body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub provider: Provider,
    pub text: String,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sends the prompt to every provider, substituting placeholders on failure.
pub fn generate_all(client: &ModelClient, prompt: &str) -> Vec<ProviderResponse> {
    Provider::ALL
        .iter()
        .map(|&provider| match client.generate(provider, prompt) {
            Ok(text) => ProviderResponse {
                provider,
                text,
                error: None,
            },
            Err(err) => ProviderResponse {
                provider,
                text: provider.error_placeholder().to_string(),
                error: Some(format!("{err:#}")),
            },
        })
        .collect()
}

/// Writes responses as sectioned text plus a JSON sidecar under
/// `results/<username>/`.
pub fn save_responses(
    workspace: &Workspace,
    username: &str,
    prompt_label: &str,
    responses: &[ProviderResponse],
) -> Result<PathBuf> {
    let dir = workspace.paths.result_dir(username);
    fs::create_dir_all(&dir)?;

    let mut text = String::new();
    for response in responses {
        text.push_str(&format!(
            "=== {} RESPONSE ===\n\n{}\n\n",
            response.provider.label().to_uppercase(),
            response.text
        ));
    }
    let text_path = dir.join(format!("{prompt_label}_responses.txt"));
    fs::write(&text_path, &text)
        .with_context(|| format!("Failed to write responses {:?}", text_path))?;

    let json_path = dir.join(format!("{prompt_label}_responses.json"));
    let data = serde_json::to_vec_pretty(responses)?;
    fs::write(&json_path, data)
        .with_context(|| format!("Failed to write responses {:?}", json_path))?;

    Ok(text_path)
}
