//! Blocking HTTP clients for the LLM providers.
//!
//! One request shape per provider, no streaming, no retries. Keys come
//! from the environment; a missing key downgrades the provider to mock
//! output rather than failing the run.

use super::Provider;
use crate::workspace::ModelSettings;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use std::time::Duration;

const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const ANALYST_SYSTEM: &str =
    "You are an expert in psychological analysis and digital behavior patterns.";

pub struct ModelClient {
    http: Client,
    settings: ModelSettings,
}

impl ModelClient {
    pub fn new(settings: ModelSettings) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, settings })
    }

    pub fn mock_responses(&self) -> bool {
        self.settings.mock_responses
    }

    /// Sends the prompt to one provider and returns the response text.
    ///
    /// In mock mode, or when the provider's API key is absent, returns the
    /// provider's placeholder string without any network traffic.
    pub fn generate(&self, provider: Provider, prompt: &str) -> Result<String> {
        if self.settings.mock_responses {
            return Ok(provider.mock_placeholder().to_string());
        }
        match provider {
            Provider::Anthropic => self.call_anthropic(prompt),
            Provider::OpenAi => self.call_openai(prompt),
            Provider::Local => self.call_local(prompt),
        }
    }

    fn api_key(provider: Provider) -> Option<String> {
        provider
            .env_key()
            .and_then(|key| env::var(key).ok())
            .filter(|value| !value.is_empty())
    }

    fn call_anthropic(&self, prompt: &str) -> Result<String> {
        let key = match Self::api_key(Provider::Anthropic) {
            Some(key) => key,
            None => return Ok(Provider::Anthropic.mock_placeholder().to_string()),
        };
        let body = json!({
            "model": self.settings.anthropic_model,
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
            "system": ANALYST_SYSTEM,
            "messages": [{"role": "user", "content": prompt}],
        });
        let response = self
            .http
            .post(ANTHROPIC_URL)
            .header("x-api-key", key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .context("Anthropic request failed")?
            .error_for_status()
            .context("Anthropic returned an error status")?;
        let parsed: AnthropicResponse = response
            .json()
            .context("Failed to parse Anthropic response")?;
        let text = parsed
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect::<Vec<String>>()
            .join("");
        if text.is_empty() {
            anyhow::bail!("Anthropic response contained no text blocks");
        }
        Ok(text)
    }

    fn call_openai(&self, prompt: &str) -> Result<String> {
        let key = match Self::api_key(Provider::OpenAi) {
            Some(key) => key,
            None => return Ok(Provider::OpenAi.mock_placeholder().to_string()),
        };
        let body = json!({
            "model": self.settings.openai_model,
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
            "messages": [{"role": "user", "content": prompt}],
        });
        let response = self
            .http
            .post(OPENAI_URL)
            .bearer_auth(key)
            .json(&body)
            .send()
            .context("OpenAI request failed")?
            .error_for_status()
            .context("OpenAI returned an error status")?;
        let parsed: OpenAiResponse = response.json().context("Failed to parse OpenAI response")?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("OpenAI response contained no choices")
    }

    fn call_local(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/api/v1/generate",
            self.settings.local_model_url.trim_end_matches('/')
        );
        let body = json!({
            "prompt": format!("### Instruction: {prompt}\n### Response:"),
            "max_new_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
            "top_p": 0.9,
            "repetition_penalty": 1.1,
            "early_stopping": true,
            "add_bos_token": true,
            "truncation_length": 4096,
            "skip_special_tokens": true,
            "stopping_strings": ["### Instruction:", "### Response:"],
        });
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .with_context(|| format!("Local model request to {url} failed"))?
            .error_for_status()
            .context("Local model returned an error status")?;
        let parsed: LocalResponse = response
            .json()
            .context("Failed to parse local model response")?;
        parsed
            .results
            .into_iter()
            .next()
            .map(|result| result.text.trim().to_string())
            .context("Local model response contained no results")
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<AnthropicBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct LocalResponse {
    #[serde(default)]
    results: Vec<LocalResult>,
}

#[derive(Debug, Deserialize)]
struct LocalResult {
    #[serde(default)]
    text: String,
}
