//! Configuration primitives for the PersonaLens workspace.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/PersonaLens/config/config.toml on Windows
//!   $XDG_DATA_HOME/PersonaLens/config/config.toml on Linux
//!   ~/Library/Application Support/PersonaLens/config/config.toml on macOS
//!
//! The config tracks ingestion limits, curation weights, and per-provider
//! model settings. Everything has a sensible default so a fresh install can
//! run the pipeline in mock mode without ever touching the config file.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Dump parsing and profile extraction limits.
    #[serde(default)]
    pub ingestion: IngestionSettings,
    /// Tweet curation weights and caps.
    #[serde(default)]
    pub curation: CurationSettings,
    /// LLM provider models, sampling parameters, and the mock toggle.
    #[serde(default)]
    pub models: ModelSettings,
}

/// Ingestion-related defaults that affect dump loading and profile storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionSettings {
    /// Number of rayon workers used to parse dump fragments.
    #[serde(default = "default_chunk_parallelism")]
    pub chunk_parallelism: u32,
    /// Hard cap on tweets retained per profile when saving processed data.
    #[serde(default = "default_max_tweets_per_profile")]
    pub max_tweets_per_profile: u32,
}

impl Default for IngestionSettings {
    fn default() -> Self {
        Self {
            chunk_parallelism: default_chunk_parallelism(),
            max_tweets_per_profile: default_max_tweets_per_profile(),
        }
    }
}

const fn default_chunk_parallelism() -> u32 {
    4
}

const fn default_max_tweets_per_profile() -> u32 {
    1000
}

/// Curation policy tuning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurationSettings {
    /// Maximum number of curated tweets kept per profile.
    #[serde(default = "default_curated_limit")]
    pub curated_limit: u32,
    /// Weight applied to favorites in the engagement score.
    #[serde(default = "default_favorite_weight")]
    pub favorite_weight: f32,
    /// Weight applied to retweets in the engagement score.
    #[serde(default = "default_retweet_weight")]
    pub retweet_weight: f32,
    /// Number of recent tweets sampled for the creative prompt.
    #[serde(default = "default_recent_sample_size")]
    pub recent_sample_size: u32,
}

impl Default for CurationSettings {
    fn default() -> Self {
        Self {
            curated_limit: default_curated_limit(),
            favorite_weight: default_favorite_weight(),
            retweet_weight: default_retweet_weight(),
            recent_sample_size: default_recent_sample_size(),
        }
    }
}

const fn default_curated_limit() -> u32 {
    50
}

const fn default_favorite_weight() -> f32 {
    1.0
}

const fn default_retweet_weight() -> f32 {
    2.0
}

const fn default_recent_sample_size() -> u32 {
    20
}

/// LLM provider configuration shared by all prompt types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Anthropic model identifier used for the messages API.
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
    /// OpenAI model identifier used for chat completions.
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Base URL of a local text-generation-webui instance.
    #[serde(default = "default_local_model_url")]
    pub local_model_url: String,
    /// Response token budget per call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature per call.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// When true, providers return placeholder text instead of calling out.
    #[serde(default = "default_mock_responses")]
    pub mock_responses: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            anthropic_model: default_anthropic_model(),
            openai_model: default_openai_model(),
            local_model_url: default_local_model_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            mock_responses: default_mock_responses(),
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-opus-20240229".into()
}

fn default_openai_model() -> String {
    "gpt-4".into()
}

fn default_local_model_url() -> String {
    "http://127.0.0.1:7860".into()
}

const fn default_max_tokens() -> u32 {
    1000
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_mock_responses() -> bool {
    true
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Returns the root directory where PersonaLens stores data.
///
/// Order of precedence:
/// 1. `PERSONALENS_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("PERSONALENS_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("PersonaLens"))
}

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

/// Ensures the workspace structure exists and returns the resolved paths.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    let paths = WorkspacePaths::new(root);
    for dir in [
        &paths.raw_dir,
        &paths.processed_dir,
        &paths.prompts_dir,
        &paths.results_dir,
        &paths.runlog_dir,
    ] {
        fs::create_dir_all(dir)?;
    }
    Ok(paths)
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub processed_dir: PathBuf,
    pub prompts_dir: PathBuf,
    pub results_dir: PathBuf,
    pub runlog_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn new(root: PathBuf) -> Self {
        Self {
            raw_dir: root.join("data").join("raw"),
            processed_dir: root.join("data").join("processed"),
            prompts_dir: root.join("prompts"),
            results_dir: root.join("results"),
            runlog_dir: root.join("runlog"),
            root,
        }
    }

    /// Directory holding the processed artifacts for one profile.
    pub fn profile_dir(&self, username: &str) -> PathBuf {
        self.processed_dir.join(username)
    }

    /// Directory holding the rendered prompts for one profile.
    pub fn prompt_dir(&self, username: &str) -> PathBuf {
        self.prompts_dir.join(username)
    }

    /// Directory holding model responses for one profile.
    pub fn result_dir(&self, username: &str) -> PathBuf {
        self.results_dir.join(username)
    }
}
