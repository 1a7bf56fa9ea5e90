//! End-to-end run: dump -> profiles -> curation -> prompts -> responses.

use crate::curation::{curate, save_curated};
use crate::ingestion::{load_dump, DumpSummary};
use crate::models::{generate_all, save_responses, ModelClient, ProviderResponse};
use crate::profiles::{extract_profiles, save_profiles, Profile};
use crate::prompts::{render_all, save_prompts, PromptKind, RenderedPrompts};
use crate::runlog::{log_event, EventKind};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::ThreadPoolBuilder;
use serde_json::json;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// What one pipeline run produced, per profile.
#[derive(Debug)]
pub struct ProfileReport {
    pub username: String,
    pub tweets_analyzed: usize,
    pub tweets_curated: usize,
    pub prompt_paths: Vec<PathBuf>,
    pub response_paths: Vec<PathBuf>,
}

/// Summary of a full pipeline run.
#[derive(Debug)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub dump_summary: DumpSummary,
    pub profiles: Vec<ProfileReport>,
}

pub struct PipelineOptions {
    /// Named chat style applied to the chat-persona prompt.
    pub style_key: String,
    /// Only process this username when set; otherwise all extracted profiles.
    pub username: Option<String>,
    /// Skip the provider calls entirely (prompts are still written).
    pub prompts_only: bool,
    /// Seed for the creative-sample RNG; random when unset.
    pub sample_seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            style_key: "professional".into(),
            username: None,
            prompts_only: false,
            sample_seed: None,
        }
    }
}

/// Runs the whole pipeline over one dump file.
///
/// Malformed dump fragments and failed provider calls are tolerated and
/// logged; only unreadable input and unwritable output abort the run.
pub fn run_pipeline<P: AsRef<Path>>(
    workspace: &Workspace,
    dump_path: P,
    options: &PipelineOptions,
) -> Result<PipelineReport> {
    let run_id = Uuid::new_v4();
    let dump_path = dump_path.as_ref();

    let pool = ThreadPoolBuilder::new()
        .num_threads(workspace.config.ingestion.chunk_parallelism.max(1) as usize)
        .build()
        .context("Failed to build ingestion thread pool")?;
    let load = pool.install(|| load_dump(dump_path))?;
    log_event(
        workspace,
        run_id,
        EventKind::DumpLoaded,
        json!({
            "path": dump_path,
            "fragments": load.summary.fragments,
            "parsed_fragments": load.summary.parsed_fragments,
            "tweets": load.summary.tweets,
            "issues": load.summary.issues.len(),
        }),
    )?;
    if load.tweets.is_empty() {
        anyhow::bail!("No tweets could be recovered from {:?}", dump_path);
    }

    let mut profiles = extract_profiles(&load.tweets);
    if let Some(username) = &options.username {
        profiles.retain(|profile| profile.username.eq_ignore_ascii_case(username));
        if profiles.is_empty() {
            anyhow::bail!("No profile named {username} found in {:?}", dump_path);
        }
    }
    save_profiles(workspace, &profiles)?;
    log_event(
        workspace,
        run_id,
        EventKind::ProfilesExtracted,
        json!({
            "profiles": profiles.len(),
            "tweets": profiles.iter().map(Profile::tweet_count).sum::<usize>(),
        }),
    )?;

    let client = if options.prompts_only {
        None
    } else {
        Some(ModelClient::new(workspace.config.models.clone())?)
    };

    let mut reports = Vec::new();
    for profile in &profiles {
        let report = process_profile(workspace, run_id, profile, options, client.as_ref())
            .with_context(|| format!("Failed to process profile {}", profile.username))?;
        reports.push(report);
    }

    Ok(PipelineReport {
        run_id,
        dump_summary: load.summary,
        profiles: reports,
    })
}

fn process_profile(
    workspace: &Workspace,
    run_id: Uuid,
    profile: &Profile,
    options: &PipelineOptions,
    client: Option<&ModelClient>,
) -> Result<ProfileReport> {
    let curated = curate(profile, &workspace.config.curation);
    save_curated(workspace, &curated)?;
    log_event(
        workspace,
        run_id,
        EventKind::CurationCompleted,
        json!({
            "username": profile.username,
            "analyzed": curated.metadata.total_analyzed,
            "selected": curated.metadata.selected,
        }),
    )?;

    let mut rng = match options.sample_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let prompts = render_all(workspace, profile, &curated, &options.style_key, &mut rng);
    let prompt_paths = save_prompts(workspace, &prompts)?;
    log_event(
        workspace,
        run_id,
        EventKind::PromptsWritten,
        json!({ "username": profile.username, "files": prompt_paths.len() }),
    )?;

    let response_paths = match client {
        Some(client) => forward_prompts(workspace, run_id, &prompts, client)?,
        None => Vec::new(),
    };

    Ok(ProfileReport {
        username: profile.username.clone(),
        tweets_analyzed: curated.metadata.total_analyzed,
        tweets_curated: curated.metadata.selected,
        prompt_paths,
        response_paths,
    })
}

fn forward_prompts(
    workspace: &Workspace,
    run_id: Uuid,
    prompts: &RenderedPrompts,
    client: &ModelClient,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for kind in PromptKind::ALL {
        let responses = generate_all(client, prompts.get(kind));
        log_provider_errors(workspace, run_id, &prompts.username, kind, &responses)?;
        let path = save_responses(workspace, &prompts.username, kind.label(), &responses)?;
        log_event(
            workspace,
            run_id,
            EventKind::ResponsesSaved,
            json!({
                "username": prompts.username,
                "prompt": kind.label(),
                "providers": responses.len(),
            }),
        )?;
        paths.push(path);
    }
    Ok(paths)
}

fn log_provider_errors(
    workspace: &Workspace,
    run_id: Uuid,
    username: &str,
    kind: PromptKind,
    responses: &[ProviderResponse],
) -> Result<()> {
    for response in responses {
        if let Some(error) = &response.error {
            log_event(
                workspace,
                run_id,
                EventKind::ProviderError,
                json!({
                    "username": username,
                    "prompt": kind.label(),
                    "provider": response.provider.label(),
                    "error": error,
                }),
            )?;
        }
    }
    Ok(())
}
