use super::support::{envelope, tweet, write_dump};
use super::IntegrationHarness;
use anyhow::Result;
use personalens::pipeline::{run_pipeline, PipelineOptions};
use personalens::runlog::{EventKind, RunLog};
use std::fs;

#[test]
fn full_run_in_mock_mode_writes_all_artifacts() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    assert!(workspace.config.models.mock_responses);

    let fragment = envelope(&[
        tweet("alice", "1", "hello from the pipeline", 10, 2),
        tweet("alice", "2", "second tweet here", 8, 1),
    ]);
    let dump = write_dump(harness.workspace_path(), "alice_tweets.json", &[fragment]);

    let options = PipelineOptions {
        sample_seed: Some(42),
        ..Default::default()
    };
    let report = run_pipeline(&workspace, &dump, &options)?;
    assert_eq!(report.profiles.len(), 1);
    let profile = &report.profiles[0];
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.prompt_paths.len(), 3);
    assert_eq!(profile.response_paths.len(), 3);

    // Profile and curated artifacts.
    assert!(workspace.paths.profile_dir("alice").join("profile.json").exists());
    assert!(workspace.paths.profile_dir("alice").join("curated.json").exists());

    // Mock responses carry the placeholder sections.
    let responses = fs::read_to_string(
        workspace
            .paths
            .result_dir("alice")
            .join("personality_analysis_responses.txt"),
    )?;
    assert!(responses.contains("=== CLAUDE RESPONSE ==="));
    assert!(responses.contains("mock response"));

    // Run log covers every stage.
    let events = RunLog::for_workspace(&workspace).read_all()?;
    let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&EventKind::DumpLoaded));
    assert!(kinds.contains(&EventKind::ProfilesExtracted));
    assert!(kinds.contains(&EventKind::CurationCompleted));
    assert!(kinds.contains(&EventKind::PromptsWritten));
    assert!(kinds.contains(&EventKind::ResponsesSaved));
    assert!(events.iter().all(|e| e.run_id == report.run_id));
    Ok(())
}

#[test]
fn prompts_only_run_skips_provider_calls() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let fragment = envelope(&[tweet("bob", "1", "prompts only please", 3, 0)]);
    let dump = write_dump(harness.workspace_path(), "bob_tweets.json", &[fragment]);

    let options = PipelineOptions {
        prompts_only: true,
        sample_seed: Some(1),
        ..Default::default()
    };
    let report = run_pipeline(&workspace, &dump, &options)?;
    assert_eq!(report.profiles[0].response_paths.len(), 0);
    assert!(!workspace
        .paths
        .result_dir("bob")
        .join("personality_analysis_responses.txt")
        .exists());
    Ok(())
}

#[test]
fn unknown_username_filter_fails_cleanly() {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let fragment = envelope(&[tweet("alice", "1", "present", 1, 0)]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);

    let options = PipelineOptions {
        username: Some("nobody".into()),
        ..Default::default()
    };
    let err = run_pipeline(&workspace, &dump, &options).unwrap_err();
    assert!(err.to_string().contains("nobody"));
}

#[test]
fn dump_with_only_garbage_fails_cleanly() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let dump = write_dump(
        harness.workspace_path(),
        "garbage.json",
        &["not json at all".to_string()],
    );

    let err = run_pipeline(&workspace, &dump, &PipelineOptions::default()).unwrap_err();
    assert!(err.to_string().contains("No tweets"));
    Ok(())
}
