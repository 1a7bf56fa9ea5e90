use super::support::{envelope, tweet, write_dump};
use super::IntegrationHarness;
use anyhow::Result;
use personalens::curation::curate;
use personalens::ingestion::load_dump;
use personalens::profiles::extract_profiles;
use personalens::prompts::{render_all, save_prompts, PromptKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

fn rendered(harness: &IntegrationHarness, style: &str) -> personalens::prompts::RenderedPrompts {
    let workspace = harness.workspace();
    let fragment = envelope(&[
        tweet("alice", "1", "shipping the new rocket design today!", 100, 40),
        tweet("alice", "2", "why do launch windows always move?", 50, 10),
        tweet("alice", "3", "orbital mechanics is underrated", 25, 5),
    ]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);
    let load = load_dump(&dump).expect("failed to load fixture dump");
    let profile = extract_profiles(&load.tweets).remove(0);
    let curated = curate(&profile, &workspace.config.curation);
    let mut rng = StdRng::seed_from_u64(1);
    render_all(&workspace, &profile, &curated, style, &mut rng)
}

#[test]
fn personality_prompt_carries_metrics_and_top_tweets() {
    let harness = IntegrationHarness::new();
    let prompts = rendered(&harness, "professional");
    let text = &prompts.personality_analysis;
    assert!(text.contains("@alice"));
    assert!(text.contains("Most Popular Tweets:"));
    assert!(text.contains("shipping the new rocket design today!"));
    assert!(text.contains("Average engagement:"));
    assert!(text.contains("Reply rate:"));
}

#[test]
fn chat_prompt_reflects_the_selected_style() {
    let harness = IntegrationHarness::new();
    let prompts = rendered(&harness, "comedy");
    let text = &prompts.chat_system;
    assert!(text.contains("Communication Style: Comedy"));
    assert!(text.contains("Playful and light-hearted"));
    assert!(text.contains("Boundaries:"));
    assert!(text.contains("alice:"));
}

#[test]
fn creative_prompt_lists_sampled_tweets_and_formats() {
    let harness = IntegrationHarness::new();
    let prompts = rendered(&harness, "professional");
    let text = &prompts.creative_analysis;
    assert!(text.contains("Choose ONE of the following creative approaches:"));
    assert!(text.contains("- "));
    assert!(text.contains("sitcom character description"));
}

#[test]
fn prompts_are_written_to_the_workspace() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let prompts = rendered(&harness, "visionary");
    let written = save_prompts(&workspace, &prompts)?;
    assert_eq!(written.len(), PromptKind::ALL.len());
    for path in &written {
        let content = fs::read_to_string(path)?;
        assert!(!content.is_empty());
    }
    assert!(workspace
        .paths
        .prompt_dir("alice")
        .join("chat_system.txt")
        .exists());
    Ok(())
}
