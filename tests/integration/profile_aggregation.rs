use super::support::{envelope, tweet, write_dump};
use super::IntegrationHarness;
use anyhow::Result;
use personalens::ingestion::load_dump;
use personalens::profiles::{extract_profiles, load_profile, save_profiles};

#[test]
fn totals_sum_counts_across_a_profile() -> Result<()> {
    let harness = IntegrationHarness::new();
    let fragment = envelope(&[
        tweet("alice", "1", "one", 10, 2),
        tweet("alice", "2", "two", 5, 3),
        tweet("bob", "3", "three", 1, 1),
    ]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);

    let load = load_dump(&dump)?;
    let profiles = extract_profiles(&load.tweets);
    assert_eq!(profiles.len(), 2);

    let alice = profiles.iter().find(|p| p.username == "alice").unwrap();
    assert_eq!(alice.totals.favorites, 15);
    assert_eq!(alice.totals.retweets, 5);
    assert_eq!(alice.totals.views, 15 * 20);
    assert_eq!(alice.tweet_count(), 2);
    assert!((alice.avg_favorites() - 7.5).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn profiles_round_trip_through_the_store() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let fragment = envelope(&[tweet("alice", "1", "stored tweet", 4, 1)]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);

    let load = load_dump(&dump)?;
    let profiles = extract_profiles(&load.tweets);
    let written = save_profiles(&workspace, &profiles)?;
    assert_eq!(written.len(), 1);

    let restored = load_profile(&workspace, "alice")?;
    assert_eq!(restored.author_id, "alice-id");
    assert_eq!(restored.tweets[0].text, "stored tweet");
    assert_eq!(restored.totals.favorites, 4);
    Ok(())
}

#[test]
fn tweet_cap_is_applied_on_save() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut workspace = harness.workspace();
    workspace.config.ingestion.max_tweets_per_profile = 3;

    let tweets: Vec<_> = (0..10)
        .map(|i| tweet("alice", &i.to_string(), &format!("tweet number {i}"), i, 0))
        .collect();
    let dump = write_dump(
        harness.workspace_path(),
        "dump.json",
        &[envelope(&tweets)],
    );

    let load = load_dump(&dump)?;
    let profiles = extract_profiles(&load.tweets);
    save_profiles(&workspace, &profiles)?;

    let restored = load_profile(&workspace, "alice")?;
    assert_eq!(restored.tweet_count(), 3);
    Ok(())
}

#[test]
fn language_falls_back_to_detection() -> Result<()> {
    let harness = IntegrationHarness::new();
    let fragment = envelope(&[tweet(
        "alice",
        "1",
        "the quick brown fox jumps over the lazy dog every single morning",
        1,
        0,
    )]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);

    let load = load_dump(&dump)?;
    let profiles = extract_profiles(&load.tweets);
    assert_eq!(profiles[0].tweets[0].language.as_deref(), Some("eng"));
    Ok(())
}
