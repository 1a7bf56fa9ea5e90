use super::support::{envelope, tweet, write_dump};
use super::IntegrationHarness;
use anyhow::Result;
use personalens::curation::{curate, load_curated, recent_sample, save_curated};
use personalens::ingestion::load_dump;
use personalens::profiles::extract_profiles;
use personalens::workspace::CurationSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn profile_from(fragments: &[String], harness: &IntegrationHarness) -> personalens::Profile {
    let dump = write_dump(harness.workspace_path(), "dump.json", fragments);
    let load = load_dump(&dump).expect("failed to load fixture dump");
    extract_profiles(&load.tweets)
        .into_iter()
        .next()
        .expect("fixture produced no profile")
}

#[test]
fn curated_tweets_are_ranked_by_weighted_engagement() -> Result<()> {
    let harness = IntegrationHarness::new();
    // 10 favorites beats 20 favorites + 0 retweets only via retweet weight.
    let fragment = envelope(&[
        tweet("alice", "low", "plain favorite tweet", 20, 0),
        tweet("alice", "high", "retweeted tweet", 10, 8),
    ]);
    let profile = profile_from(&[fragment], &harness);

    let curated = curate(&profile, &CurationSettings::default());
    // high: 10*1 + 8*2 = 26; low: 20*1 = 20.
    assert_eq!(curated.tweets[0].id, "high");
    assert_eq!(curated.tweets[1].id, "low");
    Ok(())
}

#[test]
fn word_set_repeats_are_removed() -> Result<()> {
    let harness = IntegrationHarness::new();
    let fragment = envelope(&[
        tweet("alice", "1", "to the moon", 50, 0),
        tweet("alice", "2", "The Moon To", 40, 0),
        tweet("alice", "3", "something else entirely", 30, 0),
    ]);
    let profile = profile_from(&[fragment], &harness);

    let curated = curate(&profile, &CurationSettings::default());
    assert_eq!(curated.metadata.total_analyzed, 3);
    assert_eq!(curated.metadata.selected, 2);
    assert!(curated.tweets.iter().any(|t| t.id == "1"));
    assert!(curated.tweets.iter().all(|t| t.id != "2"));
    Ok(())
}

#[test]
fn cap_and_empty_text_are_enforced() -> Result<()> {
    let harness = IntegrationHarness::new();
    let mut tweets: Vec<_> = (0..10)
        .map(|i| {
            tweet(
                "alice",
                &i.to_string(),
                &format!("unique tweet number {i}"),
                i,
                0,
            )
        })
        .collect();
    tweets.push(tweet("alice", "empty", "   ", 1000, 1000));
    let profile = profile_from(&[envelope(&tweets)], &harness);

    let settings = CurationSettings {
        curated_limit: 4,
        ..Default::default()
    };
    let curated = curate(&profile, &settings);
    assert_eq!(curated.tweets.len(), 4);
    assert!(curated.tweets.iter().all(|t| !t.text.trim().is_empty()));
    // Highest-engagement non-empty tweet leads.
    assert_eq!(curated.tweets[0].id, "9");
    Ok(())
}

#[test]
fn curated_set_round_trips_through_the_store() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let fragment = envelope(&[tweet("alice", "1", "persisted tweet", 2, 2)]);
    let profile = profile_from(&[fragment], &harness);

    let curated = curate(&profile, &workspace.config.curation);
    save_curated(&workspace, &curated)?;
    let restored = load_curated(&workspace, "alice")?;
    assert_eq!(restored.username, "alice");
    assert_eq!(restored.metadata.selected, 1);
    Ok(())
}

#[test]
fn recent_sample_is_deterministic_under_a_seed() -> Result<()> {
    let harness = IntegrationHarness::new();
    let tweets: Vec<_> = (0..30)
        .map(|i| tweet("alice", &i.to_string(), &format!("recent tweet {i}"), 0, 0))
        .collect();
    let profile = profile_from(&[envelope(&tweets)], &harness);

    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);
    let sample_a = recent_sample(&profile, 5, &mut rng_a);
    let sample_b = recent_sample(&profile, 5, &mut rng_b);
    assert_eq!(sample_a.len(), 5);
    let ids_a: Vec<_> = sample_a.iter().map(|t| t.id.clone()).collect();
    let ids_b: Vec<_> = sample_b.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids_a, ids_b);
    Ok(())
}
