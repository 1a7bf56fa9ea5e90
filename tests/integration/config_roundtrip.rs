use super::IntegrationHarness;
use anyhow::Result;
use personalens::workspace::{config_file_path, load_or_default, save, AppConfig};

#[test]
fn defaults_apply_without_a_config_file() -> Result<()> {
    let _harness = IntegrationHarness::new();
    let config = load_or_default()?;
    assert_eq!(config.curation.curated_limit, 50);
    assert_eq!(config.curation.retweet_weight, 2.0);
    assert_eq!(config.ingestion.max_tweets_per_profile, 1000);
    assert!(config.models.mock_responses);
    Ok(())
}

#[test]
fn saved_config_round_trips() -> Result<()> {
    let _harness = IntegrationHarness::new();
    let mut config = AppConfig::default();
    config.curation.curated_limit = 25;
    config.models.local_model_url = "http://localhost:5000".into();
    save(&config)?;

    assert!(config_file_path()?.exists());
    let restored = load_or_default()?;
    assert_eq!(restored.curation.curated_limit, 25);
    assert_eq!(restored.models.local_model_url, "http://localhost:5000");
    // Untouched sections keep their defaults.
    assert_eq!(restored.ingestion.chunk_parallelism, 4);
    Ok(())
}

#[test]
fn partial_config_file_fills_in_defaults() -> Result<()> {
    let harness = IntegrationHarness::new();
    let path = config_file_path()?;
    std::fs::create_dir_all(path.parent().unwrap())?;
    std::fs::write(&path, "[curation]\ncurated_limit = 10\n")?;

    let config = load_or_default()?;
    assert_eq!(config.curation.curated_limit, 10);
    assert_eq!(config.curation.favorite_weight, 1.0);
    assert!(config.models.mock_responses);
    drop(harness);
    Ok(())
}
