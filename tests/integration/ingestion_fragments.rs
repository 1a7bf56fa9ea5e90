use super::support::{envelope, tweet, write_dump};
use super::IntegrationHarness;
use anyhow::Result;
use personalens::ingestion::{load_dump, scan_raw_dir, DumpIssueReason};

#[test]
fn concatenated_envelopes_are_all_recovered() -> Result<()> {
    let harness = IntegrationHarness::new();
    let first = envelope(&[
        tweet("alice", "1", "first tweet", 10, 2),
        tweet("alice", "2", "second tweet", 5, 1),
    ]);
    let second = envelope(&[tweet("bob", "3", "hello world", 7, 0)]);
    let dump = write_dump(harness.workspace_path(), "dump.json", &[first, second]);

    let load = load_dump(&dump)?;
    assert_eq!(load.summary.fragments, 2);
    assert_eq!(load.summary.parsed_fragments, 2);
    assert_eq!(load.tweets.len(), 3);
    assert!(load.summary.issues.is_empty());
    Ok(())
}

#[test]
fn malformed_fragment_is_skipped_not_fatal() -> Result<()> {
    let harness = IntegrationHarness::new();
    let good = envelope(&[tweet("alice", "1", "kept tweet", 3, 0)]);
    let truncated = r#"{"data": {"items": [{"id": "2", "tex"#.to_string();
    let dump = write_dump(harness.workspace_path(), "dump.json", &[good, truncated]);

    let load = load_dump(&dump)?;
    assert_eq!(load.tweets.len(), 1);
    assert_eq!(load.summary.issues.len(), 1);
    assert_eq!(load.summary.issues[0].reason, DumpIssueReason::MalformedJson);
    Ok(())
}

#[test]
fn missing_and_null_counts_default_to_zero() -> Result<()> {
    let harness = IntegrationHarness::new();
    let fragment = r#"{"data": {"items": [
        {"id": "1", "text": "no counts at all", "author_id": "a", "author_username": "a"},
        {"id": "2", "text": "null counts", "favorite_count": null, "view_count": null,
         "attached_medias_url": null, "author_id": "a", "author_username": "a"}
    ]}}"#
        .to_string();
    let dump = write_dump(harness.workspace_path(), "dump.json", &[fragment]);

    let load = load_dump(&dump)?;
    assert_eq!(load.tweets.len(), 2);
    for raw in &load.tweets {
        assert_eq!(raw.favorite_count, 0);
        assert_eq!(raw.view_count, 0);
        assert!(raw.attached_medias_url.is_empty());
    }
    Ok(())
}

#[test]
fn raw_dir_scan_finds_json_and_txt_files() -> Result<()> {
    let harness = IntegrationHarness::new();
    let workspace = harness.workspace();
    let raw = &workspace.paths.raw_dir;
    std::fs::write(raw.join("a_tweets.json"), "{}")?;
    std::fs::write(raw.join("b_tweets.txt"), "{}")?;
    std::fs::write(raw.join("notes.md"), "ignored")?;

    let found = scan_raw_dir(&workspace.paths)?;
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|path| {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        ext == "json" || ext == "txt"
    }));
    Ok(())
}
