use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use personalens::curation::{curate, save_curated};
use personalens::ingestion::{load_dump, scan_raw_dir};
use personalens::profiles::{extract_profiles, save_profiles};
use personalens::workspace::Workspace;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let workspace = Workspace::new()?;

    let dumps: Vec<PathBuf> = match args.input {
        Some(path) => vec![path],
        None => {
            let found = scan_raw_dir(&workspace.paths)?;
            if found.is_empty() {
                anyhow::bail!(
                    "No dump files found under {:?}; pass --input <file>",
                    workspace.paths.raw_dir
                );
            }
            found
        }
    };

    for dump in dumps {
        println!("Loading tweets from {}...", dump.display());
        let load = load_dump(&dump)?;
        println!(
            "Parsed {}/{} fragments, {} tweets ({} issues)",
            load.summary.parsed_fragments,
            load.summary.fragments,
            load.summary.tweets,
            load.summary.issues.len()
        );
        for issue in &load.summary.issues {
            println!(
                "  fragment {}: {:?} ({})",
                issue.fragment_index, issue.reason, issue.message
            );
        }
        if load.tweets.is_empty() {
            println!("No tweets were loaded from {}, skipping.", dump.display());
            continue;
        }

        let mut profiles = extract_profiles(&load.tweets);
        if let Some(username) = &args.username {
            profiles.retain(|p| p.username.eq_ignore_ascii_case(username));
        }
        if profiles.is_empty() {
            println!("No profiles extracted from {}.", dump.display());
            continue;
        }

        let written = save_profiles(&workspace, &profiles)?;
        for profile in &profiles {
            let curated = curate(profile, &workspace.config.curation);
            save_curated(&workspace, &curated)?;
            println!(
                "@{}: {} tweets processed, {} curated",
                profile.username,
                profile.tweet_count(),
                curated.metadata.selected
            );
        }
        println!("Saved {} profile file(s).", written.len());
    }

    Ok(())
}

struct CliArgs {
    input: Option<PathBuf>,
    username: Option<String>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut input = None;
        let mut username = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--input" => {
                    let value = args.next().context("Expected a path after --input")?;
                    input = Some(PathBuf::from(value));
                }
                "--username" => {
                    let value = args.next().context("Expected a name after --username")?;
                    username = Some(value);
                }
                "--help" | "-h" => {
                    println!(
                        "Usage: process_tweets [--input <dump file>] [--username <name>]\n\
                         Without --input, all dump files under the workspace raw dir are processed."
                    );
                    std::process::exit(0);
                }
                other => anyhow::bail!("Unknown argument: {other}"),
            }
        }
        Ok(Self { input, username })
    }
}
