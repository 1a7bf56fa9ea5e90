use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use personalens::pipeline::{run_pipeline, PipelineOptions};
use personalens::prompts::STYLE_KEYS;
use personalens::workspace::Workspace;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let mut workspace = Workspace::new()?;
    if args.live {
        workspace.config.models.mock_responses = false;
    }

    println!("=== PersonaLens analysis pipeline ===");
    println!("Dump: {}", args.dump.display());
    if workspace.config.models.mock_responses {
        println!("Providers: mock mode (use --live for real API calls)");
    }

    let options = PipelineOptions {
        style_key: args.style,
        username: args.username,
        prompts_only: args.prompts_only,
        sample_seed: args.seed,
    };
    let report = run_pipeline(&workspace, &args.dump, &options)?;

    println!(
        "Run {}: {} tweet(s) from {} fragment(s), {} issue(s)",
        report.run_id,
        report.dump_summary.tweets,
        report.dump_summary.fragments,
        report.dump_summary.issues.len()
    );
    for profile in &report.profiles {
        println!(
            "@{}: analyzed {}, curated {}, {} prompt file(s), {} response file(s)",
            profile.username,
            profile.tweets_analyzed,
            profile.tweets_curated,
            profile.prompt_paths.len(),
            profile.response_paths.len()
        );
    }
    println!("Analysis pipeline completed.");
    Ok(())
}

struct CliArgs {
    dump: PathBuf,
    username: Option<String>,
    style: String,
    live: bool,
    prompts_only: bool,
    seed: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut dump = None;
        let mut username = None;
        let mut style = "professional".to_string();
        let mut live = false;
        let mut prompts_only = false;
        let mut seed = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--username" => {
                    let value = args.next().context("Expected a name after --username")?;
                    username = Some(value);
                }
                "--style" => {
                    let value = args.next().context("Expected a style after --style")?;
                    if !STYLE_KEYS.contains(&value.as_str()) {
                        anyhow::bail!(
                            "Unknown style {value}; expected one of: {}",
                            STYLE_KEYS.join(", ")
                        );
                    }
                    style = value;
                }
                "--live" => live = true,
                "--prompts-only" => prompts_only = true,
                "--seed" => {
                    let value = args.next().context("Expected a number after --seed")?;
                    seed = Some(value.parse().context("Seed must be an integer")?);
                }
                "--help" | "-h" => {
                    println!(
                        "Usage: run_analysis <dump file> [--username <name>] \
                         [--style comedy|professional|visionary] [--live] [--prompts-only] [--seed <n>]"
                    );
                    std::process::exit(0);
                }
                other if dump.is_none() && !other.starts_with('-') => {
                    dump = Some(PathBuf::from(other));
                }
                other => anyhow::bail!("Unknown argument: {other}"),
            }
        }
        let dump = dump.context("Expected a dump file argument")?;
        Ok(Self {
            dump,
            username,
            style,
            live,
            prompts_only,
            seed,
        })
    }
}
