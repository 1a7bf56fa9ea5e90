use std::env;

use anyhow::{Context, Result};
use personalens::curation::load_curated;
use personalens::profiles::load_profile;
use personalens::prompts::{render_all, save_prompts, STYLE_KEYS};
use personalens::workspace::Workspace;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let workspace = Workspace::new()?;

    let profile = load_profile(&workspace, &args.username)?;
    let curated = load_curated(&workspace, &args.username)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let prompts = render_all(&workspace, &profile, &curated, &args.style, &mut rng);
    let written = save_prompts(&workspace, &prompts)?;

    println!(
        "Generated {} prompt(s) for @{} in {} style:",
        written.len(),
        args.username,
        args.style
    );
    for path in written {
        println!("  {}", path.display());
    }
    Ok(())
}

struct CliArgs {
    username: String,
    style: String,
    seed: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut username = None;
        let mut style = "professional".to_string();
        let mut seed = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
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
                "--seed" => {
                    let value = args.next().context("Expected a number after --seed")?;
                    seed = Some(value.parse().context("Seed must be an integer")?);
                }
                "--help" | "-h" => {
                    println!(
                        "Usage: generate_prompts <username> [--style comedy|professional|visionary] [--seed <n>]"
                    );
                    std::process::exit(0);
                }
                other if username.is_none() && !other.starts_with('-') => {
                    username = Some(other.to_string());
                }
                other => anyhow::bail!("Unknown argument: {other}"),
            }
        }
        let username = username.context("Expected a username argument")?;
        Ok(Self {
            username,
            style,
            seed,
        })
    }
}
