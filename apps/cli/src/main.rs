use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_dataset, load_settings, GeminiProfileFetcher, Locale, ProfileFetcher};
use shared::domain::ProfileOutcome;
use tracing_subscriber::EnvFilter;

mod format;

#[derive(Parser, Debug)]
#[command(name = "exec-summary", about = "Executive summary directory and profile lookup")]
struct Cli {
    /// Settings file; defaults to ./exec_summary.toml or the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON file replacing the built-in category directory.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[arg(long, global = true)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories with their entry counts.
    Categories,
    /// List the people in one category.
    People { category: String },
    /// Generate one profile.
    Profile {
        name: String,
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Categories => {
            let dataset = load_dataset(cli.dataset.as_deref())?;
            print!("{}", format::categories(&dataset));
        }
        Command::People { category } => {
            let dataset = load_dataset(cli.dataset.as_deref())?;
            let Some(listing) = format::people(&dataset, &category) else {
                bail!("unknown category '{category}'");
            };
            print!("{listing}");
        }
        Command::Profile { name, json } => {
            let settings = load_settings(cli.config.as_deref())?;
            let locale = cli.locale.unwrap_or(settings.locale);
            let fetcher = GeminiProfileFetcher::from_settings(&settings)
                .context("invalid generation backend settings")?;
            let outcome = fetcher
                .fetch(&name)
                .await
                .with_context(|| format!("failed to generate profile for '{name}'"))?;

            match outcome {
                ProfileOutcome::Insufficient => println!("{}", format::insufficient_message(locale)),
                ProfileOutcome::Found(profile) if json => {
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                }
                ProfileOutcome::Found(profile) => print!("{}", format::profile(&profile)),
            }
        }
    }

    Ok(())
}
