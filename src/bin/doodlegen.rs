//! CLI for doodlegen - generates the city doodle references.

use clap::Parser;
use doodlegen::{generate_doodles, GeminiProvider, SUBJECTS};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where the reference doodles are written.
const DEFAULT_OUTPUT_DIR: &str = "/srv/shiphaus.org/docs/plans/doodle-references";

#[derive(Parser)]
#[command(name = "doodlegen")]
#[command(about = "Generate hand-drawn doodle references for the nav city easter eggs")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doodlegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Missing GEMINI_API_KEY fails here, before any request goes out.
    let provider = GeminiProvider::builder().build()?;

    let mut stdout = std::io::stdout();
    generate_doodles(&provider, SUBJECTS, Path::new(DEFAULT_OUTPUT_DIR), &mut stdout).await?;

    Ok(())
}
