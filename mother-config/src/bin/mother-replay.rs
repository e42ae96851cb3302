use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use mother_config::{
    WindowConfigSource, load_from_env, load_from_file,
    replay::{self, ReplayScript},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mother-replay",
    about = "Replay a drag script against a headless window"
)]
struct Cli {
    /// JSON drag script
    script: PathBuf,
    /// Window config file (TOML or JSON). Falls back to $MOTHER_CONFIG_PATH,
    /// $MOTHER_CONFIG_JSON, then mother.toml/mother.json
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (config, source) = match cli.config {
        Some(path) => {
            let config = load_from_file(&path)?;
            (config, WindowConfigSource::File(path))
        }
        None => load_from_env()?,
    };
    info!(?source, "window config loaded");

    let script = ReplayScript::load(&cli.script)?;
    let report = replay::run(&script, config)?;

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?)
        }
    }
    Ok(())
}
