mod commands;
mod output;
mod prompt;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use itchmeta_lib::config::ENV_CONFIG_PATH;
use itchmeta_lib::Settings;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "itchmeta")]
#[command(about = "Harvest game metadata from itch.io pages")]
struct Cli {
    /// Output format: table, json, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Settings file (TOML); defaults to $ITCHMETA_CONFIG when set
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search itch.io and list matching games
    Search(commands::search::SearchArgs),
    /// Extract metadata from one game page
    Extract(commands::extract::ExtractArgs),
    /// Resolve a game from what you know about it and extract its metadata
    Lookup(commands::lookup::LookupArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("itchmeta=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        Commands::Search(args) => commands::search::run(args, &settings, &format).await?,
        Commands::Extract(args) => commands::extract::run(args, &format).await?,
        Commands::Lookup(args) => commands::lookup::run(args, settings, &format).await?,
    }

    Ok(())
}

/// File from `--config` or `$ITCHMETA_CONFIG` (defaults when neither is
/// set), then `ITCHMETA_*` environment overrides.
fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from));
    let settings = match path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    }
    .with_env_overrides();
    tracing::debug!("Settings: {:?}", settings);
    Ok(settings)
}
