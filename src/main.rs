mod cli;
mod config;
mod error;
mod fetcher;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{resolve_probe_id, Cli};
use crate::config::{load_config, Settings};
use crate::fetcher::AtlasClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();

    // Config is loaded before the flags so the fallback is known up front.
    let config = match load_config(&settings.config) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(
                "missing or unreadable config.toml as {}: {}",
                settings.config, e
            );
            None
        }
    };

    let cli = Cli::parse();

    let id = match resolve_probe_id(&cli.id, config.as_ref()) {
        Ok(id) => id,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = AtlasClient::new(&settings.api_url)?;
    info!("Querying probe '{}' at {}", id, settings.api_url);

    let answer = match client.fetch_probe(&id).await {
        Ok(answer) => answer,
        Err(e) => {
            error!("can not fetch probe '{}': {}", id, e);
            std::process::exit(1);
        }
    };

    println!("{}", report::render(&answer));
    Ok(())
}
