use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use ladle::app::{App, AppEvent};
use ladle::config::Config;
use ladle::theme::ThemeVariant;
use ladle::ui;

/// Get the config directory path (~/.config/ladle/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("ladle"))
}

#[derive(Parser, Debug)]
#[command(name = "ladle", about = "Terminal client for searching a recipe index")]
struct Args {
    /// Submit this query immediately after startup
    query: Option<String>,

    /// Search service origin (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Theme to start with: dark or light (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging (RUST_LOG-controlled, silent by default)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_path = get_config_dir()?.join("config.toml");
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(endpoint) = args.endpoint {
        config.search_url = endpoint;
    }
    if let Some(theme) = args.theme {
        if ThemeVariant::from_str_name(&theme).is_none() {
            anyhow::bail!("Unknown theme '{}' (expected: dark, light)", theme);
        }
        config.theme = theme;
    }

    let mut app = App::new(&config).context("Failed to create application")?;
    tracing::info!(origin = %app.client.origin(), "Starting ladle");

    // Channel for search task outcomes
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // A positional query is submitted as if the user pressed Enter.
    if let Some(query) = args.query {
        app.query = query;
        ui::spawn_search(&mut app, &event_tx);
    }

    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
