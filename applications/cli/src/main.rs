/// Pulpit - browse and play audio messages from the terminal
use anyhow::Context;
use clap::{Parser, Subcommand};
use pulpit_catalog::CatalogClient;
use pulpit_core::{ItemId, PlayableItem};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;
mod engine;
mod render;

use config::Settings;

#[derive(Parser)]
#[command(name = "pulpit")]
#[command(about = "Browse and play audio messages", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./pulpit.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog server URL, overriding the settings file
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every message in the catalog
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one message
    Show {
        /// Message id as shown by `list`
        id: ItemId,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive player against a simulated audio engine
    Console {
        /// Simulated length of every message, in seconds
        #[arg(long, default_value_t = 180.0)]
        duration: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulpit=info,pulpit_playback=info,pulpit_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Loading settings")?;
    if let Some(base_url) = cli.base_url {
        settings.catalog.base_url = base_url;
    }
    settings.validate()?;

    let client = CatalogClient::new(settings.catalog.clone())?;

    match cli.command {
        Commands::List { json } => {
            let items = client.load_catalog().await;
            list(&items, json)?;
        }
        Commands::Show { id, json } => {
            let items = client.load_catalog().await;
            show(&items, id, json)?;
        }
        Commands::Console { duration } => {
            anyhow::ensure!(
                duration.is_finite() && duration > 0.0,
                "--duration must be a positive number of seconds"
            );
            let items = client.load_catalog().await;
            console::run(items, settings.playback, duration).await?;
        }
    }

    Ok(())
}

fn list(items: &[PlayableItem], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No messages available");
        return Ok(());
    }

    for item in items {
        println!("{}", render::catalog_line(item));
    }
    Ok(())
}

fn show(items: &[PlayableItem], id: ItemId, json: bool) -> anyhow::Result<()> {
    let item = items
        .iter()
        .find(|item| item.id == id)
        .with_context(|| format!("No message with id {}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", render::item_details(item));
    }
    Ok(())
}
