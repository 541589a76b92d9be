//! Commerce bridge CLI - run connector operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List categories under a parent, filtered by keyword
//! cbridge categories list --parent 571 --keyword camera
//!
//! # Show the whole category tree in German
//! cbridge --lang de categories tree
//!
//! # Resolve a category URL
//! cbridge categories url 575
//!
//! # Search content pages
//! cbridge content list --query shipping
//!
//! # Create a hidden content page
//! cbridge content create -n Shipping -l /shipping --hidden
//!
//! # Look up products by code
//! cbridge products get 1934793 300938
//! ```
//!
//! Results are printed to stdout as JSON. Connection settings come from the
//! environment (see `commerce_bridge_connector::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use commerce_bridge_connector::{Connector, ConnectorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::categories::CategoryAction;
use commands::content::ContentAction;
use commands::products::ProductAction;

#[derive(Parser)]
#[command(name = "cbridge")]
#[command(author, version, about = "Commerce bridge connector CLI")]
struct Cli {
    /// Language of returned labels (default: `COMMERCE_DEFAULT_LANG`)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true, env = "CBRIDGE_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Category lists, trees and URLs
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Content pages
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },
    /// Product search and lookups
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before reading RUST_LOG
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "commerce_bridge_connector=info,cbridge=info".into());

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConnectorConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    let connector = Connector::from_config(&config)?;
    let lang = cli.lang.as_deref();

    match cli.command {
        Commands::Categories { action } => {
            commands::categories::run(&connector, action, lang).await?;
        }
        Commands::Content { action } => commands::content::run(&connector, action, lang).await?,
        Commands::Products { action } => commands::products::run(&connector, action, lang).await?,
    }
    Ok(())
}
