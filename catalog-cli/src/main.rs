//! # shelfmark
//!
//! CLI for the Shelfmark book catalog.
//!
//! ## Commands
//!
//! - `init`: Write the store configuration
//! - `list`: Fetch and render the catalog
//! - `add`: Add a new record
//! - `update`: Edit a record by catalog position
//! - `remove`: Delete a record by catalog position
//! - `search`: Case-insensitive search over titles and authors
//! - `sort`: Sort the catalog by title
//!
//! ## Example
//!
//! ```bash
//! # Point the CLI at the remote store
//! shelfmark init --store-url http://localhost:3000
//!
//! # Add a record
//! shelfmark add --title Dune --author Herbert --isbn 123 \
//!     --pubdate 1965-01-01 --genre sci-fi
//!
//! # Render the catalog with its derived columns
//! shelfmark list
//!
//! # Exercise the flaky demo channel
//! shelfmark --flaky remove 0
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use catalog_client::{CatalogClient, FlakyStore, HttpStore, RandomFaults, RemoteStore};
use commands::{add, init, list, remove, search, sort, update};
use config::StoreConfig;

/// CLI for the Shelfmark book catalog.
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Data directory for the store configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the remote store URL for this invocation
    #[arg(long, global = true)]
    store_url: Option<String>,

    /// Layer the simulated unreliable channel over the store (for demos)
    #[arg(long, global = true)]
    flaky: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the store configuration
    Init(init::InitArgs),

    /// Fetch and render the catalog
    List,

    /// Add a new record
    Add(add::AddArgs),

    /// Edit the record at a catalog position
    Update(update::UpdateArgs),

    /// Delete the record at a catalog position
    Remove {
        /// Catalog position, as shown by `list`
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Case-insensitive search over titles and authors
    Search {
        /// Substring to look for
        query: String,
    },

    /// Sort the catalog by title
    Sort {
        /// Z before A
        #[arg(long)]
        desc: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shelfmark=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    // Determine data directory
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir)
        .await
        .context("Failed to create data directory")?;

    match cli.command {
        // Init only touches the config file; no client needed.
        Commands::Init(args) => init::run(&data_dir, args).await,
        command => {
            let mut config = StoreConfig::load_or_default(&data_dir).await?;
            if let Some(url) = cli.store_url {
                config.store_url = url;
            }

            let store = HttpStore::new(&config.store_url);
            if cli.flaky || config.flaky.enabled {
                let store = FlakyStore::new(store)
                    .with_policy(RandomFaults::new(config.flaky.probability))
                    .with_delay(Duration::from_millis(config.flaky.delay_ms));
                dispatch(CatalogClient::new(store), command, &config).await
            } else {
                dispatch(CatalogClient::new(store), command, &config).await
            }
        }
    }
}

/// Run a catalog command against whichever store configuration was built.
async fn dispatch<S: RemoteStore>(
    client: CatalogClient<S>,
    command: Commands,
    config: &StoreConfig,
) -> Result<()> {
    match command {
        Commands::Init(_) => unreachable!("init is handled before a client is built"),
        Commands::List => list::run(&client, config).await,
        Commands::Add(args) => add::run(&client, args).await,
        Commands::Update(args) => update::run(&client, args).await,
        Commands::Remove { index, yes } => remove::run(&client, index, yes).await,
        Commands::Search { query } => search::run(&client, &query, config).await,
        Commands::Sort { desc } => sort::run(&client, desc, config).await,
    }
}

/// Get the default data directory for shelfmark.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("dev", "shelfmark", "shelfmark")
        .context("Could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
