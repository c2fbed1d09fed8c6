//! Case-insensitive search over titles and authors.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};

use super::render::print_books;
use crate::config::StoreConfig;

/// Run the search command.
pub async fn run<S: RemoteStore>(
    client: &CatalogClient<S>,
    query: &str,
    config: &StoreConfig,
) -> Result<()> {
    client.refresh().await?;
    let found = client.search(query).await;
    let count = found.len();
    print_books(&found, config.discount_percent);
    println!();
    println!("{} match(es).", count);
    Ok(())
}
