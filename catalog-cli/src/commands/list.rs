//! Fetch and render the catalog.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};

use super::render::print_books;
use crate::config::StoreConfig;

/// Run the list command.
pub async fn run<S: RemoteStore>(client: &CatalogClient<S>, config: &StoreConfig) -> Result<()> {
    let count = client.refresh().await?;
    print_books(&client.books().await, config.discount_percent);
    println!();
    println!("{} record(s).", count);
    Ok(())
}
