//! Sort the catalog by title.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};

use super::render::print_books;
use crate::config::StoreConfig;

/// Run the sort command.
pub async fn run<S: RemoteStore>(
    client: &CatalogClient<S>,
    descending: bool,
    config: &StoreConfig,
) -> Result<()> {
    client.refresh().await?;
    let sorted = if descending {
        client.sort_descending().await
    } else {
        client.sort_ascending().await
    };
    print_books(&sorted, config.discount_percent);
    Ok(())
}
