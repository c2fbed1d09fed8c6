//! Edit the record at a catalog position.
//!
//! Fetches the catalog, opens an edit session on the targeted record (the
//! CLI's "form population"), overlays whichever flags were given on the
//! current values, and submits.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};
use catalog_core::BookDraft;

use super::EditionFlags;

/// Arguments for the update command.
#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Catalog position, as shown by `list`
    pub index: usize,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New author
    #[arg(long)]
    pub author: Option<String>,

    /// New ISBN (digits only)
    #[arg(long)]
    pub isbn: Option<String>,

    /// New publication date, YYYY-MM-DD
    #[arg(long = "pubdate")]
    pub pub_date: Option<String>,

    /// New genre
    #[arg(long)]
    pub genre: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<f64>,

    #[command(flatten)]
    pub edition: EditionFlags,
}

/// Run the update command.
pub async fn run<S: RemoteStore>(client: &CatalogClient<S>, args: UpdateArgs) -> Result<()> {
    client.refresh().await?;
    let current = client.begin_edit(args.index).await?;
    let record = current.record;

    let draft = BookDraft {
        title: args.title.unwrap_or(record.title),
        author: args.author.unwrap_or(record.author),
        isbn: args.isbn.unwrap_or(record.isbn),
        pub_date: args
            .pub_date
            .unwrap_or_else(|| record.pub_date.to_string()),
        genre: args.genre.unwrap_or(record.genre),
        price: args.price.or(record.price),
        edition: args.edition.to_edition()?.unwrap_or(record.edition),
    };

    let updated = client.submit(&draft).await?;
    println!("Updated \"{}\" (id {})", updated.record.title, updated.id);
    Ok(())
}
