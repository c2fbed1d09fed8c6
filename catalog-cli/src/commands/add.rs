//! Add a new record.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};
use catalog_core::BookDraft;

use super::EditionFlags;

/// Arguments for the add command.
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Title
    #[arg(long)]
    pub title: String,

    /// Author
    #[arg(long)]
    pub author: String,

    /// ISBN (digits only)
    #[arg(long)]
    pub isbn: String,

    /// Publication date, YYYY-MM-DD
    #[arg(long = "pubdate")]
    pub pub_date: String,

    /// Genre
    #[arg(long)]
    pub genre: String,

    /// Price
    #[arg(long)]
    pub price: Option<f64>,

    #[command(flatten)]
    pub edition: EditionFlags,
}

/// Run the add command.
pub async fn run<S: RemoteStore>(client: &CatalogClient<S>, args: AddArgs) -> Result<()> {
    let mut draft = BookDraft::new(
        args.title,
        args.author,
        args.isbn,
        args.pub_date,
        args.genre,
    );
    if let Some(price) = args.price {
        draft = draft.with_price(price);
    }
    if let Some(edition) = args.edition.to_edition()? {
        draft = draft.with_edition(edition);
    }

    let stored = client.submit(&draft).await?;
    println!("Added \"{}\" (id {})", stored.record.title, stored.id);
    Ok(())
}
