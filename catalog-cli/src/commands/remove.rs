//! Delete the record at a catalog position.

use anyhow::Result;
use catalog_client::{CatalogClient, RemoteStore};
use std::io::{self, Write};

/// Run the remove command.
///
/// Asks for confirmation on the terminal unless `yes` was given; a
/// declined prompt makes no store call.
pub async fn run<S: RemoteStore>(client: &CatalogClient<S>, index: usize, yes: bool) -> Result<()> {
    client.refresh().await?;

    let removed = client
        .delete(index, |book| {
            if yes {
                return true;
            }
            confirm(&format!(
                "Delete \"{}\" by {}? [y/N] ",
                book.record.title, book.record.author
            ))
        })
        .await?;

    match removed {
        Some(book) => println!("Deleted \"{}\" (id {})", book.record.title, book.id),
        None => println!("Delete cancelled."),
    }
    Ok(())
}

/// Prompt on stdout and read a yes/no answer from stdin.
fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
