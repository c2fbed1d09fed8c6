//! Table rendering for catalog listings.

use catalog_core::{age, category, discounted_price, release_status};
use catalog_types::{Edition, StoredBook};
use chrono::Local;

/// Print records as a table, derived columns included.
///
/// The position column is the index other commands accept.
pub fn print_books(books: &[StoredBook], discount_percent: f64) {
    if books.is_empty() {
        println!("No records.");
        return;
    }

    let today = Local::now().date_naive();

    println!(
        "{:<4} {:<28} {:<18} {:<12} {:<11} {:<11} {:>4}  {:<12} {:<4} {:>9} {:<8}",
        "#",
        "Title",
        "Author",
        "ISBN",
        "Published",
        "Genre",
        "Age",
        "Category",
        "Rel",
        "Price",
        "Edition",
    );

    for (index, book) in books.iter().enumerate() {
        let record = &book.record;
        let price = match discounted_price(record.price, discount_percent) {
            Some(discounted) => format!("{:.2}", discounted),
            None => "-".to_string(),
        };
        let edition = match &record.edition {
            Edition::Base => "-",
            Edition::EBook { .. } => "e-book",
            Edition::Printed { .. } => "print",
        };
        println!(
            "{:<4} {:<28} {:<18} {:<12} {:<11} {:<11} {:>4}  {:<12} {:<4} {:>9} {:<8}",
            index,
            record.title,
            record.author,
            record.isbn,
            record.pub_date.to_string(),
            record.genre,
            age(record.pub_date, today),
            category(&record.genre).to_string(),
            release_status(record.pub_date, today).to_string(),
            price,
            edition,
        );
    }
}
