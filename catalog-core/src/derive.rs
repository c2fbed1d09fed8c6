//! Derived display fields computed from stored record fields.
//!
//! Nothing here is persisted. Age, category, discount, and release status
//! are recomputed from the stored fields whenever a record is rendered.
//! Every function takes all of its inputs as arguments - callers supply
//! "today" - so repeated calls with the same inputs always agree.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Fixed genre categories a record's free-text genre maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// sci-fi, fantasy, horror
    Fiction,
    /// biography, history, self-help
    NonFiction,
    /// romance, drama
    Literature,
    /// thriller, mystery
    Mystery,
    /// Everything else.
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
            Category::Literature => "Literature",
            Category::Mystery => "Mystery",
            Category::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Whether a record counts as a recent release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    /// Published this year or the year before.
    New,
    /// Everything older.
    Old,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::New => write!(f, "New"),
            ReleaseStatus::Old => write!(f, "Old"),
        }
    }
}

/// Age of a record in years: `as_of` year minus publication year.
///
/// No clamping; a future publication date yields a negative age.
pub fn age(pub_date: NaiveDate, as_of: NaiveDate) -> i32 {
    as_of.year() - pub_date.year()
}

/// Map a free-text genre onto a fixed category, case-insensitively.
///
/// Total: unknown genres land in [`Category::Other`].
pub fn category(genre: &str) -> Category {
    match genre.trim().to_lowercase().as_str() {
        "sci-fi" | "fantasy" | "horror" => Category::Fiction,
        "biography" | "history" | "self-help" => Category::NonFiction,
        "romance" | "drama" => Category::Literature,
        "thriller" | "mystery" => Category::Mystery,
        _ => Category::Other,
    }
}

/// Price after deducting `percent` percent, when a price is present.
pub fn discounted_price(price: Option<f64>, percent: f64) -> Option<f64> {
    price.map(|p| p - p * percent / 100.0)
}

/// New-release flag: `New` when the record is at most one year old.
pub fn release_status(pub_date: NaiveDate, as_of: NaiveDate) -> ReleaseStatus {
    if age(pub_date, as_of) <= 1 {
        ReleaseStatus::New
    } else {
        ReleaseStatus::Old
    }
}
