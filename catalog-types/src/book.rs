//! The book entity and its wire representation.
//!
//! Two shapes matter here:
//!
//! - [`BookRecord`] is what the client constructs from a submitted form.
//!   It carries no identifier.
//! - [`StoredBook`] is what the remote store returns: a [`BookRecord`]
//!   plus the identifier the store assigned. Only successful gateway calls
//!   produce these, so "a cached record always has an id" holds by type.
//!
//! On the wire both are flat JSON objects. The edition is not tagged there;
//! it is recovered structurally from which extra fields are present
//! (`fileSize`/`format` for e-books, `pages`/`coverType` for printed runs).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::BookId;

/// Variant-specific fields of a book record.
///
/// A tagged union rather than a class hierarchy: the variant changes which
/// extra fields are collected and persisted, never the CRUD contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Edition {
    /// No variant-specific fields.
    #[default]
    Base,
    /// Electronic edition.
    EBook {
        /// Download size in megabytes.
        file_size_mb: f64,
        /// Container format, e.g. "epub" or "pdf".
        format: String,
    },
    /// Printed edition.
    Printed {
        /// Page count.
        pages: u32,
        /// Cover binding, e.g. "hardcover" or "paperback".
        cover: String,
    },
}

/// A book record as constructed client-side. No identifier yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireBook", into = "WireBook")]
pub struct BookRecord {
    /// Title. Non-empty.
    pub title: String,
    /// Author. Non-empty.
    pub author: String,
    /// ISBN, digits only, stored as text.
    pub isbn: String,
    /// Publication date; used for year extraction.
    pub pub_date: NaiveDate,
    /// Free-text genre, mapped case-insensitively to a fixed category.
    pub genre: String,
    /// Price, present in the priced variant only.
    pub price: Option<f64>,
    /// Variant tag plus variant-specific fields.
    pub edition: Edition,
}

impl BookRecord {
    /// Create a base-edition record with the required fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        pub_date: NaiveDate,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            pub_date,
            genre: genre.into(),
            price: None,
            edition: Edition::Base,
        }
    }

    /// Set the price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the edition.
    pub fn with_edition(mut self, edition: Edition) -> Self {
        self.edition = edition;
        self
    }
}

/// A book record the remote store has assigned an identifier to.
///
/// The store mints these on create and update; the client never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireBook", into = "WireBook")]
pub struct StoredBook {
    /// The store-assigned identifier. Immutable.
    pub id: BookId,
    /// The record fields.
    pub record: BookRecord,
}

impl StoredBook {
    /// Pair an identifier with a record.
    pub fn new(id: BookId, record: BookRecord) -> Self {
        Self { id, record }
    }
}

/// The flat JSON shape the remote store speaks.
///
/// Field names follow the store's convention (`pubdate`, camelCase extras).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<BookId>,
    title: String,
    author: String,
    isbn: String,
    pubdate: NaiveDate,
    genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    price: Option<f64>,
    #[serde(rename = "fileSize", default, skip_serializing_if = "Option::is_none")]
    file_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pages: Option<u32>,
    #[serde(rename = "coverType", default, skip_serializing_if = "Option::is_none")]
    cover_type: Option<String>,
}

impl From<WireBook> for BookRecord {
    fn from(wire: WireBook) -> Self {
        // Structural edition recovery. A lone extra field (fileSize without
        // format, say) does not identify a variant and falls back to Base.
        let edition = match (wire.file_size, wire.format, wire.pages, wire.cover_type) {
            (Some(file_size_mb), Some(format), _, _) => Edition::EBook {
                file_size_mb,
                format,
            },
            (_, _, Some(pages), Some(cover)) => Edition::Printed { pages, cover },
            _ => Edition::Base,
        };
        Self {
            title: wire.title,
            author: wire.author,
            isbn: wire.isbn,
            pub_date: wire.pubdate,
            genre: wire.genre,
            price: wire.price,
            edition,
        }
    }
}

impl From<BookRecord> for WireBook {
    fn from(record: BookRecord) -> Self {
        let mut wire = Self {
            id: None,
            title: record.title,
            author: record.author,
            isbn: record.isbn,
            pubdate: record.pub_date,
            genre: record.genre,
            price: record.price,
            file_size: None,
            format: None,
            pages: None,
            cover_type: None,
        };
        match record.edition {
            Edition::Base => {}
            Edition::EBook {
                file_size_mb,
                format,
            } => {
                wire.file_size = Some(file_size_mb);
                wire.format = Some(format);
            }
            Edition::Printed { pages, cover } => {
                wire.pages = Some(pages);
                wire.cover_type = Some(cover);
            }
        }
        wire
    }
}

impl TryFrom<WireBook> for StoredBook {
    type Error = String;

    fn try_from(wire: WireBook) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .clone()
            .ok_or_else(|| "stored record is missing its identifier".to_string())?;
        Ok(Self {
            id,
            record: BookRecord::from(wire),
        })
    }
}

impl From<StoredBook> for WireBook {
    fn from(book: StoredBook) -> Self {
        let mut wire = WireBook::from(book.record);
        wire.id = Some(book.id);
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn dune() -> BookRecord {
        BookRecord::new("Dune", "Herbert", "123", date("1965-01-01"), "sci-fi")
    }

    #[test]
    fn base_record_wire_shape() {
        let json = serde_json::to_value(dune()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Dune",
                "author": "Herbert",
                "isbn": "123",
                "pubdate": "1965-01-01",
                "genre": "sci-fi",
            })
        );
    }

    #[test]
    fn ebook_extras_on_wire() {
        let record = dune().with_edition(Edition::EBook {
            file_size_mb: 2.4,
            format: "epub".into(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fileSize"], 2.4);
        assert_eq!(json["format"], "epub");
        assert!(json.get("pages").is_none());

        let back: BookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn printed_extras_on_wire() {
        let record = dune().with_edition(Edition::Printed {
            pages: 412,
            cover: "hardcover".into(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["pages"], 412);
        assert_eq!(json["coverType"], "hardcover");

        let back: BookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn priced_record_round_trips() {
        let record = dune().with_price(9.99);
        let json = serde_json::to_string(&record).unwrap();
        let back: BookRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.price, Some(9.99));
    }

    #[test]
    fn lone_extra_field_falls_back_to_base() {
        let json = serde_json::json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "pubdate": "1965-01-01",
            "genre": "sci-fi",
            "fileSize": 2.4,
        });
        let record: BookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.edition, Edition::Base);
    }

    #[test]
    fn stored_book_requires_id() {
        let json = serde_json::json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "pubdate": "1965-01-01",
            "genre": "sci-fi",
        });
        let result: Result<StoredBook, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn stored_book_accepts_numeric_id() {
        let json = serde_json::json!({
            "id": 7,
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "pubdate": "1965-01-01",
            "genre": "sci-fi",
        });
        let book: StoredBook = serde_json::from_value(json).unwrap();
        assert_eq!(book.id, BookId::new("7"));
        assert_eq!(book.record, dune());
    }

    #[test]
    fn stored_book_serializes_id_inline() {
        let book = StoredBook::new(BookId::new("3"), dune());
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], "3");
        assert_eq!(json["title"], "Dune");
    }

    #[test]
    fn record_ignores_id_on_the_wire() {
        // A record deserialized from a stored shape simply drops the id.
        let json = serde_json::json!({
            "id": 9,
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "pubdate": "1965-01-01",
            "genre": "sci-fi",
        });
        let record: BookRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record, dune());
    }
}
