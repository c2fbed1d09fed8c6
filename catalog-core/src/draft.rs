//! Draft records: raw form values and their validation.
//!
//! A [`BookDraft`] holds what the operator typed, unchecked. Validation is
//! the only way to turn a draft into a [`BookRecord`], and it runs before
//! any network call: a draft that fails validation never reaches the
//! gateway.

use catalog_types::{BookRecord, Edition, ValidationError};
use chrono::NaiveDate;

/// Raw form values for a book, as typed.
///
/// Text fields are kept as strings (the date included) because that is
/// what a form hands over; [`BookDraft::validate`] does the parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookDraft {
    /// Title field.
    pub title: String,
    /// Author field.
    pub author: String,
    /// ISBN field.
    pub isbn: String,
    /// Publication date field, expected as `YYYY-MM-DD`.
    pub pub_date: String,
    /// Genre field.
    pub genre: String,
    /// Price field, when the priced variant is in use.
    pub price: Option<f64>,
    /// The selected variant and its extra fields.
    pub edition: Edition,
}

impl BookDraft {
    /// Create a draft with the required fields filled in.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        pub_date: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            pub_date: pub_date.into(),
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

    /// Validate the draft and build the record it describes.
    ///
    /// Checks, in order: every required field non-empty after trimming,
    /// ISBN digits-only, date parseable. The first failure wins.
    pub fn validate(&self) -> Result<BookRecord, ValidationError> {
        let title = require("title", &self.title)?;
        let author = require("author", &self.author)?;
        let isbn = require("isbn", &self.isbn)?;
        let pub_date = require("publication date", &self.pub_date)?;
        let genre = require("genre", &self.genre)?;

        if !isbn.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidIsbn(isbn.to_string()));
        }

        let pub_date: NaiveDate = pub_date
            .parse()
            .map_err(|_| ValidationError::InvalidDate(pub_date.to_string()))?;

        Ok(BookRecord {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            pub_date,
            genre: genre.to_string(),
            price: self.price,
            edition: self.edition.clone(),
        })
    }
}

/// Trim a field and reject it when nothing is left.
fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(name))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookDraft {
        BookDraft::new("Dune", "Herbert", "123", "1965-01-01", "sci-fi")
    }

    #[test]
    fn valid_draft_builds_a_record() {
        let record = dune().validate().unwrap();
        assert_eq!(record.title, "Dune");
        assert_eq!(record.pub_date, "1965-01-01".parse::<NaiveDate>().unwrap());
        assert_eq!(record.edition, Edition::Base);
        assert_eq!(record.price, None);
    }

    #[test]
    fn fields_are_trimmed() {
        let mut draft = dune();
        draft.title = "  Dune  ".into();
        draft.isbn = " 123 ".into();
        let record = draft.validate().unwrap();
        assert_eq!(record.title, "Dune");
        assert_eq!(record.isbn, "123");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = dune();
        draft.title = "   ".into();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn every_required_field_is_checked() {
        for field in ["title", "author", "isbn", "pub_date", "genre"] {
            let mut draft = dune();
            match field {
                "title" => draft.title.clear(),
                "author" => draft.author.clear(),
                "isbn" => draft.isbn.clear(),
                "pub_date" => draft.pub_date.clear(),
                "genre" => draft.genre.clear(),
                _ => unreachable!(),
            }
            assert!(
                matches!(draft.validate(), Err(ValidationError::MissingField(_))),
                "expected {} to be required",
                field
            );
        }
    }

    #[test]
    fn non_numeric_isbn_is_rejected() {
        let mut draft = dune();
        draft.isbn = "12a4".into();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidIsbn("12a4".into()))
        );
    }

    #[test]
    fn decimal_isbn_is_rejected() {
        // Stricter than a numeric-parse check: digits only.
        let mut draft = dune();
        draft.isbn = "12.5".into();
        assert!(matches!(
            draft.validate(),
            Err(ValidationError::InvalidIsbn(_))
        ));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut draft = dune();
        draft.pub_date = "01/01/1965".into();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::InvalidDate("01/01/1965".into()))
        );
    }

    #[test]
    fn price_and_edition_carry_through() {
        let record = dune()
            .with_price(12.5)
            .with_edition(Edition::EBook {
                file_size_mb: 1.2,
                format: "epub".into(),
            })
            .validate()
            .unwrap();
        assert_eq!(record.price, Some(12.5));
        assert!(matches!(record.edition, Edition::EBook { .. }));
    }
}
