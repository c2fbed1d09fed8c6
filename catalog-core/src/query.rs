//! Search and sort over the catalog.
//!
//! Search is read-only: it borrows matching records without touching the
//! underlying order. Sorting reorders a slice in place; the sort is stable
//! so repeated sorts are deterministic.

use catalog_types::StoredBook;
use std::cmp::Ordering;

/// Direction for title sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// A before Z.
    Ascending,
    /// Z before A.
    Descending,
}

/// Case-insensitive substring match against title or author.
///
/// The empty query matches every record.
pub fn matches(book: &StoredBook, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    book.record.title.to_lowercase().contains(&query)
        || book.record.author.to_lowercase().contains(&query)
}

/// Borrow the records matching `query`, preserving catalog order.
pub fn search<'a>(books: &'a [StoredBook], query: &str) -> Vec<&'a StoredBook> {
    books.iter().filter(|book| matches(book, query)).collect()
}

/// Sort records in place by title.
///
/// Stable, so records with equal titles keep their relative order and
/// sorting twice yields the same sequence as sorting once.
pub fn sort_by_title(books: &mut [StoredBook], order: SortOrder) {
    books.sort_by(|a, b| {
        let ordering = title_cmp(&a.record.title, &b.record.title);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Title comparison: case-insensitive first, raw byte order as tiebreak.
///
/// Std has no locale collation; this keeps "apple" next to "Apple" while
/// staying deterministic across platforms.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::{BookId, BookRecord};

    fn book(id: &str, title: &str, author: &str) -> StoredBook {
        StoredBook::new(
            BookId::new(id),
            BookRecord::new(
                title,
                author,
                "123",
                "1990-01-01".parse().unwrap(),
                "sci-fi",
            ),
        )
    }

    fn shelf() -> Vec<StoredBook> {
        vec![
            book("1", "Dune", "Herbert"),
            book("2", "Hyperion", "Simmons"),
            book("3", "a Memory Called Empire", "Martine"),
        ]
    }

    // ===========================================
    // Search
    // ===========================================

    #[test]
    fn empty_query_matches_everything_in_order() {
        let books = shelf();
        let found = search(&books, "");
        assert_eq!(found.len(), 3);
        assert_eq!(found[0].id, BookId::new("1"));
        assert_eq!(found[2].id, BookId::new("3"));
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let books = shelf();
        assert_eq!(search(&books, "   ").len(), 3);
    }

    #[test]
    fn query_matches_title_substring() {
        let books = shelf();
        let found = search(&books, "peri");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.title, "Hyperion");
    }

    #[test]
    fn query_matches_author_substring() {
        let books = shelf();
        let found = search(&books, "herb");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].record.title, "Dune");
    }

    #[test]
    fn query_is_case_insensitive() {
        let books = shelf();
        assert_eq!(search(&books, "DUNE").len(), 1);
        assert_eq!(search(&books, "martine").len(), 1);
    }

    #[test]
    fn unmatched_query_returns_empty() {
        let books = shelf();
        assert!(search(&books, "zzzz").is_empty());
    }

    #[test]
    fn search_does_not_reorder() {
        let books = shelf();
        let before: Vec<_> = books.iter().map(|b| b.id.clone()).collect();
        let _ = search(&books, "e");
        let after: Vec<_> = books.iter().map(|b| b.id.clone()).collect();
        assert_eq!(before, after);
    }

    // ===========================================
    // Sort
    // ===========================================

    #[test]
    fn ascending_sort_ignores_case() {
        let mut books = shelf();
        sort_by_title(&mut books, SortOrder::Ascending);
        let titles: Vec<_> = books.iter().map(|b| b.record.title.as_str()).collect();
        assert_eq!(titles, vec!["a Memory Called Empire", "Dune", "Hyperion"]);
    }

    #[test]
    fn descending_sort_reverses() {
        let mut books = shelf();
        sort_by_title(&mut books, SortOrder::Descending);
        let titles: Vec<_> = books.iter().map(|b| b.record.title.as_str()).collect();
        assert_eq!(titles, vec!["Hyperion", "Dune", "a Memory Called Empire"]);
    }

    #[test]
    fn sorting_twice_equals_sorting_once() {
        let mut once = shelf();
        sort_by_title(&mut once, SortOrder::Ascending);
        let mut twice = once.clone();
        sort_by_title(&mut twice, SortOrder::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_titles_keep_relative_order() {
        let mut books = vec![
            book("1", "Dune", "Herbert"),
            book("2", "dune", "Anderson"),
            book("3", "Dune", "Villeneuve"),
        ];
        sort_by_title(&mut books, SortOrder::Ascending);
        // Case-insensitively equal; the case-sensitive tiebreak puts the
        // capitalized pair first and the stable sort keeps 1 before 3.
        let ids: Vec<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }
}
