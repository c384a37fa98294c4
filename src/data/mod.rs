//! Static Book Data Source
//!
//! The catalog ships with an embedded collection; there is no fetch layer
//! and records are never mutated after load.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Expected range 0-10; out-of-range values render out-of-range bars
    pub rating: f64,
    pub image: String,
    /// Filter key -> whether this book satisfies that category
    #[serde(default)]
    pub details: HashMap<String, bool>,
}

#[derive(Debug, Deserialize)]
struct DataSource {
    books: Vec<Book>,
}

const BOOKS_JSON: &str = include_str!("books.json");

/// Load the embedded book collection.
///
/// An unparsable payload degrades to an empty catalog instead of panicking.
pub fn book_collection() -> Vec<Book> {
    match serde_json::from_str::<DataSource>(BOOKS_JSON) {
        Ok(source) => source.books,
        Err(e) => {
            log::warn!("Failed to parse embedded book data: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_collection_is_non_empty() {
        assert!(!book_collection().is_empty());
    }

    #[test]
    fn test_collection_ids_are_unique() {
        let books = book_collection();
        let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_collection_ratings_in_expected_range() {
        for book in book_collection() {
            assert!(
                (0.0..=10.0).contains(&book.rating),
                "{} has rating {}",
                book.name,
                book.rating
            );
        }
    }

    #[test]
    fn test_every_book_carries_both_filter_keys() {
        for book in book_collection() {
            assert!(book.details.contains_key("adults"), "{}", book.name);
            assert!(book.details.contains_key("nonFiction"), "{}", book.name);
        }
    }
}
