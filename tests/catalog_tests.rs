//! Catalog State Tests
//!
//! Exercises the shared catalog state through its public interface:
//! favorite toggling, filter bookkeeping, and per-book visibility.

use std::collections::HashMap;

use book_haven_frontend::components::catalog::CatalogState;
use book_haven_frontend::data::{book_collection, Book};
use book_haven_frontend::services::catalog_service::filter_keys;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_book(id: &str, rating: f64, details: &[(&str, bool)]) -> Book {
    Book {
        id: id.to_string(),
        name: format!("Book {}", id),
        price: 25.0,
        rating,
        image: format!("images/covers/book-{}.jpg", id),
        details: details
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<HashMap<_, _>>(),
    }
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

// ============================================================================
// Favoriting Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_favorite_toggle_adds_then_removes() {
    with_owner(|| {
        let state = CatalogState::new(vec![sample_book("1", 7.0, &[])]);

        assert!(!state.is_favorite("1"));
        assert!(state.toggle_favorite("1"));
        assert!(state.is_favorite("1"));
        assert!(!state.toggle_favorite("1"));
        assert!(!state.is_favorite("1"));
        assert!(state.favorites.with_untracked(|set| set.is_empty()));
    });
}

#[wasm_bindgen_test]
fn test_favorites_track_independent_ids() {
    with_owner(|| {
        let state = CatalogState::new(vec![
            sample_book("1", 7.0, &[]),
            sample_book("2", 8.5, &[]),
        ]);

        state.toggle_favorite("1");
        state.toggle_favorite("2");
        state.toggle_favorite("1");

        assert!(!state.is_favorite("1"));
        assert!(state.is_favorite("2"));
    });
}

// ============================================================================
// Filtering Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_check_uncheck_restores_prior_visibility() {
    with_owner(|| {
        let book = sample_book("1", 7.0, &[("adults", false), ("nonFiction", true)]);
        let state = CatalogState::new(vec![book.clone()]);

        assert!(state.is_visible(&book));

        state.set_filter("adults", true);
        assert!(!state.is_visible(&book));

        state.set_filter("adults", false);
        assert!(state.is_visible(&book));
        assert!(state.active_filters.with_untracked(|set| set.is_empty()));
    });
}

#[wasm_bindgen_test]
fn test_book_must_satisfy_every_active_filter() {
    with_owner(|| {
        let book = sample_book("1", 7.0, &[("fantasy", true), ("hardcover", false)]);
        let state = CatalogState::new(vec![book.clone()]);

        state.set_filter("fantasy", true);
        assert!(state.is_visible(&book));

        state.set_filter("hardcover", true);
        assert!(!state.is_visible(&book));
    });
}

#[wasm_bindgen_test]
fn test_repeated_checkbox_state_is_idempotent() {
    with_owner(|| {
        let state = CatalogState::new(Vec::new());

        state.set_filter("adults", true);
        state.set_filter("adults", true);
        assert_eq!(state.active_filters.with_untracked(|set| set.len()), 1);
    });
}

// ============================================================================
// Embedded Collection Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_embedded_collection_loads() {
    let books = book_collection();
    assert!(!books.is_empty());
    assert_eq!(filter_keys(&books), vec!["adults", "nonFiction"]);
}
