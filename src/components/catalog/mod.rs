//! Catalog Module
//!
//! Book catalog browser: renders the embedded collection once, lets the user
//! mark favorites with a double-click on a cover, and narrows the visible
//! list through filter checkboxes.
//!
//! # Components
//! - `Catalog` - Main catalog page with header stats, filters and book grid
//! - `BookCard` - Single book tile with cover, rating bar and price
//! - `FilterPanel` - Checkbox form driving the visibility scan

mod book_card;
mod filter_panel;

pub use book_card::BookCard;
pub use filter_panel::FilterPanel;

use leptos::prelude::*;
use std::collections::HashSet;

use crate::components::design_system::{Badge, BadgeVariant};
use crate::data::{book_collection, Book};
use crate::services::catalog_service::{satisfies_filters, set_membership, toggle_membership};

// ============================================================================
// Catalog State Context
// ============================================================================

/// Shared catalog state provided to child components
#[derive(Clone)]
pub struct CatalogState {
    /// Static collection, loaded once and never mutated afterwards
    pub books: RwSignal<Vec<Book>>,
    /// Ids of books the user marked favorite
    pub favorites: RwSignal<HashSet<String>>,
    /// Filter keys currently checked
    pub active_filters: RwSignal<HashSet<String>>,
}

impl CatalogState {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwSignal::new(books),
            favorites: RwSignal::new(HashSet::new()),
            active_filters: RwSignal::new(HashSet::new()),
        }
    }

    /// Flip the favorite marker for a book id; returns the new state.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut now_favorite = false;
        self.favorites
            .update(|set| now_favorite = toggle_membership(set, id));
        now_favorite
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.with(|set| set.contains(id))
    }

    /// Apply a checkbox change to the active filter set.
    pub fn set_filter(&self, key: &str, active: bool) {
        self.active_filters
            .update(|set| set_membership(set, key, active));
    }

    /// Visibility of a single book under the current filters.
    pub fn is_visible(&self, book: &Book) -> bool {
        self.active_filters
            .with(|active| satisfies_filters(&book.details, active))
    }
}

/// Get catalog state from context
pub fn use_catalog_state() -> CatalogState {
    expect_context::<CatalogState>()
}

// ============================================================================
// Main Catalog Component
// ============================================================================

/// Catalog page component
#[component]
pub fn Catalog() -> impl IntoView {
    // Provide shared state
    let state = CatalogState::new(book_collection());
    provide_context(state.clone());

    log::info!(
        "Catalog initialized with {} books",
        state.books.with_untracked(|b| b.len())
    );

    let books = state.books;
    let favorites = state.favorites;
    let active_filters = state.active_filters;

    let favorite_count = move || favorites.with(|set| set.len());
    let visible_count = move || {
        books.with_untracked(|books| {
            active_filters.with(|active| {
                books
                    .iter()
                    .filter(|book| satisfies_filters(&book.details, active))
                    .count()
            })
        })
    };

    // The grid renders exactly once; favoriting and filtering only toggle
    // classes on the rendered cards.
    let cards = books
        .get_untracked()
        .into_iter()
        .map(|book| view! { <BookCard book=book /> })
        .collect_view();

    view! {
        <div class="min-h-screen bg-stone-100 text-stone-900">
            <header class="px-6 py-4 bg-white border-b border-stone-200 flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Book Haven"</h1>
                <div class="flex items-center gap-2">
                    <Badge variant=BadgeVariant::Info>
                        {move || format!("{} shown", visible_count())}
                    </Badge>
                    <Badge variant=BadgeVariant::Danger>
                        {move || format!("{} favorites", favorite_count())}
                    </Badge>
                </div>
            </header>

            <div class="max-w-5xl mx-auto p-6 flex gap-6 items-start">
                <aside class="w-56 flex-shrink-0">
                    <FilterPanel />
                </aside>

                <section class="books-list flex-1 grid grid-cols-2 md:grid-cols-3 gap-4">
                    {cards}
                </section>
            </div>
        </div>
    }
}
