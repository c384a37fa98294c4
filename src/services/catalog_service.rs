//! Catalog Service
//!
//! Pure bookkeeping for the book catalog: rating classification, rating bar
//! geometry, filter visibility, and set membership helpers. Nothing in here
//! touches signals or the DOM, so it all runs under native `cargo test`.

use std::collections::{HashMap, HashSet};

use crate::data::Book;

/// Display tier of a book rating, used to pick the rating bar gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    /// Below 6
    Low,
    /// Above 6 up to 8
    Solid,
    /// Above 8 up to 9
    High,
    /// Everything else: above 9, and exactly 6
    Top,
}

impl RatingTier {
    /// Classify a 0-10 rating into a display tier.
    ///
    /// Exactly 6 matches neither the `< 6` nor the `> 6` arm and falls
    /// through to `Top`. Long-standing shop behavior, keep as is.
    pub fn from_rating(rating: f64) -> Self {
        if rating < 6.0 {
            RatingTier::Low
        } else if rating > 6.0 && rating <= 8.0 {
            RatingTier::Solid
        } else if rating > 8.0 && rating <= 9.0 {
            RatingTier::High
        } else {
            RatingTier::Top
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingTier::Low => "low",
            RatingTier::Solid => "solid",
            RatingTier::High => "high",
            RatingTier::Top => "top",
        }
    }

    /// CSS background for the rating bar fill
    pub fn gradient(&self) -> &'static str {
        match self {
            RatingTier::Low => "linear-gradient(to bottom, #fefcea 0%, #f1da36 100%)",
            RatingTier::Solid => "linear-gradient(to bottom, #b4df5b 0%, #b4df5b 100%)",
            RatingTier::High => "linear-gradient(to bottom, #299a0b 0%, #299a0b 100%)",
            RatingTier::Top => "linear-gradient(to bottom, #ff0084 0%, #ff0084 100%)",
        }
    }
}

/// Width of the rating bar fill as a percentage. Not clamped, so ratings
/// outside 0-10 produce out-of-range widths.
pub fn rating_width(rating: f64) -> f64 {
    rating * 10.0
}

/// A book stays visible only while every active filter key is truthy in its
/// details map. A key the book does not carry counts as unsatisfied.
pub fn satisfies_filters(details: &HashMap<String, bool>, active: &HashSet<String>) -> bool {
    active.iter().all(|key| details.get(key).copied().unwrap_or(false))
}

/// Flip `id` in `set`; returns true when the id is present afterwards.
pub fn toggle_membership(set: &mut HashSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

/// Insert or remove `key` according to `active`. Re-applying the same state
/// is a no-op.
pub fn set_membership(set: &mut HashSet<String>, key: &str, active: bool) {
    if active {
        set.insert(key.to_string());
    } else {
        set.remove(key);
    }
}

/// Distinct filter keys across a collection, sorted for a stable checkbox order
pub fn filter_keys(books: &[Book]) -> Vec<String> {
    let mut keys: Vec<String> = books
        .iter()
        .flat_map(|book| book.details.keys().cloned())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    keys.sort();
    keys
}

/// Human-readable label for a filter checkbox
pub fn filter_label(key: &str) -> String {
    match key {
        "adults" => "For adults".to_string(),
        "nonFiction" => "Non-fiction".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                None => String::new(),
            }
        }
    }
}
