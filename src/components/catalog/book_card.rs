use leptos::ev;
use leptos::prelude::*;

use super::use_catalog_state;
use crate::components::design_system::{Badge, BadgeVariant};
use crate::data::Book;
use crate::services::catalog_service::{rating_width, satisfies_filters, RatingTier};

/// Single book tile.
///
/// Double-clicking the cover toggles the favorite marker. Only the cover
/// element carries the handler, so double-clicks on the name or price are
/// no-ops. Active filters hide the card through the `hidden` class on the
/// cover, matching ids via the `data-id` attribute.
#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let state = use_catalog_state();
    let favorites = state.favorites;
    let active_filters = state.active_filters;

    let tier = RatingTier::from_rating(book.rating);
    let width = rating_width(book.rating);

    let is_favorite = {
        let id = book.id.clone();
        move || favorites.with(|set| set.contains(&id))
    };

    let is_hidden = {
        let details = book.details.clone();
        move || active_filters.with(|active| !satisfies_filters(&details, active))
    };

    let on_dblclick = {
        let id = book.id.clone();
        move |evt: ev::MouseEvent| {
            evt.prevent_default();
            let now_favorite = state.toggle_favorite(&id);
            log::debug!("book {} favorite: {}", id, now_favorite);
        }
    };

    view! {
        <article class="book">
            <a
                href="#"
                class="book__image block relative rounded-lg overflow-hidden bg-white border border-stone-200"
                class:favorite=is_favorite
                class:hidden=is_hidden
                data-id=book.id.clone()
                on:dblclick=on_dblclick
            >
                <img class="w-full" src=book.image.clone() alt=book.name.clone() />
                <figure class="book__rating m-0 h-2 bg-stone-200">
                    <div
                        class="book__rating__fill h-2"
                        style:width=format!("{}%", width)
                        style:background=tier.gradient()
                    ></div>
                </figure>
            </a>

            <div class="book__info mt-2">
                <h2 class="book__name text-sm font-medium truncate">{book.name.clone()}</h2>
                <div class="flex items-center justify-between mt-1">
                    <Badge variant=BadgeVariant::Info>{format!("{:.1} / 10", book.rating)}</Badge>
                    <span class="book__price text-sm text-stone-600">
                        {format!("${:.2}", book.price)}
                    </span>
                </div>
            </div>
        </article>
    }
}
