use leptos::prelude::*;

use super::use_catalog_state;
use crate::components::design_system::{Card, CardBody, CardHeader};
use crate::services::catalog_service::{filter_keys, filter_label};

/// Checkbox form for the catalog filters.
///
/// Checking a box requires the matching detail flag on every visible book;
/// unchecking releases the requirement. The set of checkboxes is derived
/// from the detail keys present in the collection.
#[component]
pub fn FilterPanel() -> impl IntoView {
    let state = use_catalog_state();
    let active_filters = state.active_filters;
    let keys = state.books.with_untracked(|books| filter_keys(books));

    view! {
        <Card>
            <CardHeader>
                <h3 class="font-medium">"Filters"</h3>
            </CardHeader>
            <CardBody>
                <form class="filters space-y-2" on:submit=move |evt| evt.prevent_default()>
                    {keys
                        .into_iter()
                        .map(|key| {
                            let label = filter_label(&key);
                            let checked = {
                                let key = key.clone();
                                move || active_filters.with(|set| set.contains(&key))
                            };
                            let on_change = {
                                let key = key.clone();
                                let state = state.clone();
                                move |evt: web_sys::Event| {
                                    let active = event_target_checked(&evt);
                                    state.set_filter(&key, active);
                                }
                            };

                            view! {
                                <label class="flex items-center gap-2 text-sm cursor-pointer">
                                    <input
                                        type="checkbox"
                                        class="w-4 h-4 rounded border-stone-300"
                                        name="filter"
                                        value=key.clone()
                                        prop:checked=checked
                                        on:change=on_change
                                    />
                                    <span>{label}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </form>
            </CardBody>
        </Card>
    }
}
