//! Search box with live results over the navigation tree

use leptos::prelude::*;
use storefront_core::{HeaderState, NavTree};
use storefront_types::SearchResult;

/// Desktop search bar
///
/// Every keystroke re-filters the tree; clicking a result empties the box and
/// lets the browser follow the link.
#[component]
pub fn SearchBox(tree: NavTree, state: RwSignal<HeaderState>) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Search..."
                prop:value=move || state.with(|s| s.query().to_string())
                on:input=move |e| {
                    let value = event_target_value(&e);
                    state.update(|s| s.set_query(value, tree.categories()));
                }
            />
            <button class="search-button" aria-label="Search">
                "🔍"
            </button>

            <Show when=move || state.with(|s| s.has_results())>
                <ul class="search-results">
                    <For
                        each=move || state.with(|s| keyed_results(s.results()))
                        key=|entry: &(usize, SearchResult)| entry.clone()
                        children=move |(_, result): (usize, SearchResult)| {
                            view! {
                                <li
                                    class="search-result"
                                    on:click=move |_| state.update(|s| s.select_result())
                                >
                                    <a href=result.link.clone()>{result.label()}</a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Pairs each result with its position so repeated category names or item ids
/// never share a key.
fn keyed_results(results: &[SearchResult]) -> Vec<(usize, SearchResult)> {
    results.iter().cloned().enumerate().collect()
}
