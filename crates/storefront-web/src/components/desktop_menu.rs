//! Horizontal category bar shown on wide screens

use leptos::prelude::*;
use storefront_core::{HeaderState, NavTree};

use super::{CategoryMenu, MenuVariant};

#[component]
pub fn DesktopMenu(tree: NavTree, state: RwSignal<HeaderState>) -> impl IntoView {
    view! {
        <ul class="desktop-menu">
            {tree
                .categories()
                .iter()
                .cloned()
                .map(|category| {
                    view! { <CategoryMenu category state variant=MenuVariant::Desktop /> }
                })
                .collect_view()}
        </ul>
    }
}
