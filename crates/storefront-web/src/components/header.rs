//! Header component
//!
//! Fetches the navigation tree once per mount and renders the search box,
//! desktop menu, account menu and mobile menu from it. Until the data lands it
//! shows the page loader; if the fetch fails it shows only a failure notice.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::routes::CART_PATH;
use storefront_core::{FetchGuard, HeaderState, NavStatus, NavTree, StorefrontConfig};

use super::{AccountMenu, DesktopMenu, MobileMenu, PageLoader, SearchBox};
use crate::api::fetch_navigation;

/// Navigation header backed by the `/navbar` endpoint
#[component]
pub fn Header() -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let status = RwSignal::new(NavStatus::Loading);

    // Responses landing after unmount are dropped
    let guard = FetchGuard::new();
    let ticket = guard.begin();
    let endpoint = config.nav_endpoint();

    spawn_local({
        let guard = guard.clone();
        async move {
            let result = fetch_navigation(&endpoint).await;
            if let Err(e) = &result {
                leptos::logging::warn!("Failed to load navigation from {}: {}", endpoint, e);
            }

            match guard.accept(ticket, NavStatus::from(result)) {
                Some(outcome) => {
                    let _ = status.try_set(outcome);
                }
                None => leptos::logging::log!("Navigation response arrived after unmount"),
            }
        }
    });

    on_cleanup(move || guard.invalidate());

    move || view! { <NavStatusView status=status.get() /> }
}

/// Renders one navigation load status
///
/// Loading shows the page loader, a failure shows only the notice, and ready
/// data shows the full nav bar.
#[component]
pub fn NavStatusView(status: NavStatus) -> impl IntoView {
    match status {
        NavStatus::Loading => view! { <PageLoader /> }.into_any(),
        NavStatus::Failed(_) => {
            view! { <p class="nav-error">"Failed to load menu."</p> }.into_any()
        }
        NavStatus::Ready(tree) => view! { <NavBar tree /> }.into_any(),
    }
}

/// Fully loaded nav bar
///
/// Owns the header state (query, results, open dropdown, mobile flag) for as
/// long as it is mounted.
#[component]
pub fn NavBar(tree: NavTree) -> impl IntoView {
    let state = RwSignal::new(HeaderState::new());
    let mobile_tree = tree.clone();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <h1 class="logo">"Eyewear Store"</h1>

                <SearchBox tree=tree.clone() state />

                <button
                    class="hamburger"
                    on:click=move |_| state.update(|s| s.toggle_mobile_menu())
                    aria-label="Toggle menu"
                    aria-expanded=move || state.with(|s| s.is_mobile_menu_open()).to_string()
                >
                    "☰"
                </button>

                <DesktopMenu tree state />
                <AccountMenu state />

                <a href=CART_PATH class="cart-link" aria-label="Cart">
                    "🛒"
                </a>
            </div>

            <Show when=move || state.with(|s| s.is_mobile_menu_open())>
                <MobileMenu tree=mobile_tree.clone() state />
            </Show>
        </nav>
    }
}
