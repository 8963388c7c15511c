//! Main Leptos App component with SPA router

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use storefront_core::{LazyPages, RouteTable, StorefrontConfig};

use crate::components::RouteView;

/// Main App component
///
/// Provides the config and the lazy page registry to everything below it.
#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_context(config);
    provide_context(Arc::new(LazyPages::storefront()));

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Resolves the current browser path against the route table
#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let routes = RouteTable::storefront();

    let matched = Memo::new(move |_| location.pathname.with(|path| routes.resolve(path)));

    view! { <RouteView route=matched /> }
}
