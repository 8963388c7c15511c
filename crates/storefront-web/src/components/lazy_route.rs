//! Route content loaded on first visit

use std::sync::Arc;

use leptos::prelude::*;
use storefront_core::{LazyPages, Page, PageContent, RouteMatch};

use super::NotFound;
use crate::pages::{ContactUsPage, FeaturePage, HomePage};

/// Loads the matched page through the shared [`LazyPages`] registry
///
/// Suspends the surrounding `<Suspense>` until the page is ready; a failed load
/// renders the not-found view. An unmatched route loads nothing.
#[component]
pub fn LazyRoute(#[prop(into)] route: Signal<RouteMatch>) -> impl IntoView {
    let pages = use_context::<Arc<LazyPages<PageContent>>>()
        .unwrap_or_else(|| Arc::new(LazyPages::storefront()));

    let content = LocalResource::new(move || {
        let route = route.get();
        let pages = Arc::clone(&pages);
        async move { pages.load_route(route).map(|loaded| loaded.map_err(|e| e.to_string())) }
    });

    move || {
        content.get().and_then(|loaded| {
            loaded.as_ref().map(|result| match result {
                Ok(content) => render_page(content.clone()),
                Err(e) => {
                    leptos::logging::warn!("{}", e);
                    view! { <NotFound /> }.into_any()
                }
            })
        })
    }
}

fn render_page(content: PageContent) -> AnyView {
    match content.page {
        Page::Home => view! { <HomePage content /> }.into_any(),
        Page::Feature => view! { <FeaturePage content /> }.into_any(),
        Page::ContactUs => view! { <ContactUsPage content /> }.into_any(),
    }
}
