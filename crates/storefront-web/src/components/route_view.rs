//! Layout or not-found, depending on the matched route

use leptos::prelude::*;
use storefront_core::RouteMatch;

use super::{LazyRoute, NotFound, PublicLayout};

/// Known pages render inside [`PublicLayout`], which stays mounted while moving
/// between them; unknown paths replace the whole layout with [`NotFound`].
#[component]
pub fn RouteView(#[prop(into)] route: Signal<RouteMatch>) -> impl IntoView {
    view! {
        <Show when=move || !route.get().is_not_found() fallback=|| view! { <NotFound /> }>
            <PublicLayout>
                <LazyRoute route />
            </PublicLayout>
        </Show>
    }
}
