//! Not-found view

use leptos::prelude::*;

/// Rendered for unknown paths (in place of the whole layout) and for pages
/// that fail to load
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"We couldn't find the page you were looking for."</p>
            <a href="/" class="btn btn-primary">
                "Back to Home"
            </a>
        </div>
    }
}
