//! Loading placeholder

use leptos::prelude::*;

/// Spinner shown while navigation data or a page is loading
#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page-loader" role="status" aria-live="polite">
            <div class="page-loader-spinner"></div>
            <span class="page-loader-label">"Loading..."</span>
        </div>
    }
}
