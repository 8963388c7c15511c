//! Footer component

use leptos::prelude::*;
use leptos_router::components::A;
use storefront_core::Page;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <nav class="footer-links">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <A href=page.path() attr:class="footer-link">
                                {page.title()}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
            <p class="footer-copy">"© Eyewear Store. All rights reserved."</p>
        </footer>
    }
}
