//! Home page component

use leptos::prelude::*;
use leptos_router::components::A;
use storefront_core::{Page, PageContent};

/// Landing page with a hero and selling points
#[component]
pub fn HomePage(content: PageContent) -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h2 class="hero-heading">{content.heading}</h2>
                <p class="hero-intro">{content.intro}</p>
                <A href=Page::Feature.path() attr:class="btn btn-primary">
                    "Shop featured"
                </A>
            </section>

            <div class="highlights">
                {content
                    .sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="highlight">
                                <h3>{section.title}</h3>
                                <p>{section.body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
