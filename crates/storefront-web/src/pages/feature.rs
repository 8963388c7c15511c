//! Featured collections page

use leptos::prelude::*;
use storefront_core::PageContent;

#[component]
pub fn FeaturePage(content: PageContent) -> impl IntoView {
    view! {
        <div class="page feature-page">
            <h2>{content.heading}</h2>
            <p class="page-intro">{content.intro}</p>
            <div class="feature-grid">
                {content
                    .sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <article class="feature-card">
                                <h3 class="feature-card-title">{section.title}</h3>
                                <p class="feature-card-body">{section.body}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
