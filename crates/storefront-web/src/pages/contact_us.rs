//! Contact page

use leptos::prelude::*;
use storefront_core::PageContent;

#[component]
pub fn ContactUsPage(content: PageContent) -> impl IntoView {
    view! {
        <div class="page contact-page">
            <h2>{content.heading}</h2>
            <p class="page-intro">{content.intro}</p>
            <dl class="contact-details">
                {content
                    .sections
                    .into_iter()
                    .map(|section| {
                        view! {
                            <dt>{section.title}</dt>
                            <dd>{section.body}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
