//! Public page skeleton: header, content region, footer

use leptos::prelude::*;

use super::{Footer, Header, PageLoader};

/// Header on top, footer at the bottom, the matched page in between
///
/// Only the content region suspends while a page loads; header and footer
/// stay interactive.
#[component]
pub fn PublicLayout(children: Children) -> impl IntoView {
    view! {
        <main class="public-layout">
            <Header />
            <section class="page-region">
                <Suspense fallback=|| view! { <PageLoader /> }>{children()}</Suspense>
            </section>
            <Footer />
        </main>
    }
}
