//! Collapsed menu for narrow screens
//!
//! Categories expand accordion-style; account and cart links are listed flat.

use leptos::prelude::*;
use storefront_core::routes::{CART_PATH, LOGIN_PATH, SIGNUP_PATH};
use storefront_core::{HeaderState, NavTree};

use super::{CategoryMenu, MenuVariant};

#[component]
pub fn MobileMenu(tree: NavTree, state: RwSignal<HeaderState>) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            <ul class="mobile-menu-list">
                {tree
                    .categories()
                    .iter()
                    .cloned()
                    .map(|category| {
                        view! { <CategoryMenu category state variant=MenuVariant::Mobile /> }
                    })
                    .collect_view()}

                <li class="mobile-link">
                    <a href=LOGIN_PATH>"Login"</a>
                </li>
                <li class="mobile-link">
                    <a href=SIGNUP_PATH>"Sign Up"</a>
                </li>
                <li class="mobile-link">
                    <a href=CART_PATH>"🛒 Buy"</a>
                </li>
            </ul>
        </div>
    }
}
