//! Account dropdown (login / sign-up)

use leptos::prelude::*;
use storefront_core::routes::{LOGIN_PATH, SIGNUP_PATH};
use storefront_core::{DropdownTarget, HeaderState};

/// Always-present account menu
///
/// Uses the same exclusive selector as the category dropdowns, so opening it
/// closes any open category and vice versa.
#[component]
pub fn AccountMenu(state: RwSignal<HeaderState>) -> impl IntoView {
    let is_open = move || state.with(|s| s.is_open(&DropdownTarget::Account));

    view! {
        <div class="account-menu">
            <button
                class="account-button"
                on:click=move |_| state.update(|s| s.toggle_dropdown(DropdownTarget::Account))
                aria-expanded=move || is_open().to_string()
            >
                <span class="account-icon">"👤"</span>
                " Account "
                <span class="chevron">"▾"</span>
            </button>

            <Show when=is_open>
                <ul class="dropdown account-dropdown">
                    <li class="submenu-item">
                        <a href=LOGIN_PATH>"Login"</a>
                    </li>
                    <li class="submenu-item">
                        <a href=SIGNUP_PATH>"Sign Up"</a>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
