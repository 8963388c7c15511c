//! One category entry with its collapsible submenu
//!
//! Shared by the desktop bar (floating dropdown) and the mobile menu
//! (accordion). Both read and write the same exclusive selector.

use leptos::prelude::*;
use storefront_core::{DropdownTarget, HeaderState};
use storefront_types::{NavCategory, NavItem};

/// Where a category menu is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuVariant {
    Desktop,
    Mobile,
}

impl MenuVariant {
    fn item_class(&self) -> &'static str {
        match self {
            MenuVariant::Desktop => "menu-item",
            MenuVariant::Mobile => "mobile-menu-item",
        }
    }

    fn button_class(&self) -> &'static str {
        match self {
            MenuVariant::Desktop => "menu-button",
            MenuVariant::Mobile => "mobile-menu-button",
        }
    }

    fn submenu_class(&self) -> &'static str {
        match self {
            MenuVariant::Desktop => "dropdown",
            MenuVariant::Mobile => "accordion",
        }
    }
}

/// Category header button plus its submenu while open
#[component]
pub fn CategoryMenu(
    category: NavCategory,
    state: RwSignal<HeaderState>,
    variant: MenuVariant,
) -> impl IntoView {
    let target = DropdownTarget::category(category.name.clone());
    let is_open = {
        let target = target.clone();
        move || state.with(|s| s.is_open(&target))
    };
    let has_submenu = category.has_submenu();
    let submenu = category.submenu;

    view! {
        <li class=variant.item_class()>
            <button
                class=variant.button_class()
                on:click=move |_| state.update(|s| s.toggle_dropdown(target.clone()))
            >
                {category.name}
                {has_submenu.then(|| view! { <span class="chevron">"▾"</span> })}
            </button>

            <Show when=is_open>
                <SubmenuList items=submenu.clone() list_class=variant.submenu_class() />
            </Show>
        </li>
    }
}

/// Plain list of submenu links
#[component]
pub fn SubmenuList(items: Vec<NavItem>, list_class: &'static str) -> impl IntoView {
    view! {
        <ul class=list_class>
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <li class="submenu-item">
                            <a href=item.link>{item.title}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
