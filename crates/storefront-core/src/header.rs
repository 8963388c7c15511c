//! Interactive state owned by one mounted header
//!
//! Created at mount, mutated by clicks and keystrokes, dropped on unmount.

use storefront_types::{NavCategory, SearchResult};

use crate::dropdown::{DropdownState, DropdownTarget};
use crate::search::search_nav;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    query: String,
    results: Vec<SearchResult>,
    dropdown: DropdownState,
    mobile_menu_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the search box contents and recompute the live results
    pub fn set_query(&mut self, query: impl Into<String>, tree: &[NavCategory]) {
        self.query = query.into();
        self.results = search_nav(&self.query, tree);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// A result was clicked: empty the search box and collapse the list.
    /// Following the link is left to the browser.
    pub fn select_result(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    pub fn toggle_dropdown(&mut self, target: DropdownTarget) {
        self.dropdown.toggle(target);
    }

    pub fn is_open(&self, target: &DropdownTarget) -> bool {
        self.dropdown.is_open(target)
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    /// Flip the hamburger menu. The dropdown selector is left untouched so an
    /// expanded category stays expanded across desktop and mobile views.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}
