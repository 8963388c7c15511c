//! URL path → page resolution
//!
//! Matching ignores case, query string, fragment, and trailing slashes, so
//! `/Contact-Us/?ref=footer` lands on the contact page.

use std::fmt;

/// Login link target in the account menu
pub const LOGIN_PATH: &str = "/login";
/// Sign-up link target in the account menu
pub const SIGNUP_PATH: &str = "/signup";
/// Cart link target
pub const CART_PATH: &str = "/cart";

/// Top-level pages rendered inside the layout shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Feature,
    ContactUs,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Feature, Page::ContactUs];

    /// Canonical path
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Feature => "/feature",
            Page::ContactUs => "/contact-us",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Feature => "Featured",
            Page::ContactUs => "Contact Us",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Page(Page),
    NotFound,
}

impl RouteMatch {
    pub fn page(&self) -> Option<Page> {
        match self {
            RouteMatch::Page(page) => Some(*page),
            RouteMatch::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteMatch::NotFound)
    }
}

/// Static path table
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    routes: &'static [(&'static str, Page)],
}

static STOREFRONT_ROUTES: [(&str, Page); 3] = [
    ("/", Page::Home),
    ("/feature", Page::Feature),
    ("/contact-us", Page::ContactUs),
];

impl RouteTable {
    /// The storefront's public pages
    pub const fn storefront() -> Self {
        Self {
            routes: &STOREFRONT_ROUTES,
        }
    }

    pub fn resolve(&self, path: &str) -> RouteMatch {
        let normalized = normalize_path(path);

        self.routes
            .iter()
            .find(|(route, _)| *route == normalized)
            .map(|(_, page)| RouteMatch::Page(*page))
            .unwrap_or(RouteMatch::NotFound)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::storefront()
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        return "/".to_string();
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered.starts_with('/') {
        lowered
    } else {
        format!("/{}", lowered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths() {
        let table = RouteTable::storefront();

        assert_eq!(table.resolve("/"), RouteMatch::Page(Page::Home));
        assert_eq!(table.resolve("/feature"), RouteMatch::Page(Page::Feature));
        assert_eq!(table.resolve("/contact-us"), RouteMatch::Page(Page::ContactUs));
    }

    #[test]
    fn test_unknown_paths() {
        let table = RouteTable::storefront();

        assert!(table.resolve("/nope").is_not_found());
        assert!(table.resolve("/feature/extra").is_not_found());
        // Link targets without a page of their own
        assert!(table.resolve(LOGIN_PATH).is_not_found());
        assert!(table.resolve(CART_PATH).is_not_found());
    }

    #[test]
    fn test_normalization() {
        let table = RouteTable::storefront();

        assert_eq!(table.resolve(""), RouteMatch::Page(Page::Home));
        assert_eq!(table.resolve("/Contact-us"), RouteMatch::Page(Page::ContactUs));
        assert_eq!(table.resolve("/feature/"), RouteMatch::Page(Page::Feature));
        assert_eq!(table.resolve("/feature?sort=new"), RouteMatch::Page(Page::Feature));
        assert_eq!(table.resolve("/#top"), RouteMatch::Page(Page::Home));
        assert_eq!(table.resolve("feature"), RouteMatch::Page(Page::Feature));
    }

    #[test]
    fn test_every_page_resolves_from_its_path() {
        let table = RouteTable::storefront();
        for page in Page::ALL {
            assert_eq!(table.resolve(page.path()).page(), Some(page));
        }
    }
}
