//! Page content catalog and the lazy registry that loads pages on first visit

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::CoreError;
use crate::routes::{Page, RouteMatch};

/// One titled block of copy on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSection {
    pub title: &'static str,
    pub body: &'static str,
}

/// Everything a top-level page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    pub heading: &'static str,
    pub intro: &'static str,
    pub sections: Vec<PageSection>,
}

impl PageContent {
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Home => Self {
                page,
                heading: "See the world clearly",
                intro: "Prescription eyeglasses, sunglasses and lenses, delivered to your door.",
                sections: vec![
                    PageSection {
                        title: "Try before you buy",
                        body: "Pick five frames and try them at home for free.",
                    },
                    PageSection {
                        title: "Lenses included",
                        body: "Every frame ships with anti-reflective, scratch-resistant lenses.",
                    },
                ],
            },
            Page::Feature => Self {
                page,
                heading: "Featured collections",
                intro: "This season's most loved frames and lens upgrades.",
                sections: vec![
                    PageSection {
                        title: "Round frames",
                        body: "Classic round silhouettes in acetate and titanium.",
                    },
                    PageSection {
                        title: "Blue-light lenses",
                        body: "Filter screen glare for long days at the desk.",
                    },
                    PageSection {
                        title: "Polarized sunglasses",
                        body: "Cut reflections on the water and the road.",
                    },
                ],
            },
            Page::ContactUs => Self {
                page,
                heading: "Contact us",
                intro: "Questions about an order, a prescription or a frame fit? Ask us.",
                sections: vec![
                    PageSection {
                        title: "Email",
                        body: "support@eyewear.store",
                    },
                    PageSection {
                        title: "Phone",
                        body: "Mon-Fri, 9am-6pm: +1 555 0100",
                    },
                ],
            },
        }
    }
}

type Loader<T> = Box<dyn Fn() -> Result<T, CoreError> + Send + Sync>;

/// Pages loaded on first visit and cached afterwards
///
/// A failed load is not cached; the next visit tries again.
pub struct LazyPages<T> {
    loaders: HashMap<Page, Loader<T>>,
    loaded: Mutex<HashMap<Page, T>>,
}

impl<T: Clone> LazyPages<T> {
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn register<F>(mut self, page: Page, loader: F) -> Self
    where
        F: Fn() -> Result<T, CoreError> + Send + Sync + 'static,
    {
        self.loaders.insert(page, Box::new(loader));
        self
    }

    /// Return the cached page or run its loader
    pub fn load(&self, page: Page) -> Result<T, CoreError> {
        if let Some(cached) = self.loaded.lock().get(&page) {
            return Ok(cached.clone());
        }

        let loader = self
            .loaders
            .get(&page)
            .ok_or(CoreError::PageNotRegistered { page })?;

        // Loader runs unlocked; a concurrent first visit keeps whichever lands first
        let value = loader()?;
        debug!(%page, "Page loaded on first visit");

        Ok(self.loaded.lock().entry(page).or_insert(value).clone())
    }

    /// Load the page a route resolved to; unmatched routes load nothing
    pub fn load_route(&self, route: RouteMatch) -> Option<Result<T, CoreError>> {
        route.page().map(|page| self.load(page))
    }

    pub fn is_loaded(&self, page: Page) -> bool {
        self.loaded.lock().contains_key(&page)
    }
}

impl<T: Clone> Default for LazyPages<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyPages<PageContent> {
    /// Registry with a loader for every storefront page
    pub fn storefront() -> Self {
        Page::ALL.into_iter().fold(Self::new(), |pages, page| {
            pages.register(page, move || Ok(PageContent::for_page(page)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_nothing_loaded_up_front() {
        let pages = LazyPages::storefront();
        for page in Page::ALL {
            assert!(!pages.is_loaded(page));
        }
    }

    #[test]
    fn test_loader_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let pages = LazyPages::new().register(Page::Feature, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(PageContent::for_page(Page::Feature))
        });

        let first = pages.load(Page::Feature).unwrap();
        let second = pages.load(Page::Feature).unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(pages.is_loaded(Page::Feature));
        assert!(!pages.is_loaded(Page::Home));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let pages: LazyPages<PageContent> = LazyPages::new().register(Page::ContactUs, || {
            Err(CoreError::PageLoad {
                page: Page::ContactUs,
                message: "chunk missing".to_string(),
            })
        });

        assert!(matches!(
            pages.load(Page::ContactUs),
            Err(CoreError::PageLoad { .. })
        ));
        assert!(!pages.is_loaded(Page::ContactUs));
    }

    #[test]
    fn test_load_route_skips_not_found() {
        let pages = LazyPages::storefront();

        assert!(pages.load_route(RouteMatch::NotFound).is_none());
        for page in Page::ALL {
            assert!(!pages.is_loaded(page));
        }

        let feature = pages.load_route(RouteMatch::Page(Page::Feature));
        assert_eq!(feature.unwrap().unwrap().page, Page::Feature);
        assert!(pages.is_loaded(Page::Feature));
        assert!(!pages.is_loaded(Page::Home));
    }

    #[test]
    fn test_unregistered_page() {
        let pages: LazyPages<PageContent> = LazyPages::new();
        assert!(matches!(
            pages.load(Page::Home),
            Err(CoreError::PageNotRegistered { page: Page::Home })
        ));
    }

    #[test]
    fn test_catalog_matches_page() {
        for page in Page::ALL {
            let content = PageContent::for_page(page);
            assert_eq!(content.page, page);
            assert!(!content.sections.is_empty());
        }
    }
}
