//! Navigation tree, its load status, and the guard that drops stale fetches

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use storefront_types::{NavCategory, SearchResult};
use tracing::debug;

use crate::error::{CoreError, NavFetchError};
use crate::search::search_nav;

/// Validated, read-only navigation tree
///
/// Cheap to clone (Arc internally) so it can sit in reactive signals and
/// server state alike.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    categories: Arc<Vec<NavCategory>>,
}

impl NavTree {
    /// Build a tree, rejecting duplicate submenu ids within a category
    pub fn new(categories: Vec<NavCategory>) -> Result<Self, CoreError> {
        for category in &categories {
            let mut seen = HashSet::new();
            for item in &category.submenu {
                if !seen.insert(item.id) {
                    return Err(CoreError::DuplicateItemId {
                        category: category.name.clone(),
                        item_id: item.id,
                    });
                }
            }
        }

        Ok(Self {
            categories: Arc::new(categories),
        })
    }

    /// Parse the `/navbar` JSON payload
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let categories: Vec<NavCategory> =
            serde_json::from_str(json).map_err(|e| CoreError::NavParse {
                message: e.to_string(),
                source: e,
            })?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[NavCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of submenu entries across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.submenu.len()).sum()
    }

    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        search_nav(query, &self.categories)
    }
}

/// Where the header's navigation data stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavStatus {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetch failed; nothing but the failure notice renders
    Failed(NavFetchError),
    /// Data arrived
    Ready(NavTree),
}

impl NavStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, NavStatus::Failed(_))
    }

    pub fn tree(&self) -> Option<&NavTree> {
        match self {
            NavStatus::Ready(tree) => Some(tree),
            _ => None,
        }
    }

    /// Categories to render; empty unless the data is ready
    pub fn categories(&self) -> &[NavCategory] {
        self.tree().map(NavTree::categories).unwrap_or(&[])
    }
}

impl From<Result<NavTree, NavFetchError>> for NavStatus {
    fn from(result: Result<NavTree, NavFetchError>) -> Self {
        match result {
            Ok(tree) => NavStatus::Ready(tree),
            Err(e) => NavStatus::Failed(e),
        }
    }
}

/// Identifies one fetch started through a [`FetchGuard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Generation counter tying in-flight fetches to the component that started them
///
/// Each [`begin`](FetchGuard::begin) hands out a new ticket; starting another
/// fetch or calling [`invalidate`](FetchGuard::invalidate) on unmount makes
/// every earlier ticket stale.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    generation: Arc<AtomicU64>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Pass `value` through only if `ticket` is still current
    pub fn accept<T>(&self, ticket: FetchTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!(ticket = ticket.0, "Discarding stale navigation response");
            None
        }
    }
}
