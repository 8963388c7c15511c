//! storefront-core - Core library for the storefront
//!
//! Holds everything the UI renders from but nothing that touches the DOM:
//! search filtering, dropdown and header state, navigation load status,
//! route resolution, lazy page loading and configuration.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod header;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod search;

pub use config::StorefrontConfig;
pub use dropdown::{DropdownState, DropdownTarget};
pub use error::{CoreError, NavFetchError};
pub use header::HeaderState;
pub use nav::{FetchGuard, FetchTicket, NavStatus, NavTree};
pub use pages::{LazyPages, PageContent};
pub use routes::{Page, RouteMatch, RouteTable};
pub use search::search_nav;

pub use storefront_types::{NavCategory, NavItem, SearchResult};
