//! Navigation tree models

mod nav;

pub use nav::{NavCategory, NavItem, SearchResult};
