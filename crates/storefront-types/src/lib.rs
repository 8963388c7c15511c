//! storefront-types - Shared navigation data types for the storefront
//!
//! This crate contains pure data structures without heavy dependencies.
//! No tokio, no async runtime - just serde-serializable types.
//!
//! Used by:
//! - storefront-core (search, dropdown and routing logic)
//! - storefront-web (frontend WASM and navigation server)
//! - storefront (CLI)

pub mod models;

pub use models::{NavCategory, NavItem, SearchResult};
