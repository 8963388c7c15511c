//! Error types for storefront-core

use std::path::PathBuf;
use thiserror::Error;

use crate::routes::Page;

/// Core error type for storefront operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML in {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // ===================
    // Navigation Errors
    // ===================
    #[error("Failed to parse navigation JSON: {message}")]
    NavParse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate submenu id {item_id} in category '{category}'")]
    DuplicateItemId { category: String, item_id: u64 },

    // ===================
    // Page Errors
    // ===================
    #[error("No loader registered for page {page}")]
    PageNotRegistered { page: Page },

    #[error("Failed to load page {page}: {message}")]
    PageLoad { page: Page, message: String },
}

/// Why the navigation fetch failed
///
/// The header treats every variant the same ("failed to load"); the split only
/// matters for logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavFetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<CoreError> for NavFetchError {
    fn from(e: CoreError) -> Self {
        NavFetchError::Parse(e.to_string())
    }
}
