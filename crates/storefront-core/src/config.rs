//! Storefront configuration
//!
//! One recognized option, the navigation API base URL. Natively it comes from a
//! TOML file (`<config_dir>/storefront/config.toml` by default) and can be
//! overridden by the CLI or `STOREFRONT_NAV_API_BASE_URL`; the browser build
//! reads it from a `<meta>` tag at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::CoreError;

pub const DEFAULT_NAV_API_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding the navigation API base URL
pub const NAV_API_BASE_URL_ENV: &str = "STOREFRONT_NAV_API_BASE_URL";

/// Path of the navigation endpoint below the base URL
pub const NAVBAR_PATH: &str = "/navbar";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base of the navigation-data endpoint
    #[serde(default = "default_nav_api_base_url", alias = "navApiBaseUrl")]
    pub nav_api_base_url: String,
}

fn default_nav_api_base_url() -> String {
    DEFAULT_NAV_API_BASE_URL.to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            nav_api_base_url: default_nav_api_base_url(),
        }
    }
}

impl StorefrontConfig {
    pub fn new(nav_api_base_url: impl Into<String>) -> Result<Self, CoreError> {
        let config = Self {
            nav_api_base_url: nav_api_base_url.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// The base URL must be absolute http(s)
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = Url::parse(&self.nav_api_base_url).map_err(|e| CoreError::InvalidConfig {
            message: format!("nav_api_base_url '{}': {}", self.nav_api_base_url, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(CoreError::InvalidConfig {
                message: format!("nav_api_base_url must be http or https, got '{}'", other),
            }),
        }
    }

    /// Full URL of the `/navbar` endpoint
    pub fn nav_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.nav_api_base_url.trim_end_matches('/'),
            NAVBAR_PATH
        )
    }

    /// Replace the base URL when an override is present
    pub fn with_base_url_override(self, base_url: Option<String>) -> Result<Self, CoreError> {
        match base_url {
            Some(url) => Self::new(url),
            None => Ok(self),
        }
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load an explicit file, else the default file if it exists, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config_dir>/storefront/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("storefront").join("config.toml"))
    }
}
