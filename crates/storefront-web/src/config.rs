//! Startup configuration for the browser build
//!
//! The navigation API base URL is injected through the host page:
//! `<meta name="nav-api-base-url" content="https://api.example.com">`.

use storefront_core::StorefrontConfig;

/// `name` of the `<meta>` tag carrying the navigation API base URL
pub const NAV_API_META: &str = "nav-api-base-url";

/// Read the config from the document, falling back to defaults when the tag is
/// missing or holds an invalid URL
pub fn config_from_document() -> StorefrontConfig {
    let Some(base_url) = meta_content(NAV_API_META) else {
        return StorefrontConfig::default();
    };

    match StorefrontConfig::new(base_url) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("Ignoring <meta name=\"{}\">: {}", NAV_API_META, e);
            StorefrontConfig::default()
        }
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;

    element
        .get_attribute("content")
        .filter(|content| !content.trim().is_empty())
}
