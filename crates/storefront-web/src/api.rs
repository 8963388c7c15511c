//! Navigation data client for the frontend

use gloo_net::http::Request;
use storefront_core::{NavFetchError, NavTree};

/// Fetch the navigation tree from `endpoint`
///
/// Network failures, non-2xx responses and malformed payloads all come back as
/// `Err`; the header renders them identically.
pub async fn fetch_navigation(endpoint: &str) -> Result<NavTree, NavFetchError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|e| NavFetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(NavFetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| NavFetchError::Network(e.to_string()))?;

    Ok(NavTree::from_json(&body)?)
}
