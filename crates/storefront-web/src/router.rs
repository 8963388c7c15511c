//! Navigation server using Axum
//!
//! Serves the `/navbar` tree the header fetches, a health probe, and
//! optionally the built frontend from `dist/`.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use storefront_core::config::NAVBAR_PATH;
use storefront_core::NavTree;
use storefront_types::NavCategory;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub nav: NavTree,
}

/// Create the web router
///
/// With `dist` set, unknown paths fall back to the built frontend (and to its
/// `index.html` so client-side routes survive a reload).
pub fn create_router(nav: NavTree, dist: Option<PathBuf>) -> Router {
    // Frontend dev server runs on a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route(NAVBAR_PATH, get(navbar_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(AppState { nav });

    match dist {
        Some(dir) => {
            let index = dir.join("index.html");
            api.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => api.fallback(index_handler),
    }
}

/// Run the web server
pub async fn run(nav: NavTree, dist: Option<PathBuf>, port: u16) -> Result<()> {
    let categories = nav.len();
    let router = create_router(nav, dist);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, categories, "Navigation server listening");
    println!("Navigation API listening on http://{}{}", addr, NAVBAR_PATH);

    axum::serve(listener, router).await?;

    Ok(())
}

async fn navbar_handler(State(state): State<AppState>) -> Json<Vec<NavCategory>> {
    Json(state.nav.categories().to_vec())
}

async fn health_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "categories": state.nav.len(),
        "items": state.nav.item_count(),
    }))
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Eyewear Store - Build Required</title>
</head>
<body>
    <h1>Frontend not built</h1>
    <p>The navigation API is up at <a href="/navbar">/navbar</a>.</p>
    <ol>
        <li>Install Trunk: <code>cargo install trunk</code></li>
        <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
        <li>Build frontend: <code>trunk build --release</code> in crates/storefront-web</li>
        <li>Restart with: <code>storefront serve --dist crates/storefront-web/dist</code></li>
    </ol>
</body>
</html>"#,
    )
}
