//! CLI commands over the navigation tree
//!
//! Provides search, menu and route commands using storefront-core directly.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::path::{Path, PathBuf};
use storefront_core::{NavTree, RouteMatch, RouteTable, StorefrontConfig};
use storefront_types::SearchResult;
use tracing::debug;

// ============================================================================
// Configuration
// ============================================================================

/// Config file (or defaults) with the CLI / env base URL applied on top
pub fn resolve_config(path: Option<&Path>, base_url: Option<String>) -> Result<StorefrontConfig> {
    StorefrontConfig::load_or_default(path)
        .context("Failed to load configuration")?
        .with_base_url_override(base_url)
        .context("Invalid navigation API base URL")
}

// ============================================================================
// Navigation source
// ============================================================================

/// Where a command reads the navigation tree from
pub enum NavSource {
    /// The configured `/navbar` endpoint
    Remote,
    /// A local JSON file with the same payload
    File(PathBuf),
}

impl NavSource {
    pub fn from_file(path: Option<PathBuf>) -> Self {
        path.map(NavSource::File).unwrap_or(NavSource::Remote)
    }
}

pub async fn load_nav_tree(source: NavSource, config: &StorefrontConfig) -> Result<NavTree> {
    match source {
        NavSource::File(path) => read_nav_file(&path),
        NavSource::Remote => fetch_nav_tree(&config.nav_endpoint()).await,
    }
}

/// Read and validate a navigation JSON file
pub fn read_nav_file(path: &Path) -> Result<NavTree> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation file {}", path.display()))?;

    NavTree::from_json(&content)
        .with_context(|| format!("Invalid navigation data in {}", path.display()))
}

async fn fetch_nav_tree(endpoint: &str) -> Result<NavTree> {
    debug!(endpoint, "Fetching navigation tree");

    let body = reqwest::get(endpoint)
        .await
        .with_context(|| format!("Failed to reach {}", endpoint))?
        .error_for_status()
        .with_context(|| format!("Navigation API at {} returned an error", endpoint))?
        .text()
        .await
        .context("Failed to read navigation response body")?;

    NavTree::from_json(&body).with_context(|| format!("Invalid navigation data from {}", endpoint))
}

// ============================================================================
// Commands
// ============================================================================

pub fn run_search(tree: &NavTree, query: &str, json: bool) -> Result<()> {
    let results = tree.search(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        eprintln!(
            "No items match '{}' ({} items searched)",
            query,
            tree.item_count()
        );
        return Ok(());
    }

    println!("{}", search_table(&results));
    Ok(())
}

pub fn run_menu(tree: &NavTree, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tree.categories())?);
        return Ok(());
    }

    println!("{}", menu_table(tree));
    Ok(())
}

pub fn run_route(path: &str) {
    println!("{}", describe_route(RouteTable::storefront().resolve(path)));
}

// ============================================================================
// Rendering
// ============================================================================

fn search_table(results: &[SearchResult]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Link").fg(Color::Cyan),
    ]);

    for result in results {
        table.add_row(vec![
            result.category.as_str(),
            result.title.as_str(),
            result.link.as_str(),
        ]);
    }

    table
}

fn menu_table(tree: &NavTree) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Items").fg(Color::Cyan),
    ]);

    for category in tree.categories() {
        let items = category
            .submenu
            .iter()
            .map(|item| format!("{} ({})", item.title, item.link))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![category.name.clone(), items]);
    }

    table
}

fn describe_route(matched: RouteMatch) -> String {
    match matched {
        RouteMatch::Page(page) => format!("{} ({})", page, page.path()),
        RouteMatch::NotFound => "not found".to_string(),
    }
}
