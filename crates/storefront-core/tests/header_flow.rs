//! End-to-end checks of the header and router logic against a `/navbar` payload
//!
//! Run with:
//! ```bash
//! cargo test -p storefront-core --test header_flow
//! ```

use storefront_core::{
    DropdownTarget, FetchGuard, HeaderState, NavFetchError, NavStatus, NavTree, Page,
    RouteMatch, RouteTable, SearchResult,
};

const NAVBAR_JSON: &str = r#"[
    {"id": 1, "name": "Frames", "submenu": [{"id": 1, "title": "Round", "link": "/round"}]},
    {"id": 2, "name": "Lenses", "submenu": [{"id": 2, "title": "Blue-light", "link": "/bl"}]}
]"#;

fn loaded() -> NavStatus {
    NavStatus::from(NavTree::from_json(NAVBAR_JSON).map_err(NavFetchError::from))
}

#[test]
fn test_search_example_payload() {
    let tree = NavTree::from_json(NAVBAR_JSON).unwrap();

    assert_eq!(
        tree.search("rou"),
        vec![SearchResult {
            id: 1,
            title: "Round".to_string(),
            link: "/round".to_string(),
            category: "Frames".to_string(),
        }]
    );
    assert!(tree.search("").is_empty());
}

#[test]
fn test_feature_page_renders_all_categories_closed() {
    let route = RouteTable::storefront().resolve("/feature");
    assert_eq!(route, RouteMatch::Page(Page::Feature));

    let status = loaded();
    let header = HeaderState::new();

    let names: Vec<&str> = status.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Frames", "Lenses"]);
    assert!(status
        .categories()
        .iter()
        .all(|c| !header.is_open(&DropdownTarget::category(c.name.clone()))));
    assert!(!header.is_open(&DropdownTarget::Account));
}

#[test]
fn test_unmapped_path_is_not_found() {
    assert_eq!(RouteTable::storefront().resolve("/nope"), RouteMatch::NotFound);
}

#[test]
fn test_fetch_failure_exposes_no_menu_items() {
    for failure in [
        NavFetchError::Network("connection refused".to_string()),
        NavFetchError::Status(503),
        NavFetchError::Parse("expected value at line 1".to_string()),
    ] {
        let status = NavStatus::from(Err(failure));
        assert!(status.is_failed());
        assert!(status.categories().is_empty());
        assert!(status.tree().is_none());
    }
}

#[test]
fn test_duplicate_ids_surface_as_fetch_failure() {
    let json = r#"[{"id": 1, "name": "Frames", "submenu": [
        {"id": 1, "title": "Round", "link": "/round"},
        {"id": 1, "title": "Square", "link": "/square"}
    ]}]"#;

    let status = NavStatus::from(NavTree::from_json(json).map_err(NavFetchError::from));
    assert!(status.is_failed());
}

#[test]
fn test_stale_response_after_unmount_is_dropped() {
    let guard = FetchGuard::new();
    let ticket = guard.begin();

    // Header unmounts while the request is in flight
    guard.invalidate();

    let applied = guard.accept(ticket, loaded());
    assert!(applied.is_none());
}

#[test]
fn test_dropdown_exclusive_across_header() {
    let status = loaded();
    let mut header = HeaderState::new();
    let frames = DropdownTarget::category(status.categories()[0].name.clone());
    let lenses = DropdownTarget::category(status.categories()[1].name.clone());

    header.toggle_dropdown(frames.clone());
    header.toggle_dropdown(lenses.clone());
    assert!(!header.is_open(&frames));
    assert!(header.is_open(&lenses));

    header.toggle_dropdown(lenses.clone());
    assert!(header.dropdown().is_closed());
}
