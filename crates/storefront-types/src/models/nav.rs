//! Navigation tree as served by the `/navbar` endpoint
//!
//! Shape on the wire:
//! `[{ "id": 1, "name": "Frames", "submenu": [{ "id": 1, "title": "Round", "link": "/round" }] }]`

use serde::{Deserialize, Serialize};

/// Single clickable navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    pub id: u64,
    pub title: String,
    pub link: String,
}

impl NavItem {
    pub fn new(id: u64, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Top-level menu entry with its ordered submenu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavCategory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub submenu: Vec<NavItem>,
}

impl NavCategory {
    pub fn new(id: u64, name: impl Into<String>, submenu: Vec<NavItem>) -> Self {
        Self {
            id,
            name: name.into(),
            submenu,
        }
    }

    /// Whether the category renders a dropdown chevron
    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }
}

/// A matched `NavItem` tagged with the name of the category that owns it
///
/// Serializes flat: `{ "id", "title", "link", "category" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u64,
    pub title: String,
    pub link: String,
    pub category: String,
}

impl SearchResult {
    pub fn from_item(item: &NavItem, category: &str) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            link: item.link.clone(),
            category: category.to_string(),
        }
    }

    /// "Frames: Round" style label used by the results dropdown
    pub fn label(&self) -> String {
        format!("{}: {}", self.category, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_navbar_payload() {
        let json = r#"[
            {"id": 1, "name": "Frames", "submenu": [{"id": 1, "title": "Round", "link": "/round"}]},
            {"id": 2, "name": "Gift Cards"}
        ]"#;

        let tree: Vec<NavCategory> = serde_json::from_str(json).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].submenu[0], NavItem::new(1, "Round", "/round"));
        assert!(tree[0].has_submenu());
        // Missing submenu defaults to empty
        assert!(!tree[1].has_submenu());
    }

    #[test]
    fn test_search_result_serializes_flat() {
        let item = NavItem::new(1, "Round", "/round");
        let result = SearchResult::from_item(&item, "Frames");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "Round", "link": "/round", "category": "Frames"})
        );
        assert_eq!(result.label(), "Frames: Round");
    }
}
