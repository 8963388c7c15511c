//! Search-as-you-type over the navigation tree
//!
//! Flattens every submenu entry whose title contains the query, keeping the
//! tree's category-then-item order.

use storefront_types::{NavCategory, SearchResult};

/// Filter the navigation tree by a free-text query
///
/// Matching is a case-insensitive substring test on `NavItem::title`. A blank
/// query (empty or whitespace-only) yields no results. Non-blank queries are
/// matched as typed, surrounding whitespace included.
///
/// # Examples
///
/// ```
/// use storefront_core::search_nav;
/// use storefront_types::{NavCategory, NavItem};
///
/// let tree = vec![NavCategory::new(1, "Frames", vec![NavItem::new(1, "Round", "/round")])];
///
/// assert_eq!(search_nav("ROU", &tree)[0].category, "Frames");
/// assert!(search_nav("   ", &tree).is_empty());
/// ```
pub fn search_nav(query: &str, tree: &[NavCategory]) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    tree.iter()
        .flat_map(|category| {
            category
                .submenu
                .iter()
                .filter(|item| item.title.to_lowercase().contains(&needle))
                .map(|item| SearchResult::from_item(item, &category.name))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::NavItem;

    fn sample_tree() -> Vec<NavCategory> {
        vec![
            NavCategory::new(1, "Frames", vec![NavItem::new(1, "Round", "/round")]),
            NavCategory::new(2, "Lenses", vec![NavItem::new(2, "Blue-light", "/bl")]),
        ]
    }

    fn catalog_tree() -> Vec<NavCategory> {
        vec![
            NavCategory::new(
                1,
                "Eyeglasses",
                vec![
                    NavItem::new(1, "Men", "/eyeglasses/men"),
                    NavItem::new(2, "Women", "/eyeglasses/women"),
                    NavItem::new(3, "Kids", "/eyeglasses/kids"),
                ],
            ),
            NavCategory::new(
                2,
                "Sunglasses",
                vec![
                    NavItem::new(1, "Men", "/sunglasses/men"),
                    NavItem::new(2, "Women", "/sunglasses/women"),
                ],
            ),
            NavCategory::new(3, "Gift Cards", vec![]),
        ]
    }

    #[test]
    fn test_matches_case_insensitive_prefix() {
        let results = search_nav("rou", &sample_tree());

        assert_eq!(
            results,
            vec![SearchResult {
                id: 1,
                title: "Round".to_string(),
                link: "/round".to_string(),
                category: "Frames".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_query_yields_nothing() {
        assert!(search_nav("", &sample_tree()).is_empty());
    }

    #[test]
    fn test_whitespace_query_yields_nothing() {
        assert!(search_nav("   ", &sample_tree()).is_empty());
        assert!(search_nav("\t\n", &sample_tree()).is_empty());
    }

    #[test]
    fn test_preserves_category_then_item_order() {
        let results = search_nav("men", &catalog_tree());

        let labels: Vec<String> = results.iter().map(|r| r.label()).collect();
        // "Women" contains "men" too
        assert_eq!(
            labels,
            vec![
                "Eyeglasses: Men",
                "Eyeglasses: Women",
                "Sunglasses: Men",
                "Sunglasses: Women",
            ]
        );
    }

    #[test]
    fn test_every_result_contains_query_and_none_omitted() {
        let tree = catalog_tree();
        for query in ["e", "M", "kid", "wo", "zzz", "GLASS"] {
            let results = search_nav(query, &tree);
            let needle = query.to_lowercase();

            assert!(results
                .iter()
                .all(|r| r.title.to_lowercase().contains(&needle)));

            let expected = tree
                .iter()
                .flat_map(|c| c.submenu.iter())
                .filter(|i| i.title.to_lowercase().contains(&needle))
                .count();
            assert_eq!(results.len(), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_query_is_not_trimmed() {
        // Surrounding whitespace is part of the needle
        assert!(search_nav("round ", &sample_tree()).is_empty());
        assert_eq!(search_nav("blue-", &sample_tree()).len(), 1);
    }

    #[test]
    fn test_empty_tree() {
        assert!(search_nav("round", &[]).is_empty());
    }
}
