//! Property tests for payload parsing - arbitrary input never panics.

use std::path::Path;

use proptest::prelude::*;

use navweave::infrastructure::{JsonCategoryRepository, JsonMenuRepository};
use navweave::{build_category_url_map, build_mega_menu, build_navigation_tree, decode_uid};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: garbage menu payloads are rejected or built, never panic
    #[test]
    fn property_menu_parse_never_panics(content in ".{0,200}") {
        if let Ok(nodes) = JsonMenuRepository::new().parse(&content, Path::new("menu.json")) {
            let categories = Default::default();
            let _ = build_navigation_tree(&nodes, true, &categories);
            let _ = build_mega_menu(&nodes, &categories);
        }
    }

    /// PROPERTY: well-formed items with random parents always build
    #[test]
    fn property_menu_items_build(parents in proptest::collection::vec(proptest::option::of(0i64..20), 0..20)) {
        let items: Vec<String> = parents
            .iter()
            .enumerate()
            .map(|(i, parent)| match parent {
                Some(p) => format!(r#"{{"id": {}, "parent_id": {}, "title": "n{}"}}"#, i + 1, p, i),
                None => format!(r#"{{"id": {}, "parent_id": null, "title": "n{}"}}"#, i + 1, i),
            })
            .collect();
        let content = format!(r#"{{"items": [{}]}}"#, items.join(","));

        let nodes = JsonMenuRepository::new()
            .parse(&content, Path::new("menu.json"))
            .expect("generated payload is valid");
        prop_assert_eq!(nodes.len(), parents.len());
        let tree = build_navigation_tree(&nodes, true, &Default::default());
        let total: usize = tree.iter().map(|n| n.total_count()).sum();
        prop_assert_eq!(total, parents.len());
    }

    /// PROPERTY: category payloads and uid decoding never panic
    #[test]
    fn property_category_parse_never_panics(content in ".{0,200}", uid in ".{0,24}") {
        if let Ok(roots) = JsonCategoryRepository::new().parse(&content, Path::new("categories.json")) {
            let _ = build_category_url_map(&roots);
        }
        let _ = decode_uid(&uid);
    }
}
