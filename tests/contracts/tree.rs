//! Tree builder contracts (TREE-001 through TREE-006)

use navweave::domain::policies::normalize_url_key;
use navweave::{build_navigation_tree, CategoryUrlMap, MenuNode, NavigationTreeNode};

use crate::common::*;

fn labels(nodes: &[NavigationTreeNode]) -> Vec<&str> {
    nodes.iter().map(NavigationTreeNode::label).collect()
}

fn all_ids(nodes: &[NavigationTreeNode], out: &mut Vec<String>) {
    for node in nodes {
        out.push(node.id().to_string());
        all_ids(node.children(), out);
    }
}

/// CONTRACT TREE-001: `parent_id` null and `parent_id` 0 are the same root bucket
mod root_bucket {
    use super::*;

    #[test]
    fn contract_null_and_zero_roots_interleave_by_position() {
        let nodes = vec![
            link(1, None, 3, "C"),
            link(2, Some(0), 0, "A"),
            link(3, None, 1, "B"),
            link(4, Some(0), 4, "D"),
        ];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());
        assert_eq!(labels(&tree), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn contract_merging_is_independent_of_which_marker_is_used() {
        let with_null: Vec<MenuNode> = (1..=4).map(|i| link(i, None, 4 - i, &format!("n{}", i))).collect();
        let with_zero: Vec<MenuNode> = (1..=4).map(|i| link(i, Some(0), 4 - i, &format!("n{}", i))).collect();

        assert_eq!(
            build_navigation_tree(&with_null, true, &CategoryUrlMap::new()),
            build_navigation_tree(&with_zero, true, &CategoryUrlMap::new())
        );
    }
}

/// CONTRACT TREE-002: siblings are ordered by position, ties keep input order
mod ordering {
    use super::*;

    #[test]
    fn contract_ties_keep_input_order() {
        let nodes = vec![
            link(1, None, 0, "Top"),
            link(10, Some(1), 5, "First"),
            link(11, Some(1), 5, "Second"),
            link(12, Some(1), -1, "Negative"),
            link(13, Some(1), 5, "Third"),
        ];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());
        assert_eq!(
            labels(tree[0].children()),
            vec!["Negative", "First", "Second", "Third"]
        );
    }
}

/// CONTRACT TREE-003: title-less wrappers are transparent
mod wrappers {
    use super::*;

    #[test]
    fn contract_wrapper_children_replace_the_wrapper_in_place() {
        let nodes = vec![
            link(1, None, 0, "Top"),
            link(2, Some(1), 0, "Before"),
            wrapper(3, Some(1), 1),
            link(4, Some(3), 0, "Inside"),
            wrapper(5, Some(3), 1),
            link(6, Some(5), 0, "Deep"),
            link(7, Some(1), 2, "After"),
        ];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());

        assert_eq!(
            labels(tree[0].children()),
            vec!["Before", "Inside", "Deep", "After"]
        );
        let mut ids = Vec::new();
        all_ids(&tree, &mut ids);
        assert!(!ids.contains(&"menu-3".to_string()));
        assert!(!ids.contains(&"menu-5".to_string()));
    }

    #[test]
    fn contract_root_level_wrapper_is_transparent() {
        let nodes = vec![wrapper(1, None, 0), link(2, Some(1), 0, "A"), link(3, None, 1, "B")];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());
        assert_eq!(labels(&tree), vec!["A", "B"]);
    }
}

/// CONTRACT TREE-004: a node appears at most once, even with broken parents
mod well_formed {
    use super::*;

    #[test]
    fn contract_cycles_and_dangling_parents_still_produce_every_node_once() {
        let nodes = vec![
            link(1, Some(2), 0, "A"),
            link(2, Some(3), 0, "B"),
            link(3, Some(1), 0, "C"),
            link(4, Some(4), 0, "Self"),
            link(5, Some(404), 0, "Dangling"),
        ];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());

        let mut ids = Vec::new();
        all_ids(&tree, &mut ids);
        ids.sort();
        assert_eq!(ids, vec!["menu-1", "menu-2", "menu-3", "menu-4", "menu-5"]);
    }

    #[test]
    fn contract_leaves_link_and_parents_expand() {
        let nodes = vec![link(1, None, 0, "Parent"), link(2, Some(1), 0, "Leaf")];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());

        assert!(tree[0].is_expandable());
        assert_eq!(tree[0].href(), Some("/parent"));
        assert!(!tree[0].children()[0].is_expandable());
        assert_eq!(tree[0].children()[0].href(), Some("/leaf"));
    }

    #[test]
    fn contract_parent_without_target_expands_without_href() {
        let nodes = vec![
            MenuNode::new(1, navweave::MenuNodeKind::Link).with_title("Parent"),
            link(2, Some(1), 0, "Leaf"),
        ];
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());

        assert!(tree[0].is_expandable());
        assert_eq!(tree[0].href(), None);
    }
}

/// CONTRACT TREE-005: empty input yields empty output
mod empty {
    use super::*;

    #[test]
    fn contract_empty_menu_builds_nothing() {
        assert!(build_navigation_tree(&[], true, &CategoryUrlMap::new()).is_empty());
        assert!(build_navigation_tree(&[], false, &CategoryUrlMap::new()).is_empty());
    }

    #[test]
    fn contract_hrefs_are_already_normalized() {
        let nodes = vec![
            link(1, None, 0, "A"),
            MenuNode::new(2, navweave::MenuNodeKind::Link).with_url_key("/rooted"),
            MenuNode::new(3, navweave::MenuNodeKind::Link).with_url_key("#top"),
        ];
        for node in build_navigation_tree(&nodes, true, &CategoryUrlMap::new()) {
            let href = node.href().unwrap_or_default().to_string();
            if href != "#" {
                assert_eq!(normalize_url_key(&href), href);
            }
        }
    }
}

/// CONTRACT TREE-006: depth is bounded by memory, not the call stack
mod depth {
    use super::*;

    fn chain(len: i64) -> Vec<MenuNode> {
        (1..=len).map(|id| link(id, Some(id - 1), 0, "Level")).collect()
    }

    #[test]
    fn contract_long_parent_chain_builds_and_drops() {
        let tree = build_navigation_tree(&chain(100_000), true, &CategoryUrlMap::new());

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].depth(), 100_000);
        assert_eq!(tree[0].total_count(), 100_000);

        let mut node = &tree[0];
        while let Some(child) = node.children().first() {
            node = child;
        }
        assert_eq!(node.id(), "menu-100000");
    }

    #[test]
    fn contract_long_chain_without_root_drops_one_level() {
        let tree = build_navigation_tree(&chain(100_000), false, &CategoryUrlMap::new());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].depth(), 99_999);
    }
}
