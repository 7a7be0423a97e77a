//! Property tests for the flat-to-tree builder and the mega menu grouper.

use std::collections::HashSet;

use proptest::prelude::*;

use navweave::{
    build_mega_menu, build_navigation_tree, CategoryUrlMap, MenuIndex, MenuNode, MenuNodeKind,
    NavigationTreeNode,
};

/// Flat menus with unique ids and arbitrary, possibly broken, parent links
fn flat_menu() -> impl Strategy<Value = Vec<MenuNode>> {
    proptest::collection::vec(
        (
            prop_oneof![Just(None), Just(Some(0i64)), (1i64..=40).prop_map(Some)],
            -3i64..6,
            any::<bool>(),
            proptest::option::of("[a-z]{1,6}"),
        ),
        0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (parent, position, is_wrapper, title))| {
                let kind = if is_wrapper {
                    MenuNodeKind::Wrapper
                } else {
                    MenuNodeKind::Link
                };
                let mut node = MenuNode::new(i as i64 + 1, kind)
                    .with_parent(parent)
                    .with_position(position);
                if let Some(title) = title {
                    node = node.with_title(title.clone()).with_url_key(title);
                }
                node
            })
            .collect()
    })
}

fn collect_ids(nodes: &[NavigationTreeNode], out: &mut Vec<String>) {
    for node in nodes {
        out.push(node.id().to_string());
        collect_ids(node.children(), out);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every non-wrapper node appears exactly once, wrappers never appear
    #[test]
    fn property_tree_contains_each_visible_node_once(nodes in flat_menu()) {
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());

        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        let unique: HashSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());

        let expected: HashSet<String> = nodes
            .iter()
            .filter(|n| !n.is_transparent_wrapper())
            .map(|n| format!("menu-{}", n.id()))
            .collect();
        let actual: HashSet<String> = ids.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: the index places every node in exactly one children list
    #[test]
    fn property_index_is_a_forest(nodes in flat_menu()) {
        let index = MenuIndex::new(&nodes);

        let mut seen = HashSet::new();
        let mut stack: Vec<i64> = index.roots().map(MenuNode::id).collect();
        while let Some(id) = stack.pop() {
            prop_assert!(seen.insert(id), "node {} reached twice", id);
            stack.extend(index.children_of(id).map(MenuNode::id));
        }
        prop_assert_eq!(seen.len(), nodes.len());
    }

    /// PROPERTY: expandable nodes always have children, links never do
    #[test]
    fn property_expandable_iff_children(nodes in flat_menu()) {
        fn check(nodes: &[NavigationTreeNode]) -> bool {
            nodes.iter().all(|n| n.is_expandable() == !n.children().is_empty() && check(n.children()))
        }
        let tree = build_navigation_tree(&nodes, true, &CategoryUrlMap::new());
        prop_assert!(check(&tree));
    }

    /// PROPERTY: dropping the root level equals concatenating the roots' children
    #[test]
    fn property_without_root_is_root_children(nodes in flat_menu()) {
        let categories = CategoryUrlMap::new();
        let with_root = build_navigation_tree(&nodes, true, &categories);
        let without_root = build_navigation_tree(&nodes, false, &categories);

        let concatenated: Vec<NavigationTreeNode> = with_root
            .iter()
            .flat_map(|n| n.children().to_vec())
            .collect();
        prop_assert_eq!(without_root, concatenated);
    }

    /// PROPERTY: columns respect the size limit and keep every child in order
    #[test]
    fn property_mega_menu_columns_are_bounded(nodes in flat_menu()) {
        let menu = build_mega_menu(&nodes, &CategoryUrlMap::new());
        let index = MenuIndex::new(&nodes);

        prop_assert_eq!(menu.len(), index.roots().count());
        for (item, root) in menu.iter().zip(index.roots()) {
            prop_assert!(item.columns.iter().all(|c| !c.is_empty() && c.len() <= 8));
            let entries: Vec<&str> = item.entries().map(|e| e.title.as_str()).collect();
            let children: Vec<&str> = index.children_of(root.id()).map(MenuNode::label).collect();
            prop_assert_eq!(entries, children);

            for entry in item.entries() {
                prop_assert!(entry.visible_children.len() <= 5);
                prop_assert_eq!(entry.has_more, entry.view_all.is_some());
            }
        }
    }
}
