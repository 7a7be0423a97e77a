//! Mega menu contracts (MEGA-001 through MEGA-003)

use navweave::{build_mega_menu, build_navigation_tree, CategoryUrlMap, MegaMenuColumn};

use crate::common::*;

/// CONTRACT MEGA-001: children are chunked into columns of 8, order preserved
mod columns {
    use super::*;

    #[test]
    fn contract_seventeen_children_split_eight_eight_one() {
        let menu = build_mega_menu(&root_with_children(17), &CategoryUrlMap::new());

        let sizes: Vec<usize> = menu[0].columns.iter().map(MegaMenuColumn::len).collect();
        assert_eq!(sizes, vec![8, 8, 1]);
        assert_eq!(menu[0].columns[2].entries[0].title, "Child 16");
    }

    #[test]
    fn contract_no_column_is_ever_empty() {
        for count in 0..=25 {
            let menu = build_mega_menu(&root_with_children(count), &CategoryUrlMap::new());
            assert!(menu[0].columns.iter().all(|c| !c.is_empty()));
            assert_eq!(menu[0].columns.len(), (count as usize).div_ceil(8));
        }
    }
}

/// CONTRACT MEGA-002: at most 5 grandchildren, plus "view all" only when some are hidden
mod grandchildren {
    use super::*;

    fn with_grandchildren(count: i64) -> Vec<navweave::MenuNode> {
        let mut nodes = root_with_children(1);
        nodes.extend((0..count).map(|i| link(500 + i, Some(100), i, &format!("Grand {}", i))));
        nodes
    }

    #[test]
    fn contract_seven_grandchildren_show_five_and_view_all() {
        let menu = build_mega_menu(&with_grandchildren(7), &CategoryUrlMap::new());
        let entry = &menu[0].columns[0].entries[0];

        assert_eq!(entry.visible_children.len(), 5);
        assert!(entry.has_more);
        let view_all = entry.view_all.as_ref().expect("view all link");
        assert_eq!(view_all.href, entry.href);
        assert_eq!(entry.displayed_links().count(), 6);
    }

    #[test]
    fn contract_up_to_five_grandchildren_have_no_view_all() {
        for count in 0..=5 {
            let menu = build_mega_menu(&with_grandchildren(count), &CategoryUrlMap::new());
            let entry = &menu[0].columns[0].entries[0];
            assert_eq!(entry.visible_children.len(), count as usize);
            assert!(!entry.has_more);
            assert!(entry.view_all.is_none());
        }
    }
}

/// CONTRACT MEGA-003: both outputs read the same hierarchy
mod consistency {
    use super::*;

    #[test]
    fn contract_mega_roots_match_tree_roots() {
        let nodes = vec![
            link(1, Some(0), 2, "Garden"),
            link(2, None, 0, "Lighting"),
            link(3, Some(2), 0, "Ceiling"),
            link(4, None, 1, "Sale"),
        ];
        let categories = CategoryUrlMap::new();
        let tree = build_navigation_tree(&nodes, true, &categories);
        let menu = build_mega_menu(&nodes, &categories);

        let tree_labels: Vec<&str> = tree.iter().map(|n| n.label()).collect();
        let menu_titles: Vec<&str> = menu.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(tree_labels, menu_titles);
        assert!(menu[0].has_panel());
        assert!(!menu[1].has_panel());
    }
}
