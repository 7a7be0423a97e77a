//! Mega menu grouper
//!
//! Root items are shown inline; each root's children are chunked into
//! fixed-size columns, and each child lists its first few grandchildren
//! followed by a "view all" link when some are hidden.

use crate::domain::entities::{ColumnEntry, MegaMenuColumn, MenuNode, RootItem, SubLink};
use crate::domain::policies::resolve_href;

use super::category_urls::CategoryUrlMap;
use super::menu_index::MenuIndex;

/// Limits that shape the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MegaMenuLayout {
    /// Entries per column
    pub items_per_column: usize,
    /// Grandchildren shown before collapsing into "view all"
    pub visible_children: usize,
    /// Label of the synthetic "view all" link
    pub view_all_label: String,
}

impl MegaMenuLayout {
    pub const DEFAULT_ITEMS_PER_COLUMN: usize = 8;
    pub const DEFAULT_VISIBLE_CHILDREN: usize = 5;
    pub const DEFAULT_VIEW_ALL_LABEL: &'static str = "View all...";
}

impl Default for MegaMenuLayout {
    fn default() -> Self {
        Self {
            items_per_column: Self::DEFAULT_ITEMS_PER_COLUMN,
            visible_children: Self::DEFAULT_VISIBLE_CHILDREN,
            view_all_label: Self::DEFAULT_VIEW_ALL_LABEL.to_string(),
        }
    }
}

/// Build the mega menu with default limits (8 per column, 5 grandchildren)
pub fn build_mega_menu(nodes: &[MenuNode], categories: &CategoryUrlMap) -> Vec<RootItem> {
    build_mega_menu_with(nodes, categories, &MegaMenuLayout::default())
}

/// Build the mega menu with explicit limits
pub fn build_mega_menu_with(
    nodes: &[MenuNode],
    categories: &CategoryUrlMap,
    layout: &MegaMenuLayout,
) -> Vec<RootItem> {
    let index = MenuIndex::new(nodes);
    group_from_index(&index, categories, layout)
}

/// Group an already-built index
pub fn group_from_index(
    index: &MenuIndex<'_>,
    categories: &CategoryUrlMap,
    layout: &MegaMenuLayout,
) -> Vec<RootItem> {
    // a zero-sized column would never advance
    let per_column = layout.items_per_column.max(1);

    index
        .roots()
        .map(|root| {
            let entries: Vec<ColumnEntry> = index
                .children_of(root.id())
                .map(|child| column_entry(index, child, categories, layout))
                .collect();

            let columns = entries
                .chunks(per_column)
                .map(|chunk| MegaMenuColumn {
                    entries: chunk.to_vec(),
                })
                .collect();

            RootItem {
                title: root.label().to_string(),
                href: resolve_href(root, categories),
                columns,
            }
        })
        .collect()
}

fn column_entry(
    index: &MenuIndex<'_>,
    child: &MenuNode,
    categories: &CategoryUrlMap,
    layout: &MegaMenuLayout,
) -> ColumnEntry {
    let href = resolve_href(child, categories);
    let mut grandchildren = index.children_of(child.id());

    let visible_children: Vec<SubLink> = grandchildren
        .by_ref()
        .take(layout.visible_children)
        .map(|g| SubLink::new(g.label(), resolve_href(g, categories)))
        .collect();
    let has_more = grandchildren.next().is_some();

    ColumnEntry {
        title: child.label().to_string(),
        view_all: has_more.then(|| SubLink::new(layout.view_all_label.clone(), href.clone())),
        href,
        visible_children,
        has_more,
    }
}
