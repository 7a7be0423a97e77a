//! Mega menu entities - output of the column grouper
//!
//! Root items sit inline in the desktop bar; each opens a panel whose columns
//! hold the root's children, each child listing a capped set of grandchildren.

use serde::Serialize;

/// A titled link inside a panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubLink {
    pub title: String,
    pub href: String,
}

impl SubLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

/// One child of a root item, shown as a heading inside a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnEntry {
    pub title: String,
    pub href: String,
    /// First grandchildren, in position order
    pub visible_children: Vec<SubLink>,
    /// More grandchildren exist than are visible
    pub has_more: bool,
    /// Synthetic "view all" link to this entry's own href, when `has_more`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all: Option<SubLink>,
}

impl ColumnEntry {
    /// Links as displayed: visible grandchildren, then "view all" if any
    pub fn displayed_links(&self) -> impl Iterator<Item = &SubLink> {
        self.visible_children.iter().chain(self.view_all.iter())
    }
}

/// A fixed-size column of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MegaMenuColumn {
    pub entries: Vec<ColumnEntry>,
}

impl MegaMenuColumn {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A top-level item of the desktop bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootItem {
    pub title: String,
    pub href: String,
    pub columns: Vec<MegaMenuColumn>,
}

impl RootItem {
    /// Whether hovering this item should open a panel
    pub fn has_panel(&self) -> bool {
        !self.columns.is_empty()
    }

    /// All entries across columns, in order
    pub fn entries(&self) -> impl Iterator<Item = &ColumnEntry> {
        self.columns.iter().flat_map(|c| c.entries.iter())
    }
}
