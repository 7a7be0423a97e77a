//! Navigation results

use serde::Serialize;

use crate::domain::entities::{NavigationTreeNode, RootItem};
use crate::error::{NavError, NavResult};

/// Result of building the nested tree
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeResult {
    pub tree: Vec<NavigationTreeNode>,
    /// Menu nodes read from the input
    pub input_nodes: usize,
    /// Nodes that were moved to the root bucket
    pub orphans: Vec<i64>,
}

impl TreeResult {
    /// Deepest tree the printers accept; serialization recurses once per level
    pub const MAX_OUTPUT_DEPTH: usize = 64;

    /// Nodes in the output tree
    pub fn output_nodes(&self) -> usize {
        self.tree.iter().map(NavigationTreeNode::total_count).sum()
    }

    /// Levels in the deepest branch; 0 for an empty tree
    pub fn depth(&self) -> usize {
        self.tree.iter().map(NavigationTreeNode::depth).max().unwrap_or(0)
    }

    /// Fail with `TreeTooDeep` when the tree cannot be printed
    pub fn ensure_printable(&self) -> NavResult<()> {
        let depth = self.depth();
        if depth > Self::MAX_OUTPUT_DEPTH {
            return Err(NavError::TreeTooDeep {
                depth,
                limit: Self::MAX_OUTPUT_DEPTH,
            });
        }
        Ok(())
    }
}

/// Result of grouping the mega menu
#[derive(Debug, Clone, Default, Serialize)]
pub struct MegaMenuResult {
    pub roots: Vec<RootItem>,
    pub orphans: Vec<i64>,
}

impl MegaMenuResult {
    pub fn panel_count(&self) -> usize {
        self.roots.iter().filter(|r| r.has_panel()).count()
    }
}

/// A root shown in the compact desktop bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootSummary {
    pub id: i64,
    pub title: String,
    pub href: String,
    pub has_children: bool,
}
