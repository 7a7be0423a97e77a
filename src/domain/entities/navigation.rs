//! NavigationTreeNode entity - output of the flat-to-tree builder
//!
//! A node is either a plain link or an expandable group. A node with at least
//! one child is always expandable; it keeps its own link target when it has one.
//!
//! Counting, depth and drop walk the tree with an explicit stack, so a chain
//! of any depth is safe to hold and inspect.

use serde::Serialize;

/// A node in the nested navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationTreeNode {
    /// Leaf link
    Link {
        id: String,
        label: String,
        href: String,
    },
    /// Expandable group, optionally linking to its own page
    Expandable {
        id: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        children: Vec<NavigationTreeNode>,
    },
}

impl NavigationTreeNode {
    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        NavigationTreeNode::Link {
            id: id.into(),
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            NavigationTreeNode::Link { id, .. } | NavigationTreeNode::Expandable { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavigationTreeNode::Link { label, .. }
            | NavigationTreeNode::Expandable { label, .. } => label,
        }
    }

    /// Link target; `None` for a group without a page of its own
    pub fn href(&self) -> Option<&str> {
        match self {
            NavigationTreeNode::Link { href, .. } => Some(href),
            NavigationTreeNode::Expandable { href, .. } => href.as_deref(),
        }
    }

    /// Children of an expandable node; empty for leaves
    pub fn children(&self) -> &[NavigationTreeNode] {
        match self {
            NavigationTreeNode::Link { .. } => &[],
            NavigationTreeNode::Expandable { children, .. } => children,
        }
    }

    /// Detach the children, leaving an empty group behind
    pub fn take_children(&mut self) -> Vec<NavigationTreeNode> {
        match self {
            NavigationTreeNode::Link { .. } => Vec::new(),
            NavigationTreeNode::Expandable { children, .. } => std::mem::take(children),
        }
    }

    pub fn is_expandable(&self) -> bool {
        matches!(self, NavigationTreeNode::Expandable { .. })
    }

    /// Number of nodes in this subtree, including self
    pub fn total_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }

    /// Longest path from this node to a leaf (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

impl Drop for NavigationTreeNode {
    fn drop(&mut self) {
        let mut pending = self.take_children();
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.take_children());
        }
    }
}
