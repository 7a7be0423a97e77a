//! Flat-to-tree builder
//!
//! Materializes the flat menu into nested [`NavigationTreeNode`]s for the
//! expandable navigation overlay.
//!
//! The walk keeps its own stack of open nodes and finishes each one after its
//! children, so menu depth is bounded by memory rather than the call stack.

use crate::domain::entities::{MenuNode, NavigationTreeNode};
use crate::domain::policies::{resolve_href, PLACEHOLDER_HREF};
use crate::domain::value_objects::ParentKey;

use super::category_urls::CategoryUrlMap;
use super::menu_index::MenuIndex;

/// Prefix for generated navigation node ids
pub const DEFAULT_ID_PREFIX: &str = "menu";

/// Build the nested navigation tree.
///
/// With `include_root = false` the top level is dropped and the children of
/// every root are returned instead (roots without children contribute nothing).
pub fn build_navigation_tree(
    nodes: &[MenuNode],
    include_root: bool,
    categories: &CategoryUrlMap,
) -> Vec<NavigationTreeNode> {
    NavigationBuilder::new(categories)
        .with_include_root(include_root)
        .build(nodes)
}

/// Configurable tree builder
#[derive(Debug, Clone)]
pub struct NavigationBuilder<'c> {
    categories: &'c CategoryUrlMap,
    include_root: bool,
    id_prefix: String,
}

/// A node whose children are still being materialized
struct OpenNode<'a> {
    node: &'a MenuNode,
    pending: std::vec::IntoIter<&'a MenuNode>,
    done: Vec<NavigationTreeNode>,
}

impl<'c> NavigationBuilder<'c> {
    pub fn new(categories: &'c CategoryUrlMap) -> Self {
        Self {
            categories,
            include_root: true,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }

    pub fn with_include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn build(&self, nodes: &[MenuNode]) -> Vec<NavigationTreeNode> {
        let index = MenuIndex::new(nodes);
        self.build_from_index(&index)
    }

    pub fn build_from_index(&self, index: &MenuIndex<'_>) -> Vec<NavigationTreeNode> {
        let roots = self.materialize(index);

        if self.include_root {
            return roots;
        }

        roots
            .into_iter()
            .flat_map(|mut root| root.take_children())
            .collect()
    }

    /// Post-order walk from the root bucket
    fn materialize<'a>(&self, index: &MenuIndex<'a>) -> Vec<NavigationTreeNode> {
        let mut top_level = Vec::new();
        let mut roots = visible_children(index, ParentKey::Root).into_iter();
        let mut open: Vec<OpenNode<'a>> = Vec::new();

        loop {
            let next = match open.last_mut() {
                Some(parent) => parent.pending.next(),
                None => roots.next(),
            };

            if let Some(node) = next {
                open.push(OpenNode {
                    node,
                    pending: visible_children(index, ParentKey::Node(node.id())).into_iter(),
                    done: Vec::new(),
                });
                continue;
            }

            let Some(finished) = open.pop() else {
                break;
            };
            let built = self.output_node(finished.node, finished.done);
            match open.last_mut() {
                Some(parent) => parent.done.push(built),
                None => top_level.push(built),
            }
        }

        top_level
    }

    fn output_node(&self, node: &MenuNode, children: Vec<NavigationTreeNode>) -> NavigationTreeNode {
        let id = format!("{}-{}", self.id_prefix, node.id());
        let label = node.label().to_string();
        let href = resolve_href(node, self.categories);

        if children.is_empty() {
            NavigationTreeNode::Link { id, label, href }
        } else {
            NavigationTreeNode::Expandable {
                id,
                label,
                href: (href != PLACEHOLDER_HREF).then_some(href),
                children,
            }
        }
    }
}

/// Nodes shown under `parent`, with title-less wrappers replaced by their contents
fn visible_children<'a>(index: &MenuIndex<'a>, parent: ParentKey) -> Vec<&'a MenuNode> {
    let mut shown = Vec::new();
    let mut levels = vec![index.bucket(parent)];

    while let Some(level) = levels.last_mut() {
        match level.next() {
            Some(node) if node.is_transparent_wrapper() => {
                levels.push(index.bucket(ParentKey::Node(node.id())));
            }
            Some(node) => shown.push(node),
            None => {
                levels.pop();
            }
        }
    }

    shown
}
