//! Menu index - parent/children reconstruction for the flat menu list
//!
//! Both builders read the flat list through this index so the root-bucket
//! merge happens exactly once, at ingestion:
//!
//! - `parent_id` of `null` or `0` -> root
//! - self-referencing or dangling `parent_id` -> root (orphan)
//! - a parent cycle -> the first cycle member met while walking up from the
//!   earliest unreachable node becomes a root
//! - a repeated `id` -> the first occurrence wins, later ones are dropped
//!
//! After construction every node sits in exactly one children list and the
//! parent links form a forest, so walking it always terminates.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::MenuNode;
use crate::domain::value_objects::ParentKey;

/// Parent -> ordered children index over a borrowed node list
#[derive(Debug, Clone)]
pub struct MenuIndex<'a> {
    nodes: &'a [MenuNode],
    children: HashMap<ParentKey, Vec<usize>>,
    orphans: Vec<usize>,
}

impl<'a> MenuIndex<'a> {
    /// Index the nodes; children lists are ordered by `position`, then input order
    pub fn new(nodes: &'a [MenuNode]) -> Self {
        let mut first_index: HashMap<i64, usize> = HashMap::with_capacity(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            first_index.entry(node.id()).or_insert(idx);
        }
        let parents: Vec<ParentKey> = nodes
            .iter()
            .map(|n| effective_parent(n, &first_index))
            .collect();
        let mut children: HashMap<ParentKey, Vec<usize>> = HashMap::new();
        let mut orphans = Vec::new();
        let mut dropped = vec![false; nodes.len()];

        for (idx, node) in nodes.iter().enumerate() {
            if first_index[&node.id()] != idx {
                tracing::warn!(node_id = node.id(), "duplicate menu node id, keeping the first one");
                dropped[idx] = true;
                continue;
            }
            if parents[idx].is_root() && !node.declared_parent().is_root() {
                orphans.push(idx);
            }
            children.entry(parents[idx]).or_default().push(idx);
        }

        let mut index = Self {
            nodes,
            children,
            orphans,
        };
        index.break_cycles(&parents, &first_index, dropped);
        for list in index.children.values_mut() {
            list.sort_by_key(|&i| (nodes[i].position(), i));
        }
        index
    }

    /// Root-bucket nodes in display order
    pub fn roots(&self) -> impl Iterator<Item = &'a MenuNode> + '_ {
        self.bucket(ParentKey::Root)
    }

    /// Direct children of a node in display order
    pub fn children_of(&self, id: i64) -> impl Iterator<Item = &'a MenuNode> + '_ {
        self.bucket(ParentKey::Node(id))
    }

    pub fn has_children(&self, id: i64) -> bool {
        self.children
            .get(&ParentKey::Node(id))
            .is_some_and(|c| !c.is_empty())
    }

    /// First `count` root nodes, for a compact desktop bar
    pub fn leading_roots(&self, count: usize) -> Vec<&'a MenuNode> {
        self.roots().take(count).collect()
    }

    /// Nodes that declared a parent but were moved to the root bucket
    pub fn orphans(&self) -> impl Iterator<Item = &'a MenuNode> + '_ {
        let nodes = self.nodes;
        self.orphans.iter().map(move |&i| &nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in a parent bucket, in display order
    pub fn bucket(&self, key: ParentKey) -> impl Iterator<Item = &'a MenuNode> + '_ {
        let nodes = self.nodes;
        self.children
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&i| &nodes[i])
    }

    /// Promote one node per unreachable parent cycle to the root bucket
    ///
    /// `reached` starts with the dropped duplicates set so they are never walked.
    fn break_cycles(
        &mut self,
        parents: &[ParentKey],
        first_index: &HashMap<i64, usize>,
        mut reached: Vec<bool>,
    ) {
        let nodes = self.nodes;
        self.mark_reachable(ParentKey::Root, &mut reached);

        for start in 0..nodes.len() {
            if reached[start] {
                continue;
            }
            let promoted = find_cycle_member(start, parents, first_index, &reached);
            let node = &nodes[promoted];
            tracing::warn!(
                node_id = node.id(),
                parent = %parents[promoted],
                "menu node is part of a parent cycle, treating it as a root"
            );
            if let Some(siblings) = self.children.get_mut(&parents[promoted]) {
                siblings.retain(|&i| i != promoted);
            }
            self.children.entry(ParentKey::Root).or_default().push(promoted);
            self.orphans.push(promoted);
            reached[promoted] = true;
            self.mark_reachable(ParentKey::Node(node.id()), &mut reached);
        }
    }

    fn mark_reachable(&self, from: ParentKey, reached: &mut [bool]) {
        let mut stack = vec![from];
        while let Some(key) = stack.pop() {
            let Some(list) = self.children.get(&key) else {
                continue;
            };
            for &i in list {
                if !reached[i] {
                    reached[i] = true;
                    stack.push(ParentKey::Node(self.nodes[i].id()));
                }
            }
        }
    }
}

/// Walk up from an unreachable node until a node repeats; that node is on the cycle
fn find_cycle_member(
    start: usize,
    parents: &[ParentKey],
    first_index: &HashMap<i64, usize>,
    reached: &[bool],
) -> usize {
    let mut seen = HashSet::new();
    let mut current = start;
    loop {
        if !seen.insert(current) {
            return current;
        }
        let next = match parents[current] {
            ParentKey::Node(parent) => first_index.get(&parent).copied(),
            ParentKey::Root => None,
        };
        match next {
            Some(next) if !reached[next] => current = next,
            _ => return start,
        }
    }
}

fn effective_parent(node: &MenuNode, ids: &HashMap<i64, usize>) -> ParentKey {
    match node.declared_parent() {
        ParentKey::Node(parent) if parent == node.id() => {
            tracing::warn!(node_id = node.id(), "menu node is its own parent, treating it as a root");
            ParentKey::Root
        }
        ParentKey::Node(parent) if !ids.contains_key(&parent) => {
            tracing::warn!(
                node_id = node.id(),
                parent_id = parent,
                "menu node references a missing parent, treating it as a root"
            );
            ParentKey::Root
        }
        key => key,
    }
}
