//! ParentKey value object - the bucket a menu node hangs under
//!
//! Upstream menu data uses both `null` and `0` to mean "no parent". Both
//! collapse into [`ParentKey::Root`] here, before any index is built.

use std::fmt;

/// Parent bucket of a flat menu node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParentKey {
    /// Synthetic "no parent" bucket
    Root,
    /// Child of the node with this id
    Node(i64),
}

impl ParentKey {
    /// Marker some upstream menus use instead of `null`
    pub const ZERO_MARKER: i64 = 0;

    /// Normalize a raw upstream parent id
    pub fn from_raw(parent_id: Option<i64>) -> Self {
        match parent_id {
            None | Some(Self::ZERO_MARKER) => ParentKey::Root,
            Some(id) => ParentKey::Node(id),
        }
    }

    /// Returns true for the root bucket
    pub fn is_root(&self) -> bool {
        matches!(self, ParentKey::Root)
    }

    /// Parent node id, if any
    pub fn node_id(&self) -> Option<i64> {
        match self {
            ParentKey::Root => None,
            ParentKey::Node(id) => Some(*id),
        }
    }
}

impl fmt::Display for ParentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentKey::Root => write!(f, "root"),
            ParentKey::Node(id) => write!(f, "node {}", id),
        }
    }
}
