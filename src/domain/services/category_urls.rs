//! Category URL resolver
//!
//! Walks the nested catalog tree and records `decoded uid -> url path` so menu
//! nodes that only reference a category can still link somewhere.

use std::collections::HashMap;

use crate::domain::entities::CategoryNode;
use crate::domain::value_objects::{decode_uid, try_decode_uid};

/// Lookup table from decoded category id to url path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryUrlMap {
    paths: HashMap<String, String>,
}

impl CategoryUrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Url path for an already-decoded category id
    pub fn get(&self, category_id: &str) -> Option<&str> {
        self.paths.get(category_id).map(String::as_str)
    }

    /// Url path for a menu node's category reference.
    ///
    /// Tries the decoded reference first, then the raw value (menu nodes often
    /// carry the plain numeric id rather than the encoded uid).
    pub fn resolve_reference(&self, reference: &str) -> Option<&str> {
        try_decode_uid(reference)
            .and_then(|decoded| self.get(&decoded))
            .or_else(|| self.get(reference))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Entries sorted by category id, for stable listings
    pub fn sorted_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .paths
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort();
        entries
    }

    fn insert(&mut self, category_id: String, url_path: &str) {
        if let Some(previous) = self.paths.insert(category_id.clone(), url_path.to_string()) {
            tracing::debug!(
                category_id = %category_id,
                previous = %previous,
                url_path,
                "duplicate category id, keeping the last url path"
            );
        }
    }
}

impl FromIterator<(String, String)> for CategoryUrlMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

/// Build the lookup table from the top-level categories.
///
/// Nodes without a usable url path are skipped, but their children are still
/// visited. Uses an explicit stack, so depth is bounded only by memory.
pub fn build_category_url_map<'a, I>(roots: I) -> CategoryUrlMap
where
    I: IntoIterator<Item = &'a CategoryNode>,
{
    let mut map = CategoryUrlMap::new();
    let mut stack: Vec<&CategoryNode> = roots.into_iter().collect();

    while let Some(node) = stack.pop() {
        if let Some(url_path) = node.url_path() {
            map.insert(decode_uid(&node.uid), url_path);
        }
        stack.extend(node.children());
    }

    map
}
