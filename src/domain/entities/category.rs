//! CategoryNode entity - nested catalog category
//!
//! Categories arrive as their own tree, independent of the menu. Only the
//! encoded uid and the url path matter for link resolution.
//!
//! Parsed payloads stay within serde_json's nesting limit, but trees built in
//! code can be any depth; dropping one never recurses.

use serde::{Deserialize, Serialize};

/// A category in the nested catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Encoded category id
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub url_path: Option<String>,
    #[serde(default, deserialize_with = "children_or_empty")]
    pub children: Vec<Option<CategoryNode>>,
}

impl CategoryNode {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: None,
            url_path: None,
            children: Vec::new(),
        }
    }

    pub fn with_url_path(mut self, url_path: impl Into<String>) -> Self {
        self.url_path = Some(url_path.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_child(mut self, child: CategoryNode) -> Self {
        self.children.push(Some(child));
        self
    }

    /// Url path, if present and non-empty
    pub fn url_path(&self) -> Option<&str> {
        self.url_path.as_deref().filter(|p| !p.is_empty())
    }

    /// Non-null children
    pub fn children(&self) -> impl Iterator<Item = &CategoryNode> {
        self.children.iter().flatten()
    }
}

impl Drop for CategoryNode {
    fn drop(&mut self) {
        let mut pending: Vec<CategoryNode> = self.children.drain(..).flatten().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain(..).flatten());
        }
    }
}

/// `children: null` is treated as no children
fn children_or_empty<'de, D>(deserializer: D) -> Result<Vec<Option<CategoryNode>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Option<CategoryNode>>>::deserialize(deserializer)?.unwrap_or_default())
}
