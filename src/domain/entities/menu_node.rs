//! MenuNode entity - one element of the flat upstream menu list
//!
//! Hierarchy is encoded only through `parent_id`; nesting is reconstructed by
//! [`MenuIndex`](crate::domain::services::MenuIndex).

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MenuNodeKind, ParentKey};

/// A flat menu node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMenuNode", into = "RawMenuNode")]
pub struct MenuNode {
    id: i64,
    parent_id: Option<i64>,
    position: i64,
    kind: MenuNodeKind,
    title: Option<String>,
    url_key: Option<String>,
}

impl MenuNode {
    /// Create a root-level node at position 0
    pub fn new(id: i64, kind: MenuNodeKind) -> Self {
        Self {
            id,
            parent_id: None,
            position: 0,
            kind,
            title: None,
            url_key: None,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<i64>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = Some(url_key.into());
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Raw upstream parent id (`None` and `Some(0)` both mean root)
    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    /// Declared parent bucket, before orphan detection
    pub fn declared_parent(&self) -> ParentKey {
        ParentKey::from_raw(self.parent_id)
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn kind(&self) -> &MenuNodeKind {
        &self.kind
    }

    /// Title, if present and non-empty
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Title or the empty string
    pub fn label(&self) -> &str {
        self.title().unwrap_or_default()
    }

    /// URL key, if present and non-empty
    pub fn url_key(&self) -> Option<&str> {
        self.url_key.as_deref().filter(|u| !u.is_empty())
    }

    /// Structural wrapper with nothing to display
    pub fn is_transparent_wrapper(&self) -> bool {
        self.kind.is_wrapper() && self.title().is_none()
    }
}

/// Upstream wire shape; accepts both snake_case and camelCase field names
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawMenuNode {
    #[serde(alias = "id")]
    node_id: i64,
    #[serde(default, alias = "parentId")]
    parent_id: Option<i64>,
    #[serde(default)]
    position: Option<i64>,
    #[serde(default, rename = "type")]
    node_type: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "urlKey")]
    url_key: Option<String>,
    #[serde(default, alias = "categoryRef", skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl From<RawMenuNode> for MenuNode {
    fn from(raw: RawMenuNode) -> Self {
        Self {
            id: raw.node_id,
            parent_id: raw.parent_id,
            position: raw.position.unwrap_or_default(),
            kind: MenuNodeKind::from_tag(raw.node_type.as_deref(), raw.content),
            title: raw.title,
            url_key: raw.url_key,
        }
    }
}

impl From<MenuNode> for RawMenuNode {
    fn from(node: MenuNode) -> Self {
        Self {
            node_id: node.id,
            parent_id: node.parent_id,
            position: Some(node.position),
            node_type: Some(node.kind.tag().to_string()),
            content: node.kind.category_reference().map(str::to_string),
            title: node.title,
            url_key: node.url_key,
        }
    }
}
