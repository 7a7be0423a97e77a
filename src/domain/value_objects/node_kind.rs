//! MenuNodeKind value object - what a flat menu node represents
//!
//! Discriminated by the upstream `type` tag. A category reference only exists
//! on the `Category` variant, so "has a reference" never depends on probing
//! optional fields.

use std::fmt;

/// Kind of a flat menu node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuNodeKind {
    /// Backed by a catalog category; `reference` is the encoded category id
    Category { reference: Option<String> },
    /// Structural grouping node
    Wrapper,
    /// Plain link (`link` or `custom_url`)
    Link,
    /// Any other upstream tag (`cms_page`, `product`, ...)
    Other(String),
}

impl MenuNodeKind {
    pub const CATEGORY: &'static str = "category";
    pub const WRAPPER: &'static str = "wrapper";
    pub const LINK: &'static str = "link";
    pub const CUSTOM_URL: &'static str = "custom_url";

    /// Classify an upstream tag; `content` is kept only for categories
    pub fn from_tag(tag: Option<&str>, content: Option<String>) -> Self {
        let tag = tag.map(str::trim).unwrap_or_default();
        match tag {
            Self::CATEGORY => MenuNodeKind::Category {
                reference: content.filter(|c| !c.trim().is_empty()),
            },
            Self::WRAPPER => MenuNodeKind::Wrapper,
            Self::LINK | Self::CUSTOM_URL => MenuNodeKind::Link,
            other => MenuNodeKind::Other(other.to_string()),
        }
    }

    /// Create a category kind with a reference
    pub fn category(reference: impl Into<String>) -> Self {
        MenuNodeKind::Category {
            reference: Some(reference.into()),
        }
    }

    /// Upstream tag for this kind
    pub fn tag(&self) -> &str {
        match self {
            MenuNodeKind::Category { .. } => Self::CATEGORY,
            MenuNodeKind::Wrapper => Self::WRAPPER,
            MenuNodeKind::Link => Self::LINK,
            MenuNodeKind::Other(tag) => tag,
        }
    }

    /// Encoded category reference, for category nodes only
    pub fn category_reference(&self) -> Option<&str> {
        match self {
            MenuNodeKind::Category { reference } => reference.as_deref(),
            _ => None,
        }
    }

    pub fn is_wrapper(&self) -> bool {
        matches!(self, MenuNodeKind::Wrapper)
    }

    pub fn is_category(&self) -> bool {
        matches!(self, MenuNodeKind::Category { .. })
    }
}

impl fmt::Display for MenuNodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
