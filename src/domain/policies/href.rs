//! Href resolution policy
//!
//! Turns a menu node into a link target. First match wins:
//!
//! 1. category node whose reference is in the category map -> `/<url_path>`
//! 2. no url key -> `#`
//! 3. absolute `http(s)://` url or in-page `#anchor` -> unchanged
//! 4. already rooted at `/` -> unchanged
//! 5. anything else -> prefixed with `/`

use crate::domain::entities::MenuNode;
use crate::domain::services::CategoryUrlMap;

/// Href for nodes that cannot navigate anywhere
pub const PLACEHOLDER_HREF: &str = "#";

const ABSOLUTE_PREFIXES: [&str; 3] = ["http://", "https://", "#"];

/// Resolve the link target of a menu node
pub fn resolve_href(node: &MenuNode, categories: &CategoryUrlMap) -> String {
    if let Some(reference) = node.kind().category_reference() {
        if let Some(url_path) = categories.resolve_reference(reference) {
            return format!("/{}", url_path);
        }
        tracing::debug!(
            node_id = node.id(),
            reference,
            "category reference not found, falling back to url key"
        );
    }

    match node.url_key() {
        Some(url_key) => normalize_url_key(url_key),
        None => PLACEHOLDER_HREF.to_string(),
    }
}

/// Apply rules 3-5 to a raw url key
pub fn normalize_url_key(url_key: &str) -> String {
    if is_passthrough(url_key) {
        url_key.to_string()
    } else {
        format!("/{}", url_key)
    }
}

fn is_passthrough(url_key: &str) -> bool {
    url_key.starts_with('/') || ABSOLUTE_PREFIXES.iter().any(|p| url_key.starts_with(p))
}
