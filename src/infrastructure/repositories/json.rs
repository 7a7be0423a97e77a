//! JSON Menu and Category Repositories
//!
//! Implements the MenuSource and CategorySource ports over JSON exports.
//! Both accept a bare array or the `{ "items": [...] }` envelope the upstream
//! query returns; `null` entries are skipped.

use crate::domain::entities::{CategoryNode, MenuNode};
use crate::domain::ports::{CategorySource, MenuSource};
use crate::error::{NavError, NavResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Envelope key holding the item array
const ITEMS_KEY: &str = "items";

/// JSON-file backed menu repository
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonMenuRepository;

impl JsonMenuRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse menu nodes from a JSON document; `origin` is used in errors
    pub fn parse(&self, content: &str, origin: &Path) -> NavResult<Vec<MenuNode>> {
        parse_items(content, origin)
    }
}

impl MenuSource for JsonMenuRepository {
    fn load_menu(&self, path: &Path) -> NavResult<Vec<MenuNode>> {
        let content = fs::read_to_string(path)?;
        let nodes = self.parse(&content, path)?;
        tracing::debug!(path = %path.display(), count = nodes.len(), "loaded menu nodes");
        Ok(nodes)
    }
}

/// JSON-file backed category repository
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCategoryRepository;

impl JsonCategoryRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse category roots from a JSON document; `origin` is used in errors
    pub fn parse(&self, content: &str, origin: &Path) -> NavResult<Vec<CategoryNode>> {
        parse_items(content, origin)
    }
}

impl CategorySource for JsonCategoryRepository {
    fn load_categories(&self, path: &Path) -> NavResult<Vec<CategoryNode>> {
        let content = fs::read_to_string(path)?;
        let roots = self.parse(&content, path)?;
        tracing::debug!(path = %path.display(), roots = roots.len(), "loaded category roots");
        Ok(roots)
    }
}

fn parse_items<T: DeserializeOwned>(content: &str, origin: &Path) -> NavResult<Vec<T>> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| NavError::payload(origin, &e))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(ITEMS_KEY) {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(_) => return Err(invalid(origin, "`items` must be an array")),
            None => return Err(invalid(origin, "expected an array or an object with `items`")),
        },
        _ => return Err(invalid(origin, "expected an array or an object with `items`")),
    };

    let mut parsed = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for (i, item) in items.into_iter().enumerate() {
        if item.is_null() {
            skipped += 1;
            continue;
        }
        let value = serde_json::from_value(item)
            .map_err(|e| invalid(origin, format!("item {}: {}", i, e)))?;
        parsed.push(value);
    }
    if skipped > 0 {
        tracing::debug!(origin = %origin.display(), skipped, "skipped null entries");
    }
    Ok(parsed)
}

fn invalid(origin: &Path, message: impl Into<String>) -> NavError {
    NavError::InvalidPayload {
        file: origin.to_path_buf(),
        message: message.into(),
    }
}
