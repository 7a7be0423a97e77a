//! CategorySource port - abstraction for loading the category tree

use crate::domain::entities::CategoryNode;
use crate::error::NavResult;
use std::path::Path;

/// Abstract source of category root nodes
///
/// Implemented by the infrastructure layer.
pub trait CategorySource {
    /// Load the category roots from `path`
    fn load_categories(&self, path: &Path) -> NavResult<Vec<CategoryNode>>;
}
