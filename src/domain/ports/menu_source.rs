//! MenuSource port - abstraction for loading the flat menu list
//!
//! The domain only sees [`MenuNode`]s; where they come from (a JSON export,
//! a fixture, a remote API) is an infrastructure concern.

use crate::domain::entities::MenuNode;
use crate::error::NavResult;
use std::path::Path;

/// Abstract source of flat menu nodes
pub trait MenuSource {
    /// Load every menu node from `path`, in upstream order
    fn load_menu(&self, path: &Path) -> NavResult<Vec<MenuNode>>;
}
