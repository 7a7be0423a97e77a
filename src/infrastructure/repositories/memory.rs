//! In-memory sources
//!
//! Serve fixed node lists through the ports, ignoring the path. Used by tests
//! and by callers that already hold the data.

use crate::domain::entities::{CategoryNode, MenuNode};
use crate::domain::ports::{CategorySource, MenuSource};
use crate::error::NavResult;
use std::path::Path;

/// Fixed menu and category data
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    menu: Vec<MenuNode>,
    categories: Vec<CategoryNode>,
}

impl InMemorySource {
    pub fn new(menu: Vec<MenuNode>) -> Self {
        Self {
            menu,
            categories: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryNode>) -> Self {
        self.categories = categories;
        self
    }
}

impl MenuSource for InMemorySource {
    fn load_menu(&self, _path: &Path) -> NavResult<Vec<MenuNode>> {
        Ok(self.menu.clone())
    }
}

impl CategorySource for InMemorySource {
    fn load_categories(&self, _path: &Path) -> NavResult<Vec<CategoryNode>> {
        Ok(self.categories.clone())
    }
}
