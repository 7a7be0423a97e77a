//! Navigation options

use crate::config::Config;
use crate::domain::services::{MegaMenuLayout, DEFAULT_ID_PREFIX};

/// Options for building navigation outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Keep roots as the top level of the tree
    pub include_root: bool,
    /// Prefix for generated tree ids
    pub id_prefix: String,
    /// Label of a leading home link, if any
    pub home_label: Option<String>,
    /// Mega menu limits
    pub layout: MegaMenuLayout,
    /// Roots shown in the compact navbar
    pub navbar_root_count: usize,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            include_root: true,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            home_label: None,
            layout: MegaMenuLayout::default(),
            navbar_root_count: 2,
        }
    }
}

impl NavigationOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every setting from a loaded config
    pub fn from_config(config: &Config) -> Self {
        Self {
            include_root: config.navigation.include_root,
            id_prefix: config.navigation.id_prefix.clone(),
            home_label: config.navigation.home_label.clone(),
            layout: config.mega_menu_layout(),
            navbar_root_count: config.mega_menu.navbar_root_count,
        }
    }

    pub fn with_include_root(mut self, include_root: bool) -> Self {
        self.include_root = include_root;
        self
    }

    pub fn with_home_label(mut self, label: Option<String>) -> Self {
        self.home_label = label;
        self
    }

    pub fn with_navbar_root_count(mut self, count: usize) -> Self {
        self.navbar_root_count = count;
        self
    }
}
