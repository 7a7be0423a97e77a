//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::services::{MegaMenuLayout, CLOSE_DELAY_MS, DEFAULT_ID_PREFIX};

/// Tree builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Keep root nodes as the top level of the tree
    #[serde(default = "default_true")]
    pub include_root: bool,

    /// Prefix for generated node ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// When set, a leading home link with this label is prepended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_label: Option<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            include_root: true,
            id_prefix: default_id_prefix(),
            home_label: None,
        }
    }
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

/// Mega menu layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaMenuConfig {
    #[serde(default = "default_items_per_column")]
    pub items_per_column: usize,

    #[serde(default = "default_visible_children")]
    pub visible_children: usize,

    #[serde(default = "default_view_all_label")]
    pub view_all_label: String,

    /// Root items shown in the compact desktop bar
    #[serde(default = "default_navbar_root_count")]
    pub navbar_root_count: usize,
}

impl Default for MegaMenuConfig {
    fn default() -> Self {
        Self {
            items_per_column: default_items_per_column(),
            visible_children: default_visible_children(),
            view_all_label: default_view_all_label(),
            navbar_root_count: default_navbar_root_count(),
        }
    }
}

fn default_items_per_column() -> usize {
    MegaMenuLayout::DEFAULT_ITEMS_PER_COLUMN
}

fn default_visible_children() -> usize {
    MegaMenuLayout::DEFAULT_VISIBLE_CHILDREN
}

fn default_view_all_label() -> String {
    MegaMenuLayout::DEFAULT_VIEW_ALL_LABEL.to_string()
}

fn default_navbar_root_count() -> usize {
    2
}

/// Hover panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverConfig {
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

fn default_close_delay_ms() -> u64 {
    CLOSE_DELAY_MS
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub mega_menu: MegaMenuConfig,

    #[serde(default)]
    pub hover: HoverConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Layout limits for the mega menu grouper
    pub fn mega_menu_layout(&self) -> MegaMenuLayout {
        MegaMenuLayout {
            items_per_column: self.mega_menu.items_per_column,
            visible_children: self.mega_menu.visible_children,
            view_all_label: self.mega_menu.view_all_label.clone(),
        }
    }

    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.hover.close_delay_ms)
    }
}
