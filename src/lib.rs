//! navweave - menu hierarchy engine for storefront navigation
//!
//! Takes the flat, parent-linked menu list a CMS exports and reshapes it into
//! a nested navigation tree and a column-grouped mega menu, resolving category
//! references to url paths along the way.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{
    CategoryNode, ColumnEntry, MegaMenuColumn, MenuNode, NavigationTreeNode, RootItem, SubLink,
};
pub use domain::policies::resolve_href;
pub use domain::services::{
    build_category_url_map, build_mega_menu, build_navigation_tree, CategoryUrlMap, HoverPanel,
    MegaMenuLayout, MenuIndex, PanelEvent, PanelState,
};
pub use domain::value_objects::{decode_uid, MenuNodeKind, ParentKey};
pub use error::{NavError, NavResult};
