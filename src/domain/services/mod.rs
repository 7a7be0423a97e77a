//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod category_urls;
mod hover_panel;
mod mega_menu_builder;
mod menu_index;
mod navigation_builder;

pub use category_urls::{build_category_url_map, CategoryUrlMap};
pub use hover_panel::{HoverPanel, PanelEvent, PanelState, CLOSE_DELAY_MS};
pub use mega_menu_builder::{
    build_mega_menu, build_mega_menu_with, group_from_index, MegaMenuLayout,
};
pub use menu_index::MenuIndex;
pub use navigation_builder::{build_navigation_tree, NavigationBuilder, DEFAULT_ID_PREFIX};
