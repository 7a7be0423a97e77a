//! Domain Entities
//!
//! - `MenuNode` - A flat upstream menu node
//! - `CategoryNode` - A nested catalog category
//! - `NavigationTreeNode` - Nested tree output
//! - `RootItem` and friends - Mega menu output

mod category;
mod mega_menu;
mod menu_node;
mod navigation;

pub use category::CategoryNode;
pub use mega_menu::{ColumnEntry, MegaMenuColumn, RootItem, SubLink};
pub use menu_node::MenuNode;
pub use navigation::NavigationTreeNode;
