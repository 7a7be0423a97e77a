//! Test fixtures - menu and category payloads plus node builders.

use navweave::{MenuNode, MenuNodeKind};

/// Small storefront menu.
///
/// Lighting (category 12) holds Ceiling (category 13), Wall, and a title-less
/// wrapper around Spots. Sale is a second root declared with `parent_id: 0`.
pub const MENU_JSON: &str = r#"{
  "items": [
    {"id": 1, "parent_id": null, "position": 0, "type": "category", "title": "Lighting", "url_key": "lighting", "content": "MTI="},
    {"id": 2, "parent_id": 1, "position": 1, "type": "link", "title": "Wall", "url_key": "lighting/wall"},
    {"id": 3, "parent_id": 1, "position": 0, "type": "category", "title": "Ceiling", "content": "MTM="},
    {"id": 4, "parent_id": 0, "position": 1, "type": "custom_url", "title": "Sale", "url_key": "https://shop.example/sale"},
    {"id": 5, "parent_id": 1, "position": 2, "type": "wrapper"},
    {"id": 6, "parent_id": 5, "position": 0, "type": "link", "title": "Spots", "url_key": "/spots"},
    null
  ]
}"#;

/// Catalog tree resolving categories 12 and 13
pub const CATEGORIES_JSON: &str = r#"[
  {
    "uid": "Mg==",
    "name": "Default Category",
    "url_path": null,
    "children": [
      {
        "uid": "MTI=",
        "url_path": "lighting",
        "children": [
          {"uid": "MTM=", "url_path": "lighting/ceiling", "children": null}
        ]
      }
    ]
  }
]"#;

/// Project config forcing ASCII glyphs
pub const ASCII_CONFIG: &str = r#"
[output]
unicode = false
"#;

/// Menu payload where every node is the only child of the previous one
pub fn chain_menu_json(len: usize) -> String {
    let items: Vec<String> = (1..=len)
        .map(|id| format!(r#"{{"id": {}, "parent_id": {}, "title": "L{}"}}"#, id, id - 1, id))
        .collect();
    format!("[{}]", items.join(","))
}

pub fn link(id: i64, parent: Option<i64>, position: i64, title: &str) -> MenuNode {
    MenuNode::new(id, MenuNodeKind::Link)
        .with_parent(parent)
        .with_position(position)
        .with_title(title)
        .with_url_key(title.to_lowercase().replace(' ', "-"))
}

pub fn wrapper(id: i64, parent: Option<i64>, position: i64) -> MenuNode {
    MenuNode::new(id, MenuNodeKind::Wrapper)
        .with_parent(parent)
        .with_position(position)
}

/// One root with `count` children numbered from 100
pub fn root_with_children(count: i64) -> Vec<MenuNode> {
    let mut nodes = vec![link(1, None, 0, "Root")];
    nodes.extend((0..count).map(|i| link(100 + i, Some(1), i, &format!("Child {}", i))));
    nodes
}
