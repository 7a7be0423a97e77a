//! Href resolution contracts (HREF-001 through HREF-002)

use navweave::{resolve_href, CategoryNode, CategoryUrlMap, MenuNode, MenuNodeKind};

fn categories() -> CategoryUrlMap {
    let root = CategoryNode::new("Mg==").with_child(
        CategoryNode::new("MTI=")
            .with_url_path("lighting")
            .with_child(CategoryNode::new("MTM=").with_url_path("lighting/ceiling")),
    );
    navweave::build_category_url_map([&root])
}

/// CONTRACT HREF-001: first matching rule wins
mod precedence {
    use super::*;

    #[test]
    fn contract_href_precedence_table() {
        let map = categories();
        let cases: Vec<(MenuNode, &str)> = vec![
            (
                MenuNode::new(1, MenuNodeKind::category("MTM=")).with_url_key("ignored"),
                "/lighting/ceiling",
            ),
            (MenuNode::new(2, MenuNodeKind::category("13")), "/lighting/ceiling"),
            (
                MenuNode::new(3, MenuNodeKind::category("OTk=")).with_url_key("fallback"),
                "/fallback",
            ),
            (MenuNode::new(4, MenuNodeKind::category("OTk=")), "#"),
            (MenuNode::new(5, MenuNodeKind::Link), "#"),
            (
                MenuNode::new(6, MenuNodeKind::Link).with_url_key("https://cdn.example/x"),
                "https://cdn.example/x",
            ),
            (
                MenuNode::new(7, MenuNodeKind::Link).with_url_key("http://old.example"),
                "http://old.example",
            ),
            (MenuNode::new(8, MenuNodeKind::Link).with_url_key("#faq"), "#faq"),
            (MenuNode::new(9, MenuNodeKind::Link).with_url_key("/rooted"), "/rooted"),
            (MenuNode::new(10, MenuNodeKind::Link).with_url_key("about-us"), "/about-us"),
            (
                MenuNode::new(11, MenuNodeKind::Wrapper).with_url_key("brands"),
                "/brands",
            ),
        ];

        for (node, expected) in cases {
            assert_eq!(
                resolve_href(&node, &map),
                expected,
                "node {} resolved unexpectedly",
                node.id()
            );
        }
    }
}

/// CONTRACT HREF-002: only category nodes consult the category map
mod category_only {
    use super::*;

    #[test]
    fn contract_link_nodes_ignore_category_map() {
        let node = MenuNode::new(1, MenuNodeKind::Link).with_url_key("12");
        assert_eq!(resolve_href(&node, &categories()), "/12");
    }
}
