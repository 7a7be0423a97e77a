//! Category resolver contracts (CAT-001 through CAT-002)

use navweave::{build_category_url_map, decode_uid, CategoryNode};

/// CONTRACT CAT-001: encoded uids decode, anything else is used verbatim
mod decoding {
    use super::*;

    #[test]
    fn contract_base64_uid_decodes() {
        assert_eq!(decode_uid("MTI="), "12");
        assert_eq!(decode_uid("MTI"), "12");
    }

    #[test]
    fn contract_undecodable_uid_is_kept_raw() {
        assert_eq!(decode_uid("not base64!"), "not base64!");
        assert_eq!(decode_uid(""), "");
    }

    #[test]
    fn contract_raw_uid_still_indexes_its_category() {
        let root = CategoryNode::new("legacy-uid!").with_url_path("legacy");
        let map = build_category_url_map([&root]);
        assert_eq!(map.get("legacy-uid!"), Some("legacy"));
    }
}

/// CAT-002: nodes without a url path are skipped, their subtree is not
mod traversal {
    use super::*;

    #[test]
    fn contract_pathless_parents_do_not_hide_children() {
        let root = CategoryNode::new("Mg==").with_child(
            CategoryNode::new("MTI=")
                .with_url_path("")
                .with_child(CategoryNode::new("MTM=").with_url_path("deep/path")),
        );
        let map = build_category_url_map([&root]);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("13"), Some("deep/path"));
        assert_eq!(map.get("12"), None);
    }

    #[test]
    fn contract_empty_catalog_gives_empty_map() {
        assert!(build_category_url_map(std::iter::empty::<&CategoryNode>()).is_empty());
    }
}
