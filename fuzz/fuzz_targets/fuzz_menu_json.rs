#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use navweave::infrastructure::JsonMenuRepository;
use navweave::{build_mega_menu, build_navigation_tree, CategoryUrlMap};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing may fail; building from whatever parses must never panic or hang
        if let Ok(nodes) = JsonMenuRepository::new().parse(content, Path::new("fuzz.json")) {
            let categories = CategoryUrlMap::new();
            let _ = build_navigation_tree(&nodes, true, &categories);
            let _ = build_navigation_tree(&nodes, false, &categories);
            let _ = build_mega_menu(&nodes, &categories);
        }
    }
});
