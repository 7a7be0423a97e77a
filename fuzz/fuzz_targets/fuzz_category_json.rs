#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use navweave::build_category_url_map;
use navweave::infrastructure::JsonCategoryRepository;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(roots) = JsonCategoryRepository::new().parse(content, Path::new("fuzz.json")) {
            let _ = build_category_url_map(&roots);
        }
    }
});
