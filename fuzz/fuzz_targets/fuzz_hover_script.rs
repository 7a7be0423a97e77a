#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;
use navweave::application::HoverScript;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(script) = HoverScript::parse(content) {
            let _ = script.replay(true, Duration::from_millis(150));
        }
    }
});
