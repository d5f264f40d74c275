#![no_main]

use libfuzzer_sys::fuzz_target;
use testgen::ScaffoldEngine;
use testgen::frontend::parse_source;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Whatever the engine accepts must parse back.
        if let Ok(tests) = ScaffoldEngine::default().generate(s) {
            for test in tests {
                assert!(parse_source(&test.source).is_ok(), "{}", test.source);
            }
        }
    }
});
