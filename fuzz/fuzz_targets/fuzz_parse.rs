#![no_main]
use libfuzzer_sys::fuzz_target;

use quill_json::parse;

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes; the parser takes UTF-8 text.
    if let Ok(s) = std::str::from_utf8(data) {
        // We are looking for panics, so the result itself is ignored.
        // Every input must either parse or return an error.
        let _ = parse(s);
    }
});
