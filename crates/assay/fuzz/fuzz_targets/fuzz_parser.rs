//! Fuzz target for the delimited-text parser.
//!
//! The parser must never panic on malformed input, whatever the delimiter.

#![no_main]

use libfuzzer_sys::fuzz_target;
use assay::Parser;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let parser = Parser::new();
    for delimiter in [b',', b'\t', b';', b'|'] {
        let _ = parser.parse_bytes(data, delimiter);
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parser.parse_str(text);
    }
});
