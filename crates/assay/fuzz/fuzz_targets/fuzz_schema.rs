//! Fuzz target for schema JSON loading.

#![no_main]

use libfuzzer_sys::fuzz_target;
use assay::TableSchema;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let _ = TableSchema::from_json_str(json);
    }
});
