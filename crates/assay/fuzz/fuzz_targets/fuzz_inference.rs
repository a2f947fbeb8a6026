//! Fuzz target for column typing.
//!
//! Fuzzed tokens are placed in every cell of a small table, which then runs
//! through typing, quality assessment and preprocessing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use assay::{Assay, Parser, PreprocessOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10_000 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let line = content.replace(['\t', '\n', '\r'], " ");
    let tsv = format!("a\tb\tc\n{line}\t{line}\t1\n{line}\t2024-01-01\t2\n");

    if let Ok(table) = Parser::new().parse_str(&tsv) {
        let assay = Assay::new();
        let _ = assay.assess_quality(&table);
        let options = PreprocessOptions {
            handle_outliers: true,
            ..Default::default()
        };
        let _ = assay.preprocess(&table, &options);
    }
});
