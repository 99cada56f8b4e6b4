//! Fuzz target for the markup parser.
//!
//! Parsing must never panic, ranges must stay inside the plain text, and
//! re-encoding must parse back to the same plain text for brace-free input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use styled_text::markup;

fuzz_target!(|data: &str| {
    let content = markup::parse(data);
    let len = content.char_len();
    for range in content.style_ranges() {
        assert!(range.end() <= len);
    }

    let encoded = markup::to_markup(&content);
    if !content.text().contains(['{', '}', '\r']) {
        assert_eq!(markup::parse(&encoded).text(), content.text());
    }
});
