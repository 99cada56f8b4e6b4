//! Fuzz target for color payload parsing.
//!
//! Tests that Rgba::parse handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use styled_text::Rgba;

fuzz_target!(|data: &str| {
    let _ = Rgba::parse(data);
    let _ = Rgba::from_hex(data);

    if let Ok(color) = Rgba::parse(data) {
        let components = color.to_components();
        assert_eq!(Rgba::parse(&components).map(Rgba::to_rgba_u8), Ok(color.to_rgba_u8()));
    }
});
