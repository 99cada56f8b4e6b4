//! Fuzz target for the line breaker.
//!
//! Layout of arbitrary markup under arbitrary constraints must terminate
//! without panicking and honor the row budget.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use styled_text::{LayoutOptions, MonospaceMetrics, Rect, StyledText, WrapMode, layout};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    markup: &'a str,
    width: i16,
    height: i16,
    wrap: u8,
    max_rows: u8,
    row_gap: i8,
    mnemonic: Option<u16>,
}

fuzz_target!(|input: Input<'_>| {
    let content = StyledText::from_markup(input.markup);
    let wrap = match input.wrap % 4 {
        0 => WrapMode::None,
        1 => WrapMode::Char,
        2 => WrapMode::Word,
        _ => WrapMode::Mixed,
    };
    let options = LayoutOptions::default()
        .with_bounds(Rect::new(0, 0, i32::from(input.width), i32::from(input.height)))
        .with_wrap(wrap)
        .with_max_rows(usize::from(input.max_rows))
        .with_row_gap(i32::from(input.row_gap))
        .with_mnemonic(input.mnemonic.map(usize::from));

    let rows = layout::layout(&content.text_ranges(), &options, &MonospaceMetrics::default());
    if input.max_rows > 0 {
        assert!(rows.len() <= usize::from(input.max_rows));
    }
    assert_eq!(rows.is_empty(), content.is_empty());
});
