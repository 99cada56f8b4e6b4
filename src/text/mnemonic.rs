//! Mnemonic marker parsing.

/// Display text with the mnemonic marker removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MnemonicText {
    /// Text without the `&` markers.
    pub text: String,
    /// Char index of the mnemonic character in `text`.
    pub index: Option<usize>,
}

/// Strip the first `&X` mnemonic marker from `text`.
///
/// - `"&Name"` gives `"Name"` with the mnemonic at index 0
/// - `"Save && Exit"` gives `"Save & Exit"` with no mnemonic
/// - a trailing lone `&` is dropped
///
/// Only the first marker counts; later markers are stripped without
/// replacing it.
#[must_use]
pub fn parse_mnemonic(text: &str) -> MnemonicText {
    let mut display = String::with_capacity(text.len());
    let mut index = None;
    let mut chars_out = 0usize;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        if ch != '&' {
            display.push(ch);
            chars_out += 1;
            continue;
        }
        let Some(next) = chars.next() else {
            break;
        };
        if next != '&' && index.is_none() {
            index = Some(chars_out);
        }
        display.push(next);
        chars_out += 1;
    }

    MnemonicText {
        text: display,
        index,
    }
}
