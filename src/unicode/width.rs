//! Cell counting for fixed-advance measurement.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How East Asian ambiguous-width characters (e.g. `①`, `±`) are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthMethod {
    /// One cell, as `wcwidth` does.
    #[default]
    WcWidth,
    /// Two cells, the East Asian context rule.
    Unicode,
}

/// Number of advance cells `text` occupies.
///
/// Counted per grapheme cluster so that joined emoji sequences measure as a
/// single glyph. Clusters made only of control characters (tabs, line
/// breaks) occupy no cells.
#[must_use]
pub fn cell_width(text: &str, method: WidthMethod) -> usize {
    if text.bytes().all(|byte| (b' '..=b'~').contains(&byte)) {
        return text.len();
    }
    text.graphemes(true)
        .filter(|cluster| !cluster.chars().all(char::is_control))
        .map(|cluster| match method {
            WidthMethod::WcWidth => cluster.width(),
            WidthMethod::Unicode => cluster.width_cjk(),
        })
        .sum()
}
