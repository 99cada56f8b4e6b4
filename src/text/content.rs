//! Styled text content: plain text plus the style ranges positioned in it.

use crate::error::{Error, Result};
use crate::layout::WrapMode;
use crate::markup;
use crate::style::StyleRange;
use crate::text::range::{TextRange, build_text_ranges};
use crate::unicode::char_count;

/// Capability interface a host widget exposes to the layout engine.
///
/// Implementors describe what to lay out; the engine decides how.
pub trait StyledContent {
    /// Plain text, markup already resolved.
    fn text(&self) -> &str;

    /// Style ranges positioned in [`StyledContent::text`].
    fn style_ranges(&self) -> &[StyleRange];

    fn wrap_mode(&self) -> WrapMode {
        WrapMode::None
    }

    /// Row budget, `0` meaning unlimited.
    fn max_rows(&self) -> usize {
        0
    }

    /// Char index of the mnemonic character, if any.
    fn mnemonic_index(&self) -> Option<usize> {
        None
    }
}

/// Canonical content of a styled label.
///
/// Holds the de-markup-ed plain text and the style ranges annotating it.
/// Every range lies within the text; [`StyledText::add_style_range`]
/// enforces that.
///
/// # Examples
///
/// ```
/// use styled_text::{FontStyle, StyledText};
///
/// let content = StyledText::from_markup("Press {Enter:b} to {continue:u}");
/// assert_eq!(content.text(), "Press Enter to continue");
/// assert_eq!(content.style_ranges().len(), 2);
/// assert_eq!(content.style_ranges()[0].font_style(), Some(FontStyle::BOLD));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyledText {
    text: String,
    style_ranges: Vec<StyleRange>,
}

impl StyledText {
    /// Create unstyled content.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style_ranges: Vec::new(),
        }
    }

    /// Parse markup into content.
    #[must_use]
    pub fn from_markup(markup: &str) -> Self {
        markup::parse(markup)
    }

    pub(crate) fn from_parts(text: String, style_ranges: Vec<StyleRange>) -> Self {
        Self { text, style_ranges }
    }

    /// Replace text and ranges with the result of parsing `markup`.
    pub fn set_markup(&mut self, markup: &str) {
        *self = markup::parse(markup);
    }

    /// Replace the plain text. Existing style ranges are dropped.
    pub fn set_plain_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.style_ranges.clear();
    }

    /// Add a style range, rejecting ranges reaching outside the text.
    pub fn add_style_range(&mut self, range: StyleRange) -> Result<()> {
        let len = self.char_len();
        let within = range.start() <= len
            && (range.length() == StyleRange::TO_END || range.end() <= len);
        if !within {
            return Err(Error::RangeOutOfBounds {
                start: range.start(),
                end: range.end(),
                len,
            });
        }
        self.style_ranges.push(range);
        Ok(())
    }

    /// Replace all style ranges. Nothing changes if any range is invalid.
    pub fn set_style_ranges(&mut self, ranges: Vec<StyleRange>) -> Result<()> {
        let previous = std::mem::take(&mut self.style_ranges);
        for range in ranges {
            if let Err(err) = self.add_style_range(range) {
                self.style_ranges = previous;
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn clear_style_ranges(&mut self) {
        self.style_ranges.clear();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn style_ranges(&self) -> &[StyleRange] {
        &self.style_ranges
    }

    /// Length of the plain text in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        char_count(&self.text)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Decompose into homogeneously styled runs.
    #[must_use]
    pub fn text_ranges(&self) -> Vec<TextRange> {
        build_text_ranges(&self.text, &self.style_ranges)
    }

    /// Encode back to markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        markup::to_markup(self)
    }
}

impl StyledContent for StyledText {
    fn text(&self) -> &str {
        &self.text
    }

    fn style_ranges(&self) -> &[StyleRange] {
        &self.style_ranges
    }
}
