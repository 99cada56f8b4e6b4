//! Line layout of styled runs into rows.
//!
//! [`layout`] is a pure function from runs, [`LayoutOptions`] and a
//! [`FontMetrics`] oracle to a list of [`Row`]s. It keeps no state between
//! calls; hosts that want caching own it (see
//! [`StyledLabel`](crate::StyledLabel)).
//!
//! # Examples
//!
//! ```
//! use styled_text::{LayoutOptions, MonospaceMetrics, Rect, StyledText, WrapMode, layout};
//!
//! let metrics = MonospaceMetrics::new(10, 9, 3);
//! let content = StyledText::from_markup("{hello:b} world");
//! let options = LayoutOptions::default()
//!     .with_bounds(Rect::new(0, 0, 50, 100))
//!     .with_wrap(WrapMode::Word);
//!
//! let rows = layout::layout(&content.text_ranges(), &options, &metrics);
//! let lines: Vec<_> = rows.iter().map(|row| row.text()).collect();
//! assert_eq!(lines, vec!["hello", "world"]);
//! assert!(rows[0].leading);
//! assert!(!rows[1].leading);
//! ```

mod align;
mod breaker;

pub use align::{
    HorizontalAlignment, Orientation, RowPlacement, VerticalAlignment, content_height,
    place_rows,
};
pub use breaker::MAX_BREAK_ITERATIONS;

use crate::font::{DEFAULT_SCRIPT_RATIO, Font, FontMetrics};
use crate::style::StyleRange;
use crate::text::{StyledContent, TextRange, build_text_ranges};

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// No wrapping - rows extend beyond the bounds (or get truncated).
    #[default]
    None,
    /// Wrap at grapheme boundaries.
    Char,
    /// Wrap at word boundaries; a word wider than a row is kept whole.
    Word,
    /// Wrap at word boundaries, splitting words wider than a row.
    Mixed,
}

/// Pixel rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with no practical size limit.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0, 0, i32::MAX, i32::MAX)
    }

    /// Rectangle of the given width and unlimited height.
    #[must_use]
    pub const fn with_width(width: i32) -> Self {
        Self::new(0, 0, width, i32::MAX)
    }
}

/// Layout configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    /// Available area. Only width and height constrain layout.
    pub bounds: Rect,
    pub wrap: WrapMode,
    /// Row budget, `0` meaning unlimited.
    pub max_rows: usize,
    /// Pixels between consecutive rows. Negative values count as zero.
    pub row_gap: i32,
    /// Keep hard line breaks as row breaks.
    ///
    /// Hard breaks currently always break rows; the flag is carried for
    /// hosts that persist it.
    pub preserve_line_breaks: bool,
    /// Char index of the mnemonic character in the plain text.
    pub mnemonic: Option<usize>,
    /// Base font; style ranges derive from it.
    pub font: Font,
    /// Size divisor for superscript and subscript fonts.
    pub script_ratio: f32,
    /// Replace overflowing content with [`LayoutOptions::truncation_suffix`].
    pub truncate: bool,
    pub truncation_suffix: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            bounds: Rect::unbounded(),
            wrap: WrapMode::None,
            max_rows: 0,
            row_gap: 0,
            preserve_line_breaks: true,
            mnemonic: None,
            font: Font::default(),
            script_ratio: DEFAULT_SCRIPT_RATIO,
            truncate: true,
            truncation_suffix: "...".to_string(),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub const fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub const fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub const fn with_row_gap(mut self, row_gap: i32) -> Self {
        self.row_gap = row_gap;
        self
    }

    #[must_use]
    pub const fn with_preserve_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    #[must_use]
    pub const fn with_mnemonic(mut self, mnemonic: Option<usize>) -> Self {
        self.mnemonic = mnemonic;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    #[must_use]
    pub const fn with_script_ratio(mut self, ratio: f32) -> Self {
        self.script_ratio = ratio;
        self
    }

    #[must_use]
    pub const fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    #[must_use]
    pub fn with_truncation_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.truncation_suffix = suffix.into();
        self
    }

    /// Row gap with negative values clamped to zero.
    #[must_use]
    pub fn effective_row_gap(&self) -> i32 {
        self.row_gap.max(0)
    }
}

/// A run placed on a row, with the font it is set in and its pixel width.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub range: TextRange,
    pub font: Font,
    pub width: i32,
}

impl Fragment {
    #[must_use]
    pub fn text(&self) -> &str {
        self.range.text()
    }

    #[must_use]
    pub const fn style(&self) -> Option<&StyleRange> {
        self.range.style()
    }
}

/// One visual line of laid-out text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub fragments: Vec<Fragment>,
    /// First row of the text, or first row after a hard break.
    pub leading: bool,
    pub width: i32,
    pub height: i32,
    /// Distance from the row top to its baseline.
    pub ascent: i32,
    /// Char offset of the mnemonic character within this row.
    pub mnemonic: Option<usize>,
    /// Row ends with the truncation suffix.
    pub truncated: bool,
}

impl Row {
    /// Concatenated text of all fragments.
    #[must_use]
    pub fn text(&self) -> String {
        self.fragments.iter().map(Fragment::text).collect()
    }

    /// Number of chars on this row.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.fragments.iter().map(|f| f.range.char_len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Lay out runs into rows.
///
/// Returns no rows only for empty input.
#[must_use]
pub fn layout<M: FontMetrics + ?Sized>(
    ranges: &[TextRange],
    options: &LayoutOptions,
    metrics: &M,
) -> Vec<Row> {
    breaker::LineBreaker::new(options, metrics).run(ranges)
}

/// Lay out host content, taking wrap mode, row budget and mnemonic from it.
#[must_use]
pub fn layout_content<C, M>(content: &C, options: &LayoutOptions, metrics: &M) -> Vec<Row>
where
    C: StyledContent + ?Sized,
    M: FontMetrics + ?Sized,
{
    let options = LayoutOptions {
        wrap: content.wrap_mode(),
        max_rows: content.max_rows(),
        mnemonic: content.mnemonic_index(),
        ..options.clone()
    };
    let ranges = build_text_ranges(content.text(), content.style_ranges());
    layout(&ranges, &options, metrics)
}
