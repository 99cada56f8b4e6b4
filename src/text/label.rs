//! Label host: content, settings and a layout cache.

use super::{StyledContent, StyledText, parse_mnemonic};
use crate::error::Result;
use crate::font::FontMetrics;
use crate::layout::{
    self, HorizontalAlignment, LayoutOptions, Orientation, Rect, Row, RowPlacement,
    VerticalAlignment, WrapMode,
};
use crate::style::StyleRange;
use std::cell::{Ref, RefCell};

/// Per-label settings.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelConfig {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub orientation: Orientation,
    /// Layout defaults. Bounds, wrap mode, row budget and mnemonic are
    /// overridden by the label.
    pub layout: LayoutOptions,
}

impl LabelConfig {
    #[must_use]
    pub const fn with_horizontal(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal = alignment;
        self
    }

    #[must_use]
    pub const fn with_vertical(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical = alignment;
        self
    }

    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }
}

/// Preferred size of a label laid out at a given width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMeasure {
    /// Width of the widest row.
    pub width: i32,
    /// Height of all rows including gaps.
    pub height: i32,
    pub rows: usize,
}

#[derive(Debug)]
struct LayoutCache {
    bounds: Rect,
    rows: Vec<Row>,
}

/// A styled label: content plus the state a host widget keeps around it.
///
/// Rows are cached for the current bounds. Every setter drops the cache;
/// hosts that swap their font metrics call [`StyledLabel::invalidate`].
///
/// # Examples
///
/// ```
/// use styled_text::{MonospaceMetrics, Rect, StyledLabel, WrapMode};
///
/// let metrics = MonospaceMetrics::new(10, 9, 3);
/// let mut label = StyledLabel::from_markup("{Warning:b}: disk almost full");
/// label.set_wrap_mode(WrapMode::Word);
/// label.set_bounds(Rect::new(0, 0, 120, 60));
///
/// let rows: Vec<String> = label.layout(&metrics).iter().map(|r| r.text()).collect();
/// assert_eq!(rows, vec!["Warning:", "disk almost", "full"]);
///
/// let size = label.measure(1000, &metrics);
/// assert_eq!((size.width, size.rows), (250, 1));
/// ```
#[derive(Debug)]
pub struct StyledLabel {
    content: StyledText,
    config: LabelConfig,
    bounds: Rect,
    wrap: WrapMode,
    max_rows: usize,
    mnemonic: Option<usize>,
    cache: RefCell<Option<LayoutCache>>,
}

impl Default for StyledLabel {
    fn default() -> Self {
        Self {
            content: StyledText::default(),
            config: LabelConfig::default(),
            bounds: Rect::unbounded(),
            wrap: WrapMode::None,
            max_rows: 0,
            mnemonic: None,
            cache: RefCell::new(None),
        }
    }
}

impl StyledLabel {
    /// Create a label showing `content`.
    #[must_use]
    pub fn new(content: StyledText) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Create a label from markup.
    #[must_use]
    pub fn from_markup(markup: &str) -> Self {
        Self::new(StyledText::from_markup(markup))
    }

    /// Create a label with the given settings.
    #[must_use]
    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn content(&self) -> &StyledText {
        &self.content
    }

    #[must_use]
    pub const fn config(&self) -> &LabelConfig {
        &self.config
    }

    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Drop cached rows.
    pub fn invalidate(&self) {
        self.cache.borrow_mut().take();
    }

    pub fn set_content(&mut self, content: StyledText) {
        self.content = content;
        self.invalidate();
    }

    /// Replace the content with parsed markup.
    pub fn set_markup(&mut self, markup: &str) {
        self.content.set_markup(markup);
        self.invalidate();
    }

    /// Replace the content with plain text, dropping all style ranges.
    pub fn set_plain_text(&mut self, text: impl Into<String>) {
        self.content.set_plain_text(text);
        self.invalidate();
    }

    /// Set plain text carrying an `&` mnemonic marker.
    ///
    /// The marker is stripped and its position becomes the mnemonic index.
    pub fn set_mnemonic_text(&mut self, text: &str) {
        let parsed = parse_mnemonic(text);
        self.content.set_plain_text(parsed.text);
        self.mnemonic = parsed.index;
        self.invalidate();
    }

    /// Add one style range to the content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)
    /// when the range lies outside the text.
    pub fn add_style_range(&mut self, range: StyleRange) -> Result<()> {
        self.content.add_style_range(range)?;
        self.invalidate();
        Ok(())
    }

    /// Replace all style ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RangeOutOfBounds`](crate::Error::RangeOutOfBounds)
    /// when any range lies outside the text; the label is left unchanged.
    pub fn set_style_ranges(&mut self, ranges: Vec<StyleRange>) -> Result<()> {
        self.content.set_style_ranges(ranges)?;
        self.invalidate();
        Ok(())
    }

    pub fn clear_style_ranges(&mut self) {
        self.content.clear_style_ranges();
        self.invalidate();
    }

    pub fn set_config(&mut self, config: LabelConfig) {
        self.config = config;
        self.invalidate();
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.invalidate();
    }

    pub fn set_wrap_mode(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
        self.invalidate();
    }

    /// Limit the number of rows, `0` meaning unlimited.
    pub fn set_max_rows(&mut self, max_rows: usize) {
        self.max_rows = max_rows;
        self.invalidate();
    }

    pub fn set_mnemonic_index(&mut self, index: Option<usize>) {
        self.mnemonic = index;
        self.invalidate();
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.config.horizontal = alignment;
        self.invalidate();
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.config.vertical = alignment;
        self.invalidate();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.invalidate();
    }

    fn options_for(&self, bounds: Rect) -> LayoutOptions {
        self.config.layout.clone().with_bounds(bounds)
    }

    /// Rows for the current bounds, recomputed when stale.
    pub fn layout<M: FontMetrics + ?Sized>(&self, metrics: &M) -> Ref<'_, [Row]> {
        let needs_refresh = self
            .cache
            .borrow()
            .as_ref()
            .is_none_or(|cache| cache.bounds != self.bounds);

        if needs_refresh {
            let rows = layout::layout_content(self, &self.options_for(self.bounds), metrics);
            *self.cache.borrow_mut() = Some(LayoutCache {
                bounds: self.bounds,
                rows,
            });
        }

        Ref::map(self.cache.borrow(), |cache| {
            cache.as_ref().map_or(&[][..], |cache| cache.rows.as_slice())
        })
    }

    /// Rows aligned inside the current bounds.
    pub fn placements<M: FontMetrics + ?Sized>(&self, metrics: &M) -> Vec<RowPlacement> {
        let rows = self.layout(metrics);
        layout::place_rows(
            &rows,
            self.bounds,
            self.config.horizontal,
            self.config.vertical,
            self.config.orientation,
            self.config.layout.row_gap,
        )
    }

    /// Preferred size when laid out `width` pixels wide.
    ///
    /// Uses unbounded height and leaves the cache alone.
    pub fn measure<M: FontMetrics + ?Sized>(&self, width: i32, metrics: &M) -> TextMeasure {
        let options = self.options_for(Rect::with_width(width));
        let rows = layout::layout_content(self, &options, metrics);
        TextMeasure {
            width: rows.iter().map(|row| row.width).max().unwrap_or(0),
            height: layout::content_height(&rows, options.row_gap),
            rows: rows.len(),
        }
    }
}

impl StyledContent for StyledLabel {
    fn text(&self) -> &str {
        self.content.text()
    }

    fn style_ranges(&self) -> &[StyleRange] {
        self.content.style_ranges()
    }

    fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    fn max_rows(&self) -> usize {
        self.max_rows
    }

    fn mnemonic_index(&self) -> Option<usize> {
        self.mnemonic
    }
}
