//! Font descriptions and the font-metrics oracle.
//!
//! The layout engine never shapes glyphs itself. It only asks a
//! [`FontMetrics`] implementation for string widths and line metrics of a
//! [`Font`]. Hosts plug in their toolkit's metrics; [`MonospaceMetrics`] is a
//! fixed-advance implementation for tests, benches and cell-based hosts.
//!
//! # Examples
//!
//! ```
//! use styled_text::{Font, FontMetrics, FontStyle, MetricsCache, MonospaceMetrics};
//!
//! let metrics = MetricsCache::new(MonospaceMetrics::new(7, 10, 3));
//! let font = Font::new("Mono", 12.0);
//!
//! assert_eq!(metrics.string_width(&font, "hello"), 35);
//! assert_eq!(metrics.height(&font), 13);
//!
//! // Derived fonts scale with their size
//! let small = font.derive(FontStyle::BOLD, 6.0);
//! assert_eq!(metrics.string_width(&small, "ab"), 8);
//! ```

use crate::style::{FontStyle, StyleRange};
use crate::unicode::{WidthMethod, cell_width};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

/// Default ratio by which superscript and subscript fonts shrink.
pub const DEFAULT_SCRIPT_RATIO: f32 = 1.5;

/// A font description: family, style bits and point size.
///
/// Equality and hashing compare the bit pattern of `size`, so fonts can key
/// metric caches.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
}

impl Font {
    /// Create a plain font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            style: FontStyle::PLAIN,
            size,
        }
    }

    /// Return a copy with the given style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Derive a font of the same family with another style and size.
    #[must_use]
    pub fn derive(&self, style: FontStyle, size: f32) -> Self {
        Self {
            family: self.family.clone(),
            style,
            size,
        }
    }

    /// Resolve the font a styled fragment is drawn with.
    ///
    /// A defined font style replaces the base style; superscript and
    /// subscript divide the size by `script_ratio`.
    #[must_use]
    pub fn for_style(&self, style: Option<&StyleRange>, script_ratio: f32) -> Self {
        let Some(style) = style else {
            return self.clone();
        };
        let font_style = style.font_style().unwrap_or(self.style);
        let size = if style.decorations().is_script() && script_ratio > 0.0 {
            self.size / script_ratio
        } else {
            self.size
        };
        self.derive(font_style, size)
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.style.contains(FontStyle::BOLD)
    }

    #[must_use]
    pub const fn is_italic(&self) -> bool {
        self.style.contains(FontStyle::ITALIC)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Dialog", 12.0)
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.style == other.style
            && self.size.to_bits() == other.size.to_bits()
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.style.hash(state);
        self.size.to_bits().hash(state);
    }
}

/// Vertical metrics of one line set in a font, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMetrics {
    pub ascent: i32,
    pub descent: i32,
    /// Full line height (ascent + descent + leading).
    pub height: i32,
}

/// Font-metrics oracle consulted by the layout engine.
pub trait FontMetrics {
    /// Advance width of `text` set in `font`, in pixels.
    fn string_width(&self, font: &Font, text: &str) -> i32;

    /// Line metrics of `font`.
    fn line_metrics(&self, font: &Font) -> LineMetrics;

    fn ascent(&self, font: &Font) -> i32 {
        self.line_metrics(font).ascent
    }

    fn descent(&self, font: &Font) -> i32 {
        self.line_metrics(font).descent
    }

    fn height(&self, font: &Font) -> i32 {
        self.line_metrics(font).height
    }
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn string_width(&self, font: &Font, text: &str) -> i32 {
        (**self).string_width(font, text)
    }

    fn line_metrics(&self, font: &Font) -> LineMetrics {
        (**self).line_metrics(font)
    }
}

/// Point size at which [`MonospaceMetrics`] values are specified.
const REFERENCE_SIZE: f32 = 12.0;

/// Fixed-advance metrics: every display cell is `advance` pixels wide.
///
/// Values are given for a 12pt font and scale linearly with the font size.
/// Wide (CJK, emoji) glyphs take two cells, control characters none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    advance: i32,
    ascent: i32,
    descent: i32,
    leading: i32,
    bold_extra: i32,
    width_method: WidthMethod,
}

impl MonospaceMetrics {
    /// Create metrics from the 12pt cell advance, ascent and descent.
    #[must_use]
    pub const fn new(advance: i32, ascent: i32, descent: i32) -> Self {
        Self {
            advance,
            ascent,
            descent,
            leading: 0,
            bold_extra: 0,
            width_method: WidthMethod::WcWidth,
        }
    }

    /// Extra line spacing added below the descent.
    #[must_use]
    pub const fn with_leading(mut self, leading: i32) -> Self {
        self.leading = leading;
        self
    }

    /// Extra pixels every visible glyph gains when set in a bold font.
    #[must_use]
    pub const fn with_bold_extra(mut self, pixels: i32) -> Self {
        self.bold_extra = pixels;
        self
    }

    /// How ambiguous-width characters are counted.
    #[must_use]
    pub const fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    fn scaled(value: i32, font: &Font) -> i32 {
        (value as f32 * font.size / REFERENCE_SIZE).round() as i32
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(7, 11, 3).with_leading(2)
    }
}

impl FontMetrics for MonospaceMetrics {
    fn string_width(&self, font: &Font, text: &str) -> i32 {
        let cells = cell_width(text, self.width_method) as i32;
        let mut width = cells * Self::scaled(self.advance, font);
        if font.is_bold() && self.bold_extra != 0 {
            let visible = text.chars().filter(|c| !c.is_control()).count() as i32;
            width += visible * self.bold_extra;
        }
        width
    }

    fn line_metrics(&self, font: &Font) -> LineMetrics {
        let ascent = Self::scaled(self.ascent, font);
        let descent = Self::scaled(self.descent, font);
        LineMetrics {
            ascent,
            descent,
            height: ascent + descent + Self::scaled(self.leading, font),
        }
    }
}

/// Memoizing wrapper caching line metrics per derived font.
///
/// The cache is read-mostly and sits behind a mutex, so a cache can be
/// shared across threads whenever the wrapped oracle can.
#[derive(Debug)]
pub struct MetricsCache<M> {
    inner: M,
    lines: Mutex<HashMap<Font, LineMetrics>>,
}

impl<M: FontMetrics> MetricsCache<M> {
    /// Wrap an oracle with an empty cache.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            lines: Mutex::new(HashMap::new()),
        }
    }

    /// Access the wrapped oracle.
    #[must_use]
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Number of fonts with cached line metrics.
    #[must_use]
    pub fn cached_fonts(&self) -> usize {
        self.lines.lock().map_or(0, |lines| lines.len())
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl<M: FontMetrics> FontMetrics for MetricsCache<M> {
    fn string_width(&self, font: &Font, text: &str) -> i32 {
        self.inner.string_width(font, text)
    }

    fn line_metrics(&self, font: &Font) -> LineMetrics {
        let Ok(mut lines) = self.lines.lock() else {
            return self.inner.line_metrics(font);
        };
        if let Some(metrics) = lines.get(font) {
            return *metrics;
        }
        let metrics = self.inner.line_metrics(font);
        lines.insert(font.clone(), metrics);
        metrics
    }
}
