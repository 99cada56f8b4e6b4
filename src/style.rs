//! Style ranges: character intervals annotated with visual attributes.
//!
//! This module provides the value types that describe how a slice of plain
//! text should look:
//!
//! - [`FontStyle`]: Bitflags for bold and italic (empty = plain)
//! - [`Decorations`]: Bitflags for underline, wave, strike-through, etc.
//! - [`StyleRange`]: A half-open char interval plus font style, colors and
//!   decorations, with the ordering and merge rules used by run
//!   decomposition
//!
//! # Examples
//!
//! ```
//! use styled_text::{Decorations, FontStyle, Rgba, StyleRange};
//!
//! let bold = StyleRange::new(0, 5)
//!     .unwrap()
//!     .with_font_style(FontStyle::BOLD)
//!     .with_foreground(Rgba::RED);
//!
//! let underline = StyleRange::new(2, 3)
//!     .unwrap()
//!     .with_decorations(Decorations::UNDERLINE);
//!
//! // Later range wins on defined scalars, decorations are unioned
//! let merged = bold.merge(&underline);
//! assert_eq!(merged.font_style(), Some(FontStyle::BOLD));
//! assert!(merged.is_underlined());
//! ```

use crate::color::Rgba;
use crate::error::{Error, Result};
use bitflags::bitflags;
use std::cmp::Ordering;

bitflags! {
    /// Font style bits. The empty set is the plain style.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct FontStyle: u8 {
        /// Bold weight.
        const BOLD   = 0x01;
        /// Italic posture.
        const ITALIC = 0x02;
    }
}

impl FontStyle {
    /// The plain style (neither bold nor italic).
    pub const PLAIN: Self = Self::empty();
}

bitflags! {
    /// Custom text decorations applied on top of the font.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct Decorations: u8 {
        /// Straight underline.
        const UNDERLINE             = 0x01;
        /// Wavy underline.
        const WAVE                  = 0x02;
        /// Single line through the text.
        const STRIKE_THROUGH        = 0x04;
        /// Double line through the text.
        const DOUBLE_STRIKE_THROUGH = 0x08;
        /// Raised, smaller glyphs.
        const SUPERSCRIPT           = 0x10;
        /// Lowered, smaller glyphs.
        const SUBSCRIPT             = 0x20;
    }
}

impl Decorations {
    /// Whether the decorations call for a shrunken script font.
    #[must_use]
    pub const fn is_script(self) -> bool {
        self.intersects(Self::SUPERSCRIPT.union(Self::SUBSCRIPT))
    }
}

/// A half-open character interval `[start, start + length)` with the visual
/// attributes applied to it.
///
/// Offsets count Unicode scalar values (chars) of the plain text. A length of
/// [`StyleRange::TO_END`] means "until the end of the text".
///
/// `Clone` produces an independent copy; ranges are never mutated in place
/// by run decomposition or layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRange {
    start: usize,
    length: usize,
    font_style: Option<FontStyle>,
    foreground: Option<Rgba>,
    background: Option<Rgba>,
    decorations: Decorations,
}

impl StyleRange {
    /// Length sentinel meaning "until the end of the text".
    pub const TO_END: usize = usize::MAX;

    /// Create an unstyled range over `[start, start + length)`.
    ///
    /// Fails with [`Error::InvalidRange`] when `length` is zero.
    pub fn new(start: usize, length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidRange {
                start: i64::try_from(start).unwrap_or(i64::MAX),
                length: 0,
            });
        }
        Ok(Self {
            start,
            length,
            font_style: None,
            foreground: None,
            background: None,
            decorations: Decorations::empty(),
        })
    }

    /// Create a range from host-side signed offsets.
    ///
    /// A length of `-1` maps to [`StyleRange::TO_END`]. A negative start, a
    /// zero length or any other negative length is rejected.
    pub fn from_signed(start: i64, length: i64) -> Result<Self> {
        let invalid = || Error::InvalidRange { start, length };
        let start_index = usize::try_from(start).map_err(|_| invalid())?;
        let length_count = match length {
            -1 => Self::TO_END,
            _ => usize::try_from(length).map_err(|_| invalid())?,
        };
        Self::new(start_index, length_count).map_err(|_| invalid())
    }

    /// Create a range covering the whole text from `start`.
    #[must_use]
    pub const fn to_end(start: usize) -> Self {
        Self {
            start,
            length: Self::TO_END,
            font_style: None,
            foreground: None,
            background: None,
            decorations: Decorations::empty(),
        }
    }

    /// Return a copy with the given font style.
    #[must_use]
    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    /// Return a copy with the given foreground color.
    #[must_use]
    pub fn with_foreground(mut self, color: Rgba) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Return a copy with the given background color.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Return a copy with the given decorations added.
    #[must_use]
    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations |= decorations;
        self
    }

    /// Return a copy moved to a new interval, keeping every attribute.
    ///
    /// Fails when `length` is zero.
    pub fn with_interval(&self, start: usize, length: usize) -> Result<Self> {
        let mut moved = Self::new(start, length)?;
        moved.font_style = self.font_style;
        moved.foreground = self.foreground;
        moved.background = self.background;
        moved.decorations = self.decorations;
        Ok(moved)
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Length in chars, or [`StyleRange::TO_END`].
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Exclusive end offset (saturating for [`StyleRange::TO_END`]).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    /// Exclusive end offset clipped to a text of `len` chars.
    #[must_use]
    pub fn end_within(&self, len: usize) -> usize {
        self.end().min(len)
    }

    /// Font style, or `None` when unspecified.
    #[must_use]
    pub const fn font_style(&self) -> Option<FontStyle> {
        self.font_style
    }

    #[must_use]
    pub const fn foreground(&self) -> Option<Rgba> {
        self.foreground
    }

    #[must_use]
    pub const fn background(&self) -> Option<Rgba> {
        self.background
    }

    #[must_use]
    pub const fn decorations(&self) -> Decorations {
        self.decorations
    }

    #[must_use]
    pub const fn is_underlined(&self) -> bool {
        self.decorations.contains(Decorations::UNDERLINE)
    }

    #[must_use]
    pub const fn is_waved(&self) -> bool {
        self.decorations.contains(Decorations::WAVE)
    }

    #[must_use]
    pub const fn is_strike_through(&self) -> bool {
        self.decorations.contains(Decorations::STRIKE_THROUGH)
    }

    #[must_use]
    pub const fn is_double_strike_through(&self) -> bool {
        self.decorations.contains(Decorations::DOUBLE_STRIKE_THROUGH)
    }

    #[must_use]
    pub const fn is_superscript(&self) -> bool {
        self.decorations.contains(Decorations::SUPERSCRIPT)
    }

    #[must_use]
    pub const fn is_subscript(&self) -> bool {
        self.decorations.contains(Decorations::SUBSCRIPT)
    }

    /// Check if the range carries no attribute at all.
    #[must_use]
    pub fn is_unstyled(&self) -> bool {
        self.font_style.is_none()
            && self.foreground.is_none()
            && self.background.is_none()
            && self.decorations.is_empty()
    }

    /// Check if this range intersects `[start, end)` with positive measure.
    #[must_use]
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end()
    }

    /// Positional ordering: start ascending, then longer ranges first.
    ///
    /// On equal starts the outer range sorts before the inner one, so an
    /// enclosing style is merged before the nested style that refines it.
    #[must_use]
    pub fn cmp_position(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| other.length.cmp(&self.length))
    }

    /// Merge `later` on top of `self`.
    ///
    /// Scalar attributes of `later` win when defined; decorations are
    /// unioned. The result spans the union of both intervals.
    #[must_use]
    pub fn merge(&self, later: &Self) -> Self {
        let start = self.start.min(later.start);
        let end = self.end().max(later.end());
        Self {
            start,
            length: if end == usize::MAX {
                Self::TO_END
            } else {
                end - start
            },
            font_style: later.font_style.or(self.font_style),
            foreground: later.foreground.or(self.foreground),
            background: later.background.or(self.background),
            decorations: self.decorations | later.decorations,
        }
    }
}

/// Sort style ranges by [`StyleRange::cmp_position`].
///
/// The sort is stable, so ranges with identical intervals keep their
/// discovery order and later ones still win when merged.
pub fn sort_ranges(ranges: &mut [StyleRange]) {
    ranges.sort_by(StyleRange::cmp_position);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, length: usize) -> StyleRange {
        StyleRange::new(start, length).unwrap()
    }

    #[test]
    fn test_construction_rejects_zero_length() {
        assert!(matches!(
            StyleRange::new(3, 0),
            Err(Error::InvalidRange { start: 3, length: 0 })
        ));
    }

    #[test]
    fn test_from_signed() {
        assert!(StyleRange::from_signed(-1, 4).is_err());
        assert!(StyleRange::from_signed(0, 0).is_err());
        assert!(StyleRange::from_signed(0, -2).is_err());
        assert_eq!(
            StyleRange::from_signed(2, -1).unwrap().length(),
            StyleRange::TO_END
        );
        assert_eq!(StyleRange::from_signed(2, 5).unwrap().end(), 7);
    }

    #[test]
    fn test_defaults_are_unspecified() {
        let r = range(0, 1);
        assert_eq!(r.font_style(), None);
        assert_eq!(r.foreground(), None);
        assert_eq!(r.background(), None);
        assert!(r.decorations().is_empty());
        assert!(r.is_unstyled());
    }

    #[test]
    fn test_decoration_predicates() {
        let r = range(0, 1).with_decorations(
            Decorations::UNDERLINE | Decorations::WAVE | Decorations::SUBSCRIPT,
        );
        assert!(r.is_underlined());
        assert!(r.is_waved());
        assert!(r.is_subscript());
        assert!(!r.is_superscript());
        assert!(!r.is_strike_through());
        assert!(!r.is_double_strike_through());
        assert!(r.decorations().is_script());
    }

    #[test]
    fn test_copy_is_independent() {
        let original = range(0, 4).with_decorations(Decorations::UNDERLINE);
        let copy = original.clone().with_decorations(Decorations::WAVE);
        assert!(!original.is_waved());
        assert!(copy.is_waved());
        assert!(copy.is_underlined());
    }

    #[test]
    fn test_ordering_longer_first_on_tie() {
        let mut ranges = vec![range(0, 3), range(2, 1), range(0, 5)];
        sort_ranges(&mut ranges);
        let keys: Vec<_> = ranges.iter().map(|r| (r.start(), r.length())).collect();
        assert_eq!(keys, vec![(0, 5), (0, 3), (2, 1)]);
    }

    #[test]
    fn test_to_end_sorts_before_bounded() {
        let mut ranges = vec![range(0, 5), StyleRange::to_end(0)];
        sort_ranges(&mut ranges);
        assert_eq!(ranges[0].length(), StyleRange::TO_END);
    }

    #[test]
    fn test_merge_later_wins_when_defined() {
        let outer = range(0, 10)
            .with_font_style(FontStyle::BOLD)
            .with_foreground(Rgba::RED);
        let inner = range(2, 3).with_foreground(Rgba::BLUE);
        let merged = outer.merge(&inner);

        assert_eq!(merged.font_style(), Some(FontStyle::BOLD));
        assert_eq!(merged.foreground(), Some(Rgba::BLUE));
        assert_eq!(merged.background(), None);
        assert_eq!((merged.start(), merged.end()), (0, 10));
    }

    #[test]
    fn test_merge_plain_overrides_bold() {
        let outer = range(0, 4).with_font_style(FontStyle::BOLD);
        let inner = range(0, 2).with_font_style(FontStyle::PLAIN);
        assert_eq!(outer.merge(&inner).font_style(), Some(FontStyle::PLAIN));
    }

    #[test]
    fn test_merge_unions_decorations() {
        let a = range(0, 4).with_decorations(Decorations::UNDERLINE);
        let b = range(1, 2).with_decorations(Decorations::STRIKE_THROUGH);
        let merged = a.merge(&b);
        assert!(merged.is_underlined());
        assert!(merged.is_strike_through());
    }

    #[test]
    fn test_merge_with_copy_is_idempotent() {
        let r = range(3, 4)
            .with_font_style(FontStyle::ITALIC)
            .with_background(Rgba::GREEN)
            .with_decorations(Decorations::WAVE);
        assert_eq!(r.merge(&r.clone()), r);
    }

    #[test]
    fn test_merge_to_end_stays_to_end() {
        let merged = StyleRange::to_end(2).merge(&range(0, 3));
        assert_eq!(merged.start(), 0);
        assert_eq!(merged.length(), StyleRange::TO_END);
    }

    #[test]
    fn test_overlaps() {
        let r = range(2, 3);
        assert!(r.overlaps(0, 3));
        assert!(r.overlaps(4, 9));
        assert!(!r.overlaps(0, 2));
        assert!(!r.overlaps(5, 6));
    }
}
