//! Run decomposition: plain text + style ranges into homogeneous runs.

use crate::style::{StyleRange, sort_ranges};
use crate::unicode::{char_count, line_break_len};
use std::collections::BTreeSet;

/// A run of text sharing one fully merged style.
///
/// Hard line breaks (`\n`, `\r`, `\r\n`) always form their own unstyled run.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange {
    text: String,
    style: Option<StyleRange>,
}

impl TextRange {
    /// Create a run.
    #[must_use]
    pub fn new(text: impl Into<String>, style: Option<StyleRange>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create an unstyled run.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn style(&self) -> Option<&StyleRange> {
        self.style.as_ref()
    }

    /// Check if this run is a hard line break token.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        crate::unicode::is_line_break(&self.text)
    }

    /// Length in chars.
    #[must_use]
    pub fn char_len(&self) -> usize {
        char_count(&self.text)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Decompose `text` into ordered, non-overlapping runs.
///
/// Every char of `text` lands in exactly one run. Run boundaries fall on
/// every style range start and end and around every hard line break.
/// Overlapping ranges are merged in positional order (see
/// [`StyleRange::cmp_position`]); the merged style of a run spans exactly
/// that run. Ranges reaching past the text are clipped. The caller's slice is
/// left untouched.
#[must_use]
pub fn build_text_ranges(text: &str, ranges: &[StyleRange]) -> Vec<TextRange> {
    let mut sorted = ranges.to_vec();
    sort_ranges(&mut sorted);

    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = offsets.len() - 1;

    let boundaries: BTreeSet<usize> = sorted
        .iter()
        .flat_map(|r| [r.start(), r.end_within(len)])
        .filter(|&b| b <= len)
        .collect();

    let mut runs = Vec::new();
    let mut start = 0usize;
    while start < len {
        let rest = &text[offsets[start]..];

        if let Some(break_len) = line_break_len(rest) {
            runs.push(TextRange::plain(&rest[..break_len]));
            start += break_len;
            continue;
        }

        let next_break = rest
            .find(['\r', '\n'])
            .map_or(len, |byte| start + char_count(&rest[..byte]));
        let next_boundary = boundaries
            .range(start + 1..)
            .next()
            .copied()
            .unwrap_or(len);
        let end = next_break.min(next_boundary).min(len);

        runs.push(TextRange::new(
            &text[offsets[start]..offsets[end]],
            merged_style(&sorted, start, end),
        ));
        start = end;
    }

    runs
}

/// Merge every range intersecting `[start, end)` into one style over it.
fn merged_style(sorted: &[StyleRange], start: usize, end: usize) -> Option<StyleRange> {
    let merged = sorted
        .iter()
        .filter(|r| r.overlaps(start, end))
        .fold(None::<StyleRange>, |acc, r| {
            Some(acc.map_or_else(|| r.clone(), |acc| acc.merge(r)))
        })?;
    merged.with_interval(start, end - start).ok()
}
