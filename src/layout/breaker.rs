//! Greedy line breaker.
//!
//! Walks the runs once, filling the current row until a run no longer fits,
//! then searches a break point according to the wrap mode. Break points are
//! whitespace anywhere on the row, so a word split across style runs still
//! wraps as one. Rows are closed on hard breaks and wraps; when no further
//! row fits the row budget or the bounds, the last row is truncated with the
//! configured suffix and layout stops.

use super::{Fragment, LayoutOptions, Row, WrapMode};
use crate::font::{Font, FontMetrics, LineMetrics};
use crate::style::StyleRange;
use crate::text::TextRange;
use crate::unicode::{char_count, grapheme_boundaries};

/// Upper bound on probes of one break-point search.
pub const MAX_BREAK_ITERATIONS: usize = 32;

/// Where a run that overflows the row gets split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Break {
    /// Place the bytes before this offset on the current row.
    At(usize),
    /// Move the whole remainder to the next row.
    Defer,
    /// Move the row's text from this byte offset on, plus the remainder,
    /// to the next row. Used when a word started in an earlier run.
    Carry(usize),
}

pub(super) struct LineBreaker<'a, M: ?Sized> {
    options: &'a LayoutOptions,
    metrics: &'a M,
    base: LineMetrics,
    gap: i32,
    rows: Vec<Row>,
    row: Row,
    /// Leading-space trimming already ran for the current row.
    trimmed: bool,
    /// Top of the current row, relative to the bounds.
    y: i32,
    /// Chars of the plain text consumed so far.
    consumed: usize,
    done: bool,
}

impl<'a, M: FontMetrics + ?Sized> LineBreaker<'a, M> {
    pub(super) fn new(options: &'a LayoutOptions, metrics: &'a M) -> Self {
        let base = metrics.line_metrics(&options.font);
        let mut breaker = Self {
            options,
            metrics,
            base,
            gap: options.effective_row_gap(),
            rows: Vec::new(),
            row: Row::default(),
            trimmed: false,
            y: 0,
            consumed: 0,
            done: false,
        };
        breaker.row = breaker.new_row(true);
        breaker
    }

    pub(super) fn run(mut self, ranges: &[TextRange]) -> Vec<Row> {
        for (index, range) in ranges.iter().enumerate() {
            if self.done {
                break;
            }
            let next = ranges.get(index + 1);
            if range.is_line_break() {
                self.hard_break(range, next.is_none());
            } else {
                let ends_line = next.is_none_or(TextRange::is_line_break);
                self.place_range(range, ends_line);
            }
        }

        if !self.done && !self.row.is_empty() {
            self.rows.push(self.row);
        }
        self.rows
    }

    fn new_row(&self, leading: bool) -> Row {
        Row {
            leading,
            height: self.base.height,
            ascent: self.base.ascent,
            ..Row::default()
        }
    }

    /// Check whether another row may follow the current one.
    fn can_open_row(&self) -> bool {
        let max_rows = self.options.max_rows;
        if max_rows > 0 && self.rows.len() + 1 >= max_rows {
            return false;
        }
        let bottom = self
            .y
            .saturating_add(self.row.height)
            .saturating_add(self.gap)
            .saturating_add(self.base.height);
        bottom <= self.options.bounds.height
    }

    fn finish_row(&mut self, next_leading: bool) {
        let next = self.new_row(next_leading);
        let row = std::mem::replace(&mut self.row, next);
        self.y = self.y.saturating_add(row.height).saturating_add(self.gap);
        self.rows.push(row);
        self.trimmed = false;
    }

    fn truncate_and_stop(&mut self) {
        if self.options.truncate {
            self.truncate_row();
        }
        let row = std::mem::take(&mut self.row);
        self.rows.push(row);
        self.done = true;
    }

    fn hard_break(&mut self, range: &TextRange, is_last: bool) {
        self.consumed += range.char_len();
        if self.row.is_empty() {
            let font = self.options.font.clone();
            let width = self.metrics.string_width(&font, " ");
            self.append(Fragment {
                range: TextRange::plain(" "),
                font,
                width,
            });
        }
        if is_last {
            return;
        }
        if self.can_open_row() {
            self.finish_row(true);
        } else {
            self.truncate_and_stop();
        }
    }

    /// Lay out one run. `ends_line` is set when a hard break or the end of
    /// the text follows, so trailing whitespace never opens a row.
    fn place_range(&mut self, range: &TextRange, ends_line: bool) {
        let font = self
            .options
            .font
            .for_style(range.style(), self.options.script_ratio);
        let style = range.style();
        let mut rest = range.text();

        while !rest.is_empty() {
            if !self.row.leading && !self.trimmed && self.row.is_empty() {
                self.trimmed = true;
                if let Some(stripped) = rest.strip_prefix(' ') {
                    self.consumed += 1;
                    rest = stripped;
                    if rest.is_empty() {
                        break;
                    }
                }
            }

            let available = self.options.bounds.width.saturating_sub(self.row.width);
            let width = self.metrics.string_width(&font, rest);
            if width <= available {
                self.place(rest, style, &font, width);
                return;
            }

            if self.options.wrap == WrapMode::None {
                self.place(rest, style, &font, width);
                if self.options.truncate {
                    self.truncate_and_stop();
                }
                return;
            }

            match self.find_break(rest, &font, available) {
                Break::At(split) => {
                    let (head, tail) = rest.split_at(split);
                    let head_width = self.metrics.string_width(&font, head);
                    self.place(head, style, &font, head_width);
                    rest = tail;
                    if rest.is_empty() {
                        return;
                    }
                }
                Break::Defer => {}
                Break::Carry(at) => {
                    let carried = self.take_row_tail(at);
                    if !self.can_open_row() {
                        self.truncate_and_stop();
                        return;
                    }
                    self.finish_row(false);
                    self.place_carried(carried);
                    continue;
                }
            }

            if rest.trim().is_empty() && ends_line {
                // Whitespace left before a break or the end is dropped.
                self.consumed += char_count(rest);
                return;
            }
            if self.can_open_row() {
                self.finish_row(false);
            } else {
                self.truncate_and_stop();
                return;
            }
        }
    }

    /// Byte length of the longest grapheme-aligned prefix of `text` that
    /// fits into `available` pixels.
    fn fit_prefix(&self, text: &str, font: &Font, available: i32) -> (usize, Vec<usize>) {
        let boundaries = grapheme_boundaries(text);
        let fits = |count: usize| {
            count == 0
                || self.metrics.string_width(font, &text[..boundaries[count - 1]]) <= available
        };

        // `lo` graphemes are known to fit, `hi` are known not to.
        let mut lo = 0usize;
        let mut hi = boundaries.len();
        let mut iterations = 0usize;
        while hi - lo > 1 {
            if iterations == MAX_BREAK_ITERATIONS {
                tracing::warn!(
                    iterations,
                    graphemes = boundaries.len(),
                    "break search exceeded its bound; using the shortest fitting prefix"
                );
                break;
            }
            iterations += 1;
            let mid = lo + (hi - lo) / 2;
            if fits(mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let bytes = if lo == 0 { 0 } else { boundaries[lo - 1] };
        (bytes, boundaries)
    }

    fn find_break(&self, rest: &str, font: &Font, available: i32) -> Break {
        let row_empty = self.row.is_empty();
        let (fit, boundaries) = self.fit_prefix(rest, font, available);
        let first_grapheme = boundaries.first().copied().unwrap_or(rest.len());

        if self.options.wrap == WrapMode::Char {
            return if fit > 0 {
                Break::At(fit)
            } else if row_empty {
                Break::At(first_grapheme)
            } else {
                Break::Defer
            };
        }

        if fit > 0 && rest[fit..].starts_with(char::is_whitespace) {
            return Break::At(fit);
        }
        if let Some(space) = rest[..fit].rfind(char::is_whitespace).filter(|&i| i > 0) {
            return Break::At(space);
        }
        let row_text = self.row.text();
        if !row_text.trim().is_empty() {
            if rest.starts_with(char::is_whitespace) || row_text.ends_with(char::is_whitespace) {
                return Break::Defer;
            }
            // The word began in an earlier run; move all of it.
            if let Some(at) = last_space(&row_text) {
                return Break::Carry(at);
            }
        }

        if self.options.wrap == WrapMode::Word {
            let word_start = rest.len() - rest.trim_start().len();
            let word_end = rest[word_start..]
                .find(char::is_whitespace)
                .map_or(rest.len(), |end| word_start + end);
            tracing::debug!(
                word = &rest[..word_end],
                available,
                "word wider than the row placed whole"
            );
            Break::At(word_end)
        } else if fit > 0 {
            tracing::debug!(available, "word wider than the row split at a grapheme");
            Break::At(fit)
        } else if row_empty {
            Break::At(first_grapheme)
        } else {
            Break::Defer
        }
    }

    /// Detach the row's text from byte offset `at` on and hand it back as
    /// fragments, rewinding the consumed count to match.
    fn take_row_tail(&mut self, at: usize) -> Vec<Fragment> {
        let mut carried = Vec::new();
        let mut start: usize = self.row.fragments.iter().map(|f| f.range.text().len()).sum();
        while let Some(mut fragment) = self.row.fragments.pop() {
            let text = fragment.range.text();
            start -= text.len();
            if start >= at {
                carried.push(fragment);
                continue;
            }
            let local = at - start;
            if local < text.len() {
                let (head, tail) = text.split_at(local);
                let (head, tail) = (head.to_string(), tail.to_string());
                let style = fragment.style().cloned();
                carried.push(Fragment {
                    width: self.metrics.string_width(&fragment.font, &tail),
                    range: TextRange::new(tail, style.clone()),
                    font: fragment.font.clone(),
                });
                fragment.width = self.metrics.string_width(&fragment.font, &head);
                fragment.range = TextRange::new(head, style);
            }
            self.row.fragments.push(fragment);
            break;
        }
        carried.reverse();

        let moved: usize = carried.iter().map(|f| f.range.char_len()).sum();
        self.consumed -= moved;
        if self
            .row
            .mnemonic
            .is_some_and(|offset| offset >= self.row.char_len())
        {
            self.row.mnemonic = None;
        }
        self.refresh_row_metrics();
        carried
    }

    /// Put a carried word tail at the start of the fresh row, trimming the
    /// separating space like any wrapped row start.
    fn place_carried(&mut self, carried: Vec<Fragment>) {
        for fragment in carried {
            let mut text = fragment.range.text();
            let mut width = fragment.width;
            if !self.trimmed {
                self.trimmed = true;
                if let Some(stripped) = text.strip_prefix(' ') {
                    self.consumed += 1;
                    text = stripped;
                    width = self.metrics.string_width(&fragment.font, text);
                }
            }
            if !text.is_empty() {
                self.place(text, fragment.style(), &fragment.font, width);
            }
        }
    }

    fn refresh_row_metrics(&mut self) {
        let (mut height, mut ascent) = (self.base.height, self.base.ascent);
        for fragment in &self.row.fragments {
            let metrics = self.metrics.line_metrics(&fragment.font);
            height = height.max(metrics.height);
            ascent = ascent.max(metrics.ascent);
        }
        self.row.height = height;
        self.row.ascent = ascent;
        self.row.width = self.row.fragments.iter().map(|f| f.width).sum();
    }

    /// Append `text` to the current row, tracking the mnemonic offset.
    fn place(&mut self, text: &str, style: Option<&StyleRange>, font: &Font, width: i32) {
        let chars = char_count(text);
        let placed = self.consumed..self.consumed + chars;
        if let Some(mnemonic) = self.options.mnemonic.filter(|m| placed.contains(m)) {
            self.row.mnemonic = Some(self.row.char_len() + mnemonic - self.consumed);
        }
        self.consumed += chars;
        self.append(Fragment {
            range: TextRange::new(text, style.cloned()),
            font: font.clone(),
            width,
        });
    }

    fn append(&mut self, fragment: Fragment) {
        let metrics = self.metrics.line_metrics(&fragment.font);
        self.row.height = self.row.height.max(metrics.height);
        self.row.ascent = self.row.ascent.max(metrics.ascent);
        self.row.width = self.row.width.saturating_add(fragment.width);
        self.row.fragments.push(fragment);
    }

    /// Shrink the current row until the suffix fits behind it, then append
    /// the suffix.
    fn truncate_row(&mut self) {
        self.row.truncated = true;
        let suffix = self.options.truncation_suffix.as_str();
        let (font, style) = self.row.fragments.last().map_or_else(
            || (self.options.font.clone(), None),
            |last| (last.font.clone(), last.style().cloned()),
        );
        let suffix_width = self.metrics.string_width(&font, suffix);
        let budget = self.options.bounds.width;

        while self.row.width.saturating_add(suffix_width) > budget && self.drop_last_grapheme() {}

        while let Some(last) = self.row.fragments.last_mut() {
            let trimmed = last.range.text().trim_end();
            if trimmed.len() == last.range.text().len() {
                break;
            }
            if trimmed.is_empty() {
                self.row.fragments.pop();
            } else {
                let text = trimmed.to_string();
                last.width = self.metrics.string_width(&last.font, &text);
                last.range = TextRange::new(text, last.range.style().cloned());
            }
        }
        self.row.width = self.row.fragments.iter().map(|f| f.width).sum();

        if self
            .row
            .mnemonic
            .is_some_and(|offset| offset >= self.row.char_len())
        {
            self.row.mnemonic = None;
        }

        tracing::debug!(
            kept = %self.row.text(),
            suffix,
            budget,
            "row truncated"
        );

        if !suffix.is_empty() {
            self.append(Fragment {
                range: TextRange::new(suffix, style),
                font,
                width: suffix_width,
            });
        }
    }

    /// Remove the last grapheme of the row. Returns false once the row is
    /// empty.
    fn drop_last_grapheme(&mut self) -> bool {
        let Some(last) = self.row.fragments.last_mut() else {
            return false;
        };
        let text = last.range.text();
        let boundaries = grapheme_boundaries(text);
        let cut = boundaries.len().checked_sub(2).map_or(0, |i| boundaries[i]);
        if cut == 0 {
            let removed = last.width;
            self.row.fragments.pop();
            self.row.width -= removed;
        } else {
            let text = text[..cut].to_string();
            let width = self.metrics.string_width(&last.font, &text);
            self.row.width += width - last.width;
            last.width = width;
            last.range = TextRange::new(text, last.range.style().cloned());
        }
        true
    }
}

/// Byte offset of the last whitespace char in `text`, ignoring one at
/// offset 0.
fn last_space(text: &str) -> Option<usize> {
    text.rfind(char::is_whitespace).filter(|&index| index > 0)
}
