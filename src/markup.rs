//! Inline style markup.
//!
//! Styled label text is written as plain text with `{text:settings}`
//! statements. Settings are `;`-separated tokens:
//!
//! | token(s) | effect |
//! |---|---|
//! | `p`, `plain` | plain font style |
//! | `b`, `bold` | add bold |
//! | `i`, `italic` | add italic |
//! | `u`, `underlined` | underline |
//! | `w`, `waved` | wavy underline |
//! | `s`, `strike` | strike-through |
//! | `ds`, `doublestrike` | double strike-through |
//! | `sp`, `sup`, `superscript` | superscript |
//! | `sb`, `sub`, `subscript` | subscript |
//! | `c(..)`, `color(..)`, `fg(..)`, `foreground(..)` | foreground color |
//! | `bg(..)`, `background(..)` | background color |
//!
//! Tokens match exactly, so `{a: b}` is not bold. Whitespace is only
//! tolerated inside color payloads.
//!
//! `{br}` inserts a hard line break. Malformed statements never fail; they
//! fall back to literal text:
//!
//! - no `:` in the statement: the statement is kept without its braces
//! - no recognized token: the whole statement is kept, braces included
//! - no closing `}`: the rest of the input is kept verbatim
//!
//! There is no escape syntax, so a literal `{` cannot be produced.
//!
//! # Examples
//!
//! ```
//! use styled_text::markup;
//!
//! let content = markup::parse("{Bold:b} and {red:c(255,0,0)}{br}{hello}");
//! assert_eq!(content.text(), "Bold and red\nhello");
//! assert_eq!(content.style_ranges().len(), 2);
//!
//! let fallback = markup::parse("{hi:zzz}");
//! assert_eq!(fallback.text(), "{hi:zzz}");
//! assert!(fallback.style_ranges().is_empty());
//! ```

use crate::color::Rgba;
use crate::style::{Decorations, FontStyle, StyleRange};
use crate::text::StyledText;
use crate::unicode::char_count;

/// Statement producing a hard line break.
const LINE_BREAK_STATEMENT: &str = "br";

/// Attributes collected from a settings string.
#[derive(Clone, Copy, Debug, Default)]
struct Settings {
    font_style: Option<FontStyle>,
    foreground: Option<Rgba>,
    background: Option<Rgba>,
    decorations: Decorations,
    recognized: usize,
}

impl Settings {
    fn parse(settings: &str) -> Self {
        let mut parsed = Self::default();
        for token in settings.split(';') {
            parsed.apply(token);
        }
        parsed
    }

    fn apply(&mut self, token: &str) {
        match token {
            "p" | "plain" => self.font_style = Some(FontStyle::PLAIN),
            "b" | "bold" => self.add_font_style(FontStyle::BOLD),
            "i" | "italic" => self.add_font_style(FontStyle::ITALIC),
            "u" | "underlined" => self.add_decoration(Decorations::UNDERLINE),
            "w" | "waved" => self.add_decoration(Decorations::WAVE),
            "s" | "strike" => self.add_decoration(Decorations::STRIKE_THROUGH),
            "ds" | "doublestrike" => self.add_decoration(Decorations::DOUBLE_STRIKE_THROUGH),
            "sp" | "sup" | "superscript" => self.add_decoration(Decorations::SUPERSCRIPT),
            "sb" | "sub" | "subscript" => self.add_decoration(Decorations::SUBSCRIPT),
            _ => self.apply_color(token),
        }
    }

    fn add_font_style(&mut self, style: FontStyle) {
        self.font_style = Some(self.font_style.unwrap_or(FontStyle::PLAIN) | style);
        self.recognized += 1;
    }

    fn add_decoration(&mut self, decoration: Decorations) {
        self.decorations |= decoration;
        self.recognized += 1;
    }

    fn apply_color(&mut self, token: &str) {
        let Some((key, payload)) = split_call(token) else {
            tracing::trace!(token, "ignoring unknown markup token");
            return;
        };
        let target = match key {
            "c" | "color" | "fg" | "foreground" => &mut self.foreground,
            "bg" | "background" => &mut self.background,
            _ => {
                tracing::trace!(token, "ignoring unknown markup token");
                return;
            }
        };
        match Rgba::parse(payload) {
            Ok(color) => {
                *target = Some(color);
                self.recognized += 1;
            }
            Err(err) => tracing::trace!(token, %err, "dropping color token"),
        }
    }

    fn to_range(self, start: usize, length: usize) -> Option<StyleRange> {
        let mut range = StyleRange::new(start, length)
            .ok()?
            .with_decorations(self.decorations);
        if let Some(style) = self.font_style {
            range = range.with_font_style(style);
        }
        if let Some(color) = self.foreground {
            range = range.with_foreground(color);
        }
        if let Some(color) = self.background {
            range = range.with_background(color);
        }
        Some(range)
    }
}

/// Split `key(payload)` into its parts.
fn split_call(token: &str) -> Option<(&str, &str)> {
    let inner = token.strip_suffix(')')?;
    let open = inner.find('(')?;
    Some((&inner[..open], &inner[open + 1..]))
}

/// Accumulates plain text and the ranges anchored in it.
#[derive(Default)]
struct Output {
    text: String,
    chars: usize,
    ranges: Vec<StyleRange>,
}

impl Output {
    fn push(&mut self, text: &str) {
        self.text.push_str(text);
        self.chars += char_count(text);
    }

    fn push_statement(&mut self, statement: &str) {
        if statement == LINE_BREAK_STATEMENT {
            self.push("\n");
            return;
        }

        let Some(colon) = statement.rfind(':') else {
            self.push(statement);
            return;
        };
        let display = &statement[..colon];
        let settings = Settings::parse(&statement[colon + 1..]);

        if settings.recognized == 0 {
            tracing::trace!(statement, "no style token recognized, keeping literal text");
            self.push("{");
            self.push(statement);
            self.push("}");
            return;
        }

        if let Some(range) = settings.to_range(self.chars, char_count(display)) {
            self.ranges.push(range);
        }
        self.push(display);
    }
}

/// Parse markup into plain text and style ranges.
///
/// Ranges are returned in discovery order. Parsing never fails.
#[must_use]
pub fn parse(markup: &str) -> StyledText {
    let mut out = Output::default();
    let mut rest = markup;

    while let Some(open) = rest.find('{') {
        out.push(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            tracing::trace!("unterminated markup statement, keeping literal text");
            out.push(&rest[open..]);
            rest = "";
            break;
        };
        out.push_statement(&after_open[..close]);
        rest = &after_open[close + 1..];
    }
    out.push(rest);

    StyledText::from_parts(out.text, out.ranges)
}

/// Settings tokens describing `range`, in canonical short form.
fn tokens(range: &StyleRange) -> Vec<String> {
    let mut tokens = Vec::new();
    if let Some(style) = range.font_style() {
        if style.is_empty() {
            tokens.push("p".to_string());
        }
        if style.contains(FontStyle::BOLD) {
            tokens.push("b".to_string());
        }
        if style.contains(FontStyle::ITALIC) {
            tokens.push("i".to_string());
        }
    }
    let decorations = [
        (Decorations::UNDERLINE, "u"),
        (Decorations::WAVE, "w"),
        (Decorations::STRIKE_THROUGH, "s"),
        (Decorations::DOUBLE_STRIKE_THROUGH, "ds"),
        (Decorations::SUPERSCRIPT, "sp"),
        (Decorations::SUBSCRIPT, "sb"),
    ];
    for (flag, token) in decorations {
        if range.decorations().contains(flag) {
            tokens.push(token.to_string());
        }
    }
    if let Some(color) = range.foreground() {
        tokens.push(format!("c({})", color.to_components()));
    }
    if let Some(color) = range.background() {
        tokens.push(format!("bg({})", color.to_components()));
    }
    tokens
}

/// Encode content back to markup.
///
/// Overlapping ranges are flattened into their merged runs first, so the
/// output never nests statements. Hard breaks become `{br}` (a `\r\n` pair
/// comes back as `\n`). Text containing `{` or `}` cannot be escaped and
/// will not survive a round trip.
#[must_use]
pub fn to_markup(content: &StyledText) -> String {
    let mut out = String::with_capacity(content.text().len());
    for run in content.text_ranges() {
        if run.is_line_break() {
            out.push('{');
            out.push_str(LINE_BREAK_STATEMENT);
            out.push('}');
            continue;
        }
        let tokens = run.style().map(tokens).unwrap_or_default();
        if tokens.is_empty() {
            out.push_str(run.text());
        } else {
            out.push('{');
            out.push_str(run.text());
            out.push(':');
            out.push_str(&tokens.join(";"));
            out.push('}');
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Arbitrary input never panics and ranges stay inside the text.
        #[test]
        fn parse_ranges_stay_in_text(s in "[a-z{}:;()br ,0-9]{0,60}") {
            let content = parse(&s);
            let len = content.char_len();
            for range in content.style_ranges() {
                prop_assert!(range.end() <= len);
            }
        }

        /// Input without braces is returned unchanged.
        #[test]
        fn brace_free_input_is_identity(s in "[^{}]{0,60}") {
            let content = parse(&s);
            prop_assert_eq!(content.text(), s.as_str());
            prop_assert!(content.style_ranges().is_empty());
        }
    }
}
