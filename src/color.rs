//! RGBA color type and color payload parsing.
//!
//! This module provides the [`Rgba`] type used for style range foreground
//! and background colors. It supports:
//!
//! - **Color creation**: From f32/u8 components or hex strings
//! - **Payload parsing**: Color names, hex literals and numeric component
//!   lists, as written inside markup color tokens (`c(...)`, `bg(...)`)
//!
//! # Examples
//!
//! ```
//! use styled_text::Rgba;
//!
//! let red = Rgba::parse("red").unwrap();
//! assert_eq!(red, Rgba::RED);
//!
//! let custom = Rgba::parse("100, 149, 237").unwrap();
//! assert_eq!(custom.to_rgb_u8(), (100, 149, 237));
//!
//! let hex = Rgba::parse("#1a1a2e").unwrap();
//! assert_eq!(hex.to_string(), "#1A1A2E");
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Named colors accepted by [`Rgba::parse`], as 8-bit RGBA.
const NAMED_COLORS: &[(&str, (u8, u8, u8, u8))] = &[
    ("black", (0, 0, 0, 255)),
    ("white", (255, 255, 255, 255)),
    ("red", (255, 0, 0, 255)),
    ("green", (0, 255, 0, 255)),
    ("blue", (0, 0, 255, 255)),
    ("yellow", (255, 255, 0, 255)),
    ("cyan", (0, 255, 255, 255)),
    ("magenta", (255, 0, 255, 255)),
    ("orange", (255, 200, 0, 255)),
    ("pink", (255, 175, 175, 255)),
    ("gray", (128, 128, 128, 255)),
    ("grey", (128, 128, 128, 255)),
    ("lightgray", (192, 192, 192, 255)),
    ("lightgrey", (192, 192, 192, 255)),
    ("darkgray", (64, 64, 64, 255)),
    ("darkgrey", (64, 64, 64, 255)),
    ("transparent", (0, 0, 0, 0)),
];

impl Rgba {
    /// Alpha zero, so nothing gets painted.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from unit-range channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, u8::MAX)
    }

    /// Color from 8-bit channels, each mapped onto `0.0..=1.0`.
    #[must_use]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let unit = |channel: u8| f32::from(channel) / 255.0;
        Self::new(unit(r), unit(g), unit(b), unit(a))
    }

    /// Decode `RGB`, `RRGGBB` or `RRGGBBAA` hex digits, with or without a
    /// leading `#`. Short form digits are doubled (`#0F8` is `#00FF88`).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;
        let nibble = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;

        match digits.len() {
            3 => Some(Self::from_rgb_u8(nibble(8), nibble(4), nibble(0))),
            6 => Some(Self::from_rgb_u8(byte(16), byte(8), byte(0))),
            8 => Some(Self::from_rgba_u8(byte(24), byte(16), byte(8), byte(0))),
            _ => None,
        }
    }

    /// Look up a named color (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, (r, g, b, a))| Self::from_rgba_u8(r, g, b, a))
    }

    /// Parse a `r,g,b` or `r,g,b,a` list of 0-255 components.
    #[must_use]
    pub fn from_components(list: &str) -> Option<Self> {
        let mut parts = [255u8; 4];
        let mut count = 0usize;
        for part in list.split(',') {
            let slot = parts.get_mut(count)?;
            *slot = part.trim().parse().ok()?;
            count += 1;
        }
        match count {
            3 | 4 => Some(Self::from_rgba_u8(parts[0], parts[1], parts[2], parts[3])),
            _ => None,
        }
    }

    /// Parse a color payload as written inside a markup color token.
    ///
    /// Accepts a known color name, a hex literal, or a numeric component
    /// list. Surrounding whitespace is ignored.
    pub fn parse(payload: &str) -> Result<Self> {
        let payload = payload.trim();
        if payload.contains(',') {
            return Self::from_components(payload)
                .ok_or_else(|| Error::InvalidColor(payload.to_string()));
        }
        Self::from_name(payload)
            .or_else(|| {
                if payload.starts_with('#') {
                    Self::from_hex(payload)
                } else {
                    None
                }
            })
            .ok_or_else(|| Error::InvalidColor(payload.to_string()))
    }

    /// Same channels, different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// 8-bit channels, rounded and clamped.
    #[must_use]
    pub fn to_rgb_u8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        )
    }

    #[must_use]
    pub fn to_rgba_u8(self) -> (u8, u8, u8, u8) {
        (
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        )
    }

    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Render as a numeric component list accepted by [`Rgba::parse`].
    ///
    /// Alpha is omitted for opaque colors.
    #[must_use]
    pub fn to_components(self) -> String {
        let (r, g, b, a) = self.to_rgba_u8();
        if a == 255 {
            format!("{r},{g},{b}")
        } else {
            format!("{r},{g},{b},{a}")
        }
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Uppercase hex, `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b, a) = self.to_rgba_u8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")?;
        if !self.is_opaque() {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lengths() {
        assert_eq!(Rgba::from_hex("#0F8"), Some(Rgba::from_rgb_u8(0, 255, 136)));
        assert_eq!(Rgba::from_hex("1a2B3c"), Some(Rgba::from_rgb_u8(26, 43, 60)));
        assert_eq!(
            Rgba::from_hex("#10203040"),
            Some(Rgba::from_rgba_u8(16, 32, 48, 64))
        );
    }

    #[test]
    fn hex_rejects_bad_digits() {
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#GG0000"), None);
        assert_eq!(Rgba::from_hex("#+F0000"), None);
        assert_eq!(Rgba::from_hex("#\u{ff}\u{ff}"), None);
        assert_eq!(Rgba::from_hex(""), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(Rgba::parse("red"), Ok(Rgba::RED));
        assert_eq!(Rgba::parse("Black"), Ok(Rgba::BLACK));
        assert_eq!(Rgba::parse(" white "), Ok(Rgba::WHITE));
        assert_eq!(Rgba::parse("grey"), Rgba::parse("gray"));
        assert_eq!(Rgba::parse("transparent").map(Rgba::is_opaque), Ok(false));
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(Rgba::parse("255,0,0"), Ok(Rgba::RED));
        assert_eq!(Rgba::parse(" 0 , 0 , 255 "), Ok(Rgba::BLUE));
        let translucent = Rgba::parse("0,0,0,128").unwrap();
        assert_eq!(translucent.to_rgba_u8(), (0, 0, 0, 128));
    }

    #[test]
    fn test_parse_hex_payload() {
        assert_eq!(Rgba::parse("#00FF00"), Ok(Rgba::GREEN));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(Rgba::parse("nope"), Err(Error::InvalidColor(_))));
        assert!(Rgba::parse("256,0,0").is_err());
        assert!(Rgba::parse("1,2").is_err());
        assert!(Rgba::parse("1,2,3,4,5").is_err());
        assert!(Rgba::parse("").is_err());
        // Bare hex digits without '#' read as a name, not a color.
        assert!(Rgba::parse("FF0000").is_err());
    }

    #[test]
    fn u8_conversion_rounds_and_clamps() {
        assert_eq!(Rgba::rgb(0.5, 1.5, -0.2).to_rgb_u8(), (128, 255, 0));
        assert_eq!(Rgba::TRANSPARENT.to_rgba_u8(), (0, 0, 0, 0));
    }

    #[test]
    fn test_to_components() {
        assert_eq!(Rgba::RED.to_components(), "255,0,0");
        assert_eq!(
            Rgba::from_rgba_u8(1, 2, 3, 4).to_components(),
            "1,2,3,4"
        );
    }

    #[test]
    fn display_as_hex() {
        assert_eq!(Rgba::from_rgb_u8(26, 43, 60).to_string(), "#1A2B3C");
        assert_eq!(Rgba::WHITE.with_alpha(0.5).to_string(), "#FFFFFF80");
    }
}
