//! Row placement inside a bounding rectangle.

use super::{Rect, Row};
use crate::error::{Error, Result};

/// Reading direction, used to resolve leading/trailing alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Horizontal alignment of each row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    /// Left in left-to-right text, right otherwise.
    #[default]
    Leading,
    /// Right in left-to-right text, left otherwise.
    Trailing,
}

impl HorizontalAlignment {
    /// Map leading/trailing onto left/right for the given orientation.
    #[must_use]
    pub const fn resolve(self, orientation: Orientation) -> Self {
        match (self, orientation) {
            (Self::Leading, Orientation::LeftToRight)
            | (Self::Trailing, Orientation::RightToLeft) => Self::Left,
            (Self::Trailing, Orientation::LeftToRight)
            | (Self::Leading, Orientation::RightToLeft) => Self::Right,
            (other, _) => other,
        }
    }

    /// X offset of a row of `row_width` pixels inside `bounds_width`.
    ///
    /// Centering rounds down. Rows wider than the bounds get a negative
    /// offset for center and right alignment.
    #[must_use]
    pub const fn offset(self, bounds_width: i32, row_width: i32, orientation: Orientation) -> i32 {
        let free = bounds_width.saturating_sub(row_width);
        match self.resolve(orientation) {
            Self::Center => free.div_euclid(2),
            Self::Right => free,
            _ => 0,
        }
    }
}

impl TryFrom<i32> for HorizontalAlignment {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Center),
            2 => Ok(Self::Left),
            4 => Ok(Self::Right),
            10 => Ok(Self::Leading),
            11 => Ok(Self::Trailing),
            _ => Err(Error::UnsupportedAlignment {
                kind: "horizontal",
                value,
            }),
        }
    }
}

/// Vertical alignment of the whole block of rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Y offset of a block `content_height` pixels tall inside
    /// `bounds_height`.
    ///
    /// Centering rounds up. Content never starts above the top edge.
    #[must_use]
    pub const fn offset(self, bounds_height: i32, content_height: i32) -> i32 {
        let free = bounds_height.saturating_sub(content_height);
        let offset = match self {
            Self::Top => 0,
            Self::Center => free.saturating_add(1).div_euclid(2),
            Self::Bottom => free,
        };
        if offset < 0 { 0 } else { offset }
    }
}

impl TryFrom<i32> for VerticalAlignment {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::Center),
            1 => Ok(Self::Top),
            3 => Ok(Self::Bottom),
            _ => Err(Error::UnsupportedAlignment {
                kind: "vertical",
                value,
            }),
        }
    }
}

/// Where a row gets painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowPlacement {
    /// Left edge of the row.
    pub x: i32,
    /// Top edge of the row.
    pub y: i32,
    /// Baseline the row's fragments sit on.
    pub baseline: i32,
}

/// Total height of `rows` stacked with `row_gap` pixels between them.
#[must_use]
pub fn content_height(rows: &[Row], row_gap: i32) -> i32 {
    let gaps = i32::try_from(rows.len().saturating_sub(1))
        .unwrap_or(i32::MAX)
        .saturating_mul(row_gap.max(0));
    rows.iter()
        .fold(gaps, |total, row| total.saturating_add(row.height))
}

/// Compute the origin of every row inside `bounds`.
#[must_use]
pub fn place_rows(
    rows: &[Row],
    bounds: Rect,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    orientation: Orientation,
    row_gap: i32,
) -> Vec<RowPlacement> {
    let gap = row_gap.max(0);
    let mut y = bounds
        .y
        .saturating_add(vertical.offset(bounds.height, content_height(rows, gap)));

    rows.iter()
        .map(|row| {
            let x = bounds
                .x
                .saturating_add(horizontal.offset(bounds.width, row.width, orientation));
            let placement = RowPlacement {
                x,
                y,
                baseline: y.saturating_add(row.ascent),
            };
            y = y.saturating_add(row.height).saturating_add(gap);
            placement
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: i32, height: i32, ascent: i32) -> Row {
        Row {
            width,
            height,
            ascent,
            ..Row::default()
        }
    }

    #[test]
    fn test_resolve_orientation() {
        use HorizontalAlignment::*;
        assert_eq!(Leading.resolve(Orientation::LeftToRight), Left);
        assert_eq!(Leading.resolve(Orientation::RightToLeft), Right);
        assert_eq!(Trailing.resolve(Orientation::LeftToRight), Right);
        assert_eq!(Trailing.resolve(Orientation::RightToLeft), Left);
        assert_eq!(Center.resolve(Orientation::RightToLeft), Center);
        assert_eq!(Left.resolve(Orientation::RightToLeft), Left);
    }

    #[test]
    fn test_horizontal_center_floors() {
        let ltr = Orientation::LeftToRight;
        assert_eq!(HorizontalAlignment::Center.offset(100, 41, ltr), 29);
        assert_eq!(HorizontalAlignment::Center.offset(100, 110, ltr), -5);
        assert_eq!(HorizontalAlignment::Center.offset(100, 111, ltr), -6);
        assert_eq!(HorizontalAlignment::Right.offset(100, 41, ltr), 59);
        assert_eq!(HorizontalAlignment::Left.offset(100, 41, ltr), 0);
    }

    #[test]
    fn test_vertical_center_ceils_and_clamps() {
        assert_eq!(VerticalAlignment::Center.offset(100, 41), 30);
        assert_eq!(VerticalAlignment::Center.offset(100, 40), 30);
        assert_eq!(VerticalAlignment::Center.offset(10, 40), 0);
        assert_eq!(VerticalAlignment::Bottom.offset(100, 41), 59);
        assert_eq!(VerticalAlignment::Bottom.offset(10, 41), 0);
        assert_eq!(VerticalAlignment::Top.offset(100, 41), 0);
    }

    #[test]
    fn test_alignment_constants() {
        assert_eq!(HorizontalAlignment::try_from(0), Ok(HorizontalAlignment::Center));
        assert_eq!(HorizontalAlignment::try_from(2), Ok(HorizontalAlignment::Left));
        assert_eq!(HorizontalAlignment::try_from(11), Ok(HorizontalAlignment::Trailing));
        assert_eq!(VerticalAlignment::try_from(3), Ok(VerticalAlignment::Bottom));
        assert_eq!(
            VerticalAlignment::try_from(2),
            Err(Error::UnsupportedAlignment {
                kind: "vertical",
                value: 2
            })
        );
        assert!(HorizontalAlignment::try_from(1).is_err());
    }

    #[test]
    fn test_content_height() {
        let rows = [row(10, 12, 9), row(10, 20, 15), row(10, 12, 9)];
        assert_eq!(content_height(&rows, 3), 50);
        assert_eq!(content_height(&rows, -3), 44);
        assert_eq!(content_height(&[], 5), 0);
    }

    #[test]
    fn test_place_rows() {
        let rows = [row(40, 12, 9), row(21, 12, 9)];
        let placements = place_rows(
            &rows,
            Rect::new(5, 10, 100, 50),
            HorizontalAlignment::Center,
            VerticalAlignment::Center,
            Orientation::LeftToRight,
            2,
        );
        // Block is 26 tall, centered in 50 starting at y = 10.
        assert_eq!(
            placements,
            vec![
                RowPlacement {
                    x: 35,
                    y: 22,
                    baseline: 31
                },
                RowPlacement {
                    x: 44,
                    y: 36,
                    baseline: 45
                },
            ]
        );
    }

    #[test]
    fn test_place_rows_rtl_leading() {
        let rows = [row(40, 12, 9)];
        let placements = place_rows(
            &rows,
            Rect::new(0, 0, 100, 12),
            HorizontalAlignment::Leading,
            VerticalAlignment::Top,
            Orientation::RightToLeft,
            0,
        );
        assert_eq!(placements[0].x, 60);
        assert_eq!(placements[0].y, 0);
    }
}
