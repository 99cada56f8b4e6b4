//! `styled_text` - Styled label text engine
//!
//! Parses inline style markup such as `{bold:b}` or `{red:c(255,0,0)}` into
//! plain text plus style ranges, splits it into homogeneously styled runs,
//! and lays those runs out into wrapped, truncated and aligned rows under a
//! pixel budget. Glyph measurement is delegated to a [`FontMetrics`]
//! implementation supplied by the host.
//!
//! # Examples
//!
//! ```
//! use styled_text::{LayoutOptions, MonospaceMetrics, Rect, StyledText, WrapMode, layout};
//!
//! let content = StyledText::from_markup("Press {Enter:b;u} to continue");
//! let options = LayoutOptions::default()
//!     .with_bounds(Rect::new(0, 0, 120, 100))
//!     .with_wrap(WrapMode::Word);
//!
//! let rows = layout::layout(&content.text_ranges(), &options, &MonospaceMetrics::new(10, 9, 3));
//! let lines: Vec<_> = rows.iter().map(|row| row.text()).collect();
//! assert_eq!(lines, vec!["Press Enter", "to continue"]);
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Pixel math on f32 font sizes
#![allow(clippy::cast_sign_loss)] // Color channel conversions
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::cast_possible_wrap)] // Cell counts fit in i32 pixels
#![allow(clippy::module_name_repetitions)] // Allow layout::LayoutOptions etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::suboptimal_flops)] // Standard math notation is clearer than mul_add
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod color;
pub mod error;
pub mod font;
pub mod layout;
pub mod markup;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use font::{DEFAULT_SCRIPT_RATIO, Font, FontMetrics, LineMetrics, MetricsCache, MonospaceMetrics};
pub use style::{Decorations, FontStyle, StyleRange, sort_ranges};

// Re-export content types
pub use text::{
    LabelConfig, MnemonicText, StyledContent, StyledLabel, StyledText, TextMeasure, TextRange,
    build_text_ranges, parse_mnemonic,
};

// Re-export layout types
pub use layout::{
    Fragment, HorizontalAlignment, LayoutOptions, Orientation, Rect, Row, RowPlacement,
    VerticalAlignment, WrapMode, layout_content, place_rows,
};
pub use unicode::WidthMethod;
