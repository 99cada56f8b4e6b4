//! Styled text content and run decomposition.
//!
//! Key types:
//!
//! - [`StyledText`]: Plain text plus the style ranges positioned in it
//! - [`StyledContent`]: Capability interface consumed by the layout engine
//! - [`TextRange`]: A homogeneously styled run produced by
//!   [`build_text_ranges`]
//! - [`StyledLabel`]: Content plus label settings and a layout cache
//!
//! # Examples
//!
//! ```
//! use styled_text::StyledText;
//!
//! let content = StyledText::from_markup("{Warning:b;c(red)}: disk almost full{br}Free some space");
//! let runs = content.text_ranges();
//! let texts: Vec<_> = runs.iter().map(|r| r.text()).collect();
//! assert_eq!(
//!     texts,
//!     vec!["Warning", ": disk almost full", "\n", "Free some space"]
//! );
//! assert!(runs[2].is_line_break());
//! ```

mod content;
mod label;
mod mnemonic;
mod range;

pub use content::{StyledContent, StyledText};
pub use label::{LabelConfig, StyledLabel, TextMeasure};
pub use mnemonic::{MnemonicText, parse_mnemonic};
pub use range::{TextRange, build_text_ranges};
