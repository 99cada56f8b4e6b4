//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{
    byte_offset_of_char, char_count, grapheme_boundaries, graphemes, is_line_break,
    line_break_len,
};
pub use width::{WidthMethod, cell_width};
