//! Error types for styled text.
//!
//! Only programmer-facing contract violations surface as errors. Malformed
//! markup and degenerate layout inputs degrade silently (with a diagnostic
//! log) and never reach this type.

use thiserror::Error;

/// Result type alias for styled text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for styled text operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Style range built with a negative start or a zero length.
    #[error("invalid style range: start {start}, length {length}")]
    InvalidRange { start: i64, length: i64 },
    /// Style range interval lies outside the plain text it annotates.
    #[error("style range {start}..{end} out of bounds for text of {len} chars")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
    /// Invalid color payload (not a name, hex literal or component list).
    #[error("invalid color format: {0}")]
    InvalidColor(String),
    /// Alignment constant outside the supported set.
    #[error("unsupported {kind} alignment: {value}")]
    UnsupportedAlignment { kind: &'static str, value: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidColor("not-a-color".to_string());
        assert!(err.to_string().contains("invalid color format"));

        let err = Error::InvalidRange {
            start: -1,
            length: 3,
        };
        assert!(err.to_string().contains("start -1"));

        let err = Error::RangeOutOfBounds {
            start: 4,
            end: 12,
            len: 10,
        };
        assert!(err.to_string().contains("4..12"));

        let err = Error::UnsupportedAlignment {
            kind: "horizontal",
            value: 42,
        };
        assert_eq!(err.to_string(), "unsupported horizontal alignment: 42");
    }
}
