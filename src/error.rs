//! Error types for chapterize.
//!
//! A single `ChapterizeError` enum covers the whole pipeline: there is no
//! partial-success mode, so any failure aborts the processing run and is
//! reported to the caller as one error.

use thiserror::Error;

/// Main error type for the chapterize library.
#[derive(Debug, Error)]
pub enum ChapterizeError {
    /// Heading level outside the supported range.
    #[error("Invalid heading level: {0}. Expected a value between 1 and 6")]
    InvalidHeadingLevel(u8),

    /// Word bounds that cannot describe a valid chapter size window.
    #[error("Invalid word bounds: min {min}, max {max}. Maximum words must be greater than minimum words (and minimum at least 1)")]
    InvalidWordBounds { min: usize, max: usize },

    /// The converter's JSON export could not be parsed.
    #[error("Document parsing failed: {0}")]
    DocumentParse(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chapterize operations.
pub type Result<T> = std::result::Result<T, ChapterizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_heading_level_display() {
        let err = ChapterizeError::InvalidHeadingLevel(9);
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains("between 1 and 6"));
    }

    #[test]
    fn test_invalid_word_bounds_display() {
        let err = ChapterizeError::InvalidWordBounds {
            min: 800,
            max: 500,
        };
        assert!(err.to_string().contains("min 800"));
        assert!(err.to_string().contains("max 500"));
    }
}
