//! Types for the chapter splitting system.

use std::path::PathBuf;

use crate::config::{
    validate_heading_level, validate_word_bounds, DEFAULT_HEADING_LEVEL, DEFAULT_MAX_WORDS,
    DEFAULT_MIN_WORDS,
};
use crate::error::Result;

/// Parameters controlling chapter segmentation and word bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitParams {
    /// Heading level that opens a new chapter (1 = H1, ..., 6 = H6).
    pub heading_level: u8,

    /// Minimum words per chapter; shorter chapters are discarded.
    pub min_words: usize,

    /// Maximum words per chapter; larger chapters are split at the next
    /// heading level.
    pub max_words: usize,
}

impl SplitParams {
    /// Create validated split parameters.
    ///
    /// # Arguments
    /// * `heading_level` - Level of headings to split on (1-6)
    /// * `min_words` - Minimum words per chapter (at least 1)
    /// * `max_words` - Maximum words per chapter (greater than `min_words`)
    pub fn new(heading_level: u8, min_words: usize, max_words: usize) -> Result<Self> {
        validate_heading_level(heading_level)?;
        validate_word_bounds(min_words, max_words)?;
        Ok(Self {
            heading_level,
            min_words,
            max_words,
        })
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// A (title, content) unit produced purely from tree traversal, before
/// any bound enforcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChapter {
    /// Title inherited from the heading that opened the chapter, or the
    /// default sentinel.
    pub title: String,

    /// Blank-line-separated concatenation of the text payloads between two
    /// chapter boundaries, heading line included.
    pub content: String,
}

/// A chapter retained after the minimum-word test, possibly the result of
/// an oversized-chapter split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Chapter title.
    pub title: String,

    /// Chapter content, written to disk verbatim.
    pub content: String,
}

/// An accepted chapter together with its assigned output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRecord {
    /// Chapter title.
    pub title: String,

    /// Chapter content as written.
    pub content: String,

    /// Path of the written markdown file.
    pub path: PathBuf,
}

/// Count whitespace-separated tokens.
///
/// Counts are recomputed at every bound check; identical content always
/// yields identical counts.
///
/// # Examples
/// ```
/// use chapterize::splitting::word_count;
///
/// assert_eq!(word_count("one two  three"), 3);
/// assert_eq!(word_count(""), 0);
/// ```
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
