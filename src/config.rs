//! Configuration constants and validation functions for chapterize.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ChapterizeError, Result};

/// Default heading level used for chapter boundaries (1 = H1).
pub const DEFAULT_HEADING_LEVEL: u8 = 1;

/// Deepest heading level markdown supports; beyond it oversized chapters
/// fall back to paragraph grouping.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Default minimum words per chapter.
///
/// Chapters below this count are discarded as noise sections (cover pages,
/// short front-matter).
pub const DEFAULT_MIN_WORDS: usize = 500;

/// Default maximum words per chapter.
///
/// Chapters above this count are split at the next heading level.
pub const DEFAULT_MAX_WORDS: usize = 8000;

/// Title assigned to content that precedes the first chapter heading.
pub const DEFAULT_CHAPTER_TITLE: &str = "Introduction";

/// Subdirectory of the document output directory holding chapter files.
pub const CHAPTERS_DIR: &str = "chapters";

/// Subdirectory of the document output directory holding copied images.
pub const IMAGES_DIR: &str = "images";

/// Default base output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Validate a chapter heading level.
///
/// # Arguments
/// * `level` - Heading level to split chapters on (1 = H1, ..., 6 = H6)
///
/// # Returns
/// * `Ok(())` if the level is between 1 and 6
/// * `Err(ChapterizeError::InvalidHeadingLevel)` otherwise
///
/// # Examples
/// ```
/// use chapterize::config::validate_heading_level;
///
/// assert!(validate_heading_level(1).is_ok());
/// assert!(validate_heading_level(0).is_err());
/// assert!(validate_heading_level(7).is_err());
/// ```
pub fn validate_heading_level(level: u8) -> Result<()> {
    if (1..=MAX_HEADING_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(ChapterizeError::InvalidHeadingLevel(level))
    }
}

/// Validate a chapter word-count window.
///
/// The minimum must be at least 1 and the maximum strictly greater than
/// the minimum.
///
/// # Examples
/// ```
/// use chapterize::config::validate_word_bounds;
///
/// assert!(validate_word_bounds(500, 8000).is_ok());
/// assert!(validate_word_bounds(8000, 500).is_err());
/// assert!(validate_word_bounds(0, 100).is_err());
/// ```
pub fn validate_word_bounds(min_words: usize, max_words: usize) -> Result<()> {
    if min_words >= 1 && max_words > min_words {
        Ok(())
    } else {
        Err(ChapterizeError::InvalidWordBounds {
            min: min_words,
            max: max_words,
        })
    }
}

/// Generate a directory-friendly slug from a document name.
///
/// # Examples
/// ```
/// use chapterize::config::document_slug;
///
/// assert_eq!(document_slug("My Handbook"), "my_handbook");
/// assert_eq!(document_slug("Field Guide (2nd ed.)"), "field_guide_2nd_ed");
/// ```
#[must_use]
pub fn document_slug(name: &str) -> String {
    let text = name.to_lowercase();
    let text = SLUG_NON_WORD.replace_all(&text, "");
    let text = SLUG_SPACE_DASH.replace_all(&text, "_");
    text.trim_matches('_').to_string()
}
