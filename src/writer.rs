//! Markdown output: filename sanitization and chapter persistence.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::CHAPTERS_DIR;
use crate::error::Result;
use crate::splitting::{Chapter, ChapterRecord};

/// Regex matching characters outside the filename allow-list
/// (letters, digits, space, hyphen, underscore, parentheses).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INVALID_STEM_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-_() a-zA-Z0-9]").expect("valid regex"));

/// Map a chapter title to a filesystem-safe lowercase stem.
///
/// Disallowed characters become underscores, the result is trimmed,
/// lower-cased, and spaces become underscores. Deterministic and
/// idempotent; collisions between distinct titles are not detected (the
/// numeric filename prefix keeps files distinct within a run).
///
/// # Examples
/// ```
/// use chapterize::writer::sanitize_title;
///
/// assert_eq!(sanitize_title("Body"), "body");
/// assert_eq!(sanitize_title("Title (Part 2)"), "title_(part_2)");
/// assert_eq!(sanitize_title("What's next?"), "what_s_next_");
/// ```
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    let stem = INVALID_STEM_CHARS.replace_all(title, "_");
    stem.trim().to_lowercase().replace(' ', "_")
}

/// Build the filename for an accepted chapter.
///
/// `index` is 1-based over accepted chapters and zero-padded to two
/// digits, so numeric prefixes never collide within a run even when
/// sanitized titles do.
#[must_use]
pub fn chapter_filename(index: usize, title: &str) -> String {
    format!("{:02}_{}.md", index, sanitize_title(title))
}

/// Writer that persists accepted chapters under a chapters directory.
pub struct ChapterWriter {
    chapters_dir: PathBuf,
}

impl ChapterWriter {
    /// Create a writer for a document output directory.
    #[must_use]
    pub fn new(output_dir: &Path) -> Self {
        Self {
            chapters_dir: output_dir.join(CHAPTERS_DIR),
        }
    }

    /// Directory the chapter files are written into.
    #[must_use]
    pub fn chapters_dir(&self) -> &Path {
        &self.chapters_dir
    }

    /// Write chapters in order and return their records.
    ///
    /// Creates the chapters directory if needed. Content is written
    /// verbatim; a write failure aborts the whole run.
    pub fn write(&self, chapters: Vec<Chapter>) -> Result<Vec<ChapterRecord>> {
        fs::create_dir_all(&self.chapters_dir)?;

        tracing::info!(count = chapters.len(), "Writing final chapters to disk");
        let mut records = Vec::with_capacity(chapters.len());

        for (idx, chapter) in chapters.into_iter().enumerate() {
            let path = self.chapters_dir.join(chapter_filename(idx + 1, &chapter.title));
            tracing::debug!(number = idx + 1, path = %path.display(), "Writing chapter");

            let mut file = File::create(&path)?;
            file.write_all(chapter.content.as_bytes())?;

            records.push(ChapterRecord {
                title: chapter.title,
                content: chapter.content,
                path,
            });
        }

        Ok(records)
    }
}

/// Save a markdown file atomically: write to a temp file, sync, rename.
///
/// Keeps an existing file intact if the process dies mid-write.
pub fn save_markdown(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out.md".to_string());
    let temp_path = match path.parent() {
        Some(parent) => parent.join(format!(".{file_name}.tmp")),
        None => PathBuf::from(format!(".{file_name}.tmp")),
    };

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}
