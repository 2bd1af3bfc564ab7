//! Document processing service that ties all components together.
//!
//! Owns a per-document output directory and orchestrates the run:
//! directory setup, image-link rewriting, chapter splitting, and the
//! main markdown file with its chapter index.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{document_slug, CHAPTERS_DIR, IMAGES_DIR};
use crate::document::Document;
use crate::error::Result;
use crate::splitting::{word_count, ChapterRecord, SplitEngine, SplitParams};
use crate::writer::{save_markdown, ChapterWriter};

/// Create the output directory structure for a document.
///
/// Builds `base/<slug>/` with `chapters/` and `images/` subdirectories
/// and returns the document output directory.
pub fn setup_directories(base: &Path, doc_name: &str) -> Result<PathBuf> {
    let output_dir = base.join(document_slug(doc_name));
    fs::create_dir_all(output_dir.join(IMAGES_DIR))?;
    fs::create_dir_all(output_dir.join(CHAPTERS_DIR))?;
    Ok(output_dir)
}

/// Result of a full processing run.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Path of the main markdown file.
    pub main_path: PathBuf,

    /// Chapter records in output order; empty when splitting is disabled.
    pub chapters: Vec<ChapterRecord>,
}

/// Summary statistics over the written chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Number of chapters written.
    pub total_chapters: usize,

    /// Words across all chapters.
    pub total_words: usize,

    /// Average words per chapter (0 when no chapters were written).
    pub average_words: usize,
}

impl ProcessingStats {
    /// Compute statistics from chapter records.
    #[must_use]
    pub fn from_records(records: &[ChapterRecord]) -> Self {
        let total_words: usize = records.iter().map(|r| word_count(&r.content)).sum();
        let average_words = if records.is_empty() {
            0
        } else {
            total_words / records.len()
        };
        Self {
            total_chapters: records.len(),
            total_words,
            average_words,
        }
    }
}

/// Service processing one converted document into chapter files.
pub struct DocumentProcessor {
    output_dir: PathBuf,
    images_dir: PathBuf,
}

impl DocumentProcessor {
    /// Create a processor rooted at a document output directory.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        let images_dir = output_dir.join(IMAGES_DIR);
        Self {
            output_dir,
            images_dir,
        }
    }

    /// Copy document images into the output tree and rewrite their links.
    ///
    /// Every picture with a readable source is copied to
    /// `images/image_<idx>.<ext>`; occurrences of the old path in the
    /// document's text are pointed at the copy. Pictures without a usable
    /// source are skipped, never fatal.
    pub fn update_image_links(&self, doc: &mut Document) -> Result<()> {
        tracing::debug!(count = doc.pictures.len(), "Processing images");

        for idx in 0..doc.pictures.len() {
            let Some(source) = doc.pictures[idx].path.clone() else {
                tracing::warn!(index = idx, "Image has no source path, skipping");
                continue;
            };
            if !source.exists() {
                tracing::warn!(index = idx, path = %source.display(), "Image source missing, skipping");
                continue;
            }

            let suffix = source
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_default();
            let new_filename = format!("image_{idx}{suffix}");
            let new_path = self.images_dir.join(&new_filename);

            tracing::debug!(index = idx, from = %source.display(), to = %new_path.display(), "Copying image");
            fs::create_dir_all(&self.images_dir)?;
            fs::copy(&source, &new_path)?;

            let relative = format!("{IMAGES_DIR}/{new_filename}");
            doc.rewrite_links(&source.to_string_lossy(), &relative);
            doc.pictures[idx].path = Some(PathBuf::from(relative));
        }

        Ok(())
    }

    /// Split a document into chapters and write them to disk.
    ///
    /// Returns records (title, content, path) in output order.
    pub fn split_into_chapters(
        &self,
        doc: &Document,
        params: SplitParams,
    ) -> Result<Vec<ChapterRecord>> {
        tracing::debug!(
            heading_level = params.heading_level,
            min_words = params.min_words,
            max_words = params.max_words,
            "Splitting document into chapters"
        );

        let engine = SplitEngine::new(params);
        let chapters = engine.split(&doc.body);
        let writer = ChapterWriter::new(&self.output_dir);
        let records = writer.write(chapters)?;

        tracing::info!(count = records.len(), "Split document into chapters");
        Ok(records)
    }

    /// Run the full pipeline and write the main markdown file.
    ///
    /// With splitting enabled, the main file carries a chapter link index
    /// ahead of the full document export; otherwise it is the export
    /// alone.
    pub fn process(
        &self,
        doc: &mut Document,
        doc_name: &str,
        params: SplitParams,
        split_chapters: bool,
    ) -> Result<ProcessOutcome> {
        self.update_image_links(doc)?;

        let (main_content, chapters) = if split_chapters {
            let records = self.split_into_chapters(doc, params)?;
            (index_markdown(doc, doc_name, &records), records)
        } else {
            tracing::debug!("Chapter splitting disabled, saving single document");
            (doc.to_markdown(), Vec::new())
        };

        let main_path = self
            .output_dir
            .join(format!("{}.md", document_slug(doc_name)));
        save_markdown(&main_path, &main_content)?;

        Ok(ProcessOutcome {
            main_path,
            chapters,
        })
    }
}

/// Build the main markdown file: title, chapter index, full export.
fn index_markdown(doc: &Document, doc_name: &str, records: &[ChapterRecord]) -> String {
    let mut main_md = vec![format!("# {doc_name}\n"), "## Chapters\n".to_string()];

    for record in records {
        let file_name = record
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        main_md.push(format!(
            "- [{}]({CHAPTERS_DIR}/{file_name})",
            record.title
        ));
    }

    main_md.push(format!("\n{}", doc.to_markdown()));
    main_md.join("\n")
}
