//! Word-count bound enforcement and oversized-chapter splitting.

use super::types::{word_count, Chapter, RawChapter, SplitParams};
use crate::config::MAX_HEADING_LEVEL;

/// Apply min/max word bounds to raw chapters.
///
/// Chapters under `min_words` are dropped. Chapters over `max_words` are
/// split at the next heading level; the resulting sub-chapters are
/// re-tested against `min_words` only. A sub-chapter may therefore still
/// exceed `max_words` and is accepted as-is - the single-pass re-test is
/// deliberate, not an oversight.
pub(crate) fn enforce_bounds(params: &SplitParams, raw: Vec<RawChapter>) -> Vec<Chapter> {
    let mut accepted = Vec::new();

    for chapter in raw {
        let count = word_count(&chapter.content);
        tracing::debug!(title = %chapter.title, words = count, "Counted chapter");

        if count < params.min_words {
            tracing::debug!(title = %chapter.title, words = count, "Skipping chapter - too short");
        } else if count > params.max_words {
            tracing::debug!(title = %chapter.title, words = count, "Splitting chapter - too large");
            let subchapters = split_oversized(
                &chapter.content,
                &chapter.title,
                params.heading_level + 1,
                params.max_words,
            );
            for (title, content) in subchapters {
                if word_count(&content) >= params.min_words {
                    accepted.push(Chapter { title, content });
                }
            }
        } else {
            accepted.push(Chapter {
                title: chapter.title,
                content: chapter.content,
            });
        }
    }

    accepted
}

/// Split oversized chapter content one level deeper.
///
/// Below the deepest heading level, content is cut at subheading lines;
/// at or beyond it, paragraphs are grouped greedily up to `max_words`.
/// Either way the output covers the input: no line or paragraph is lost.
pub(crate) fn split_oversized(
    content: &str,
    title: &str,
    level: u8,
    max_words: usize,
) -> Vec<(String, String)> {
    if level >= MAX_HEADING_LEVEL {
        tracing::debug!(title, "Reached max heading level, splitting by paragraphs");
        return split_by_paragraphs(content, title, max_words);
    }

    let marker = format!("{} ", "#".repeat(usize::from(level) + 1));
    let mut subchapters: Vec<(String, String)> = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    let mut subtitle = title.to_string();

    for line in content.lines() {
        if line.trim().starts_with(&marker) {
            if !lines.is_empty() {
                subchapters.push((subtitle.clone(), lines.join("\n")));
                lines.clear();
            }
            subtitle = line.trim().trim_matches('#').trim().to_string();
        }
        lines.push(line);
    }

    if !lines.is_empty() {
        subchapters.push((subtitle, lines.join("\n")));
    }

    subchapters
}

/// Greedily group paragraphs into parts of at most `max_words`.
///
/// A single paragraph larger than `max_words` becomes its own oversized
/// part; the bound is not enforced below paragraph granularity.
fn split_by_paragraphs(content: &str, title: &str, max_words: usize) -> Vec<(String, String)> {
    let mut parts: Vec<(String, String)> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_words = 0;

    for paragraph in content.split("\n\n") {
        let paragraph_words = word_count(paragraph);
        if current_words + paragraph_words > max_words {
            if !current.is_empty() {
                let part_num = parts.len() + 1;
                tracing::debug!(title, part = part_num, "Creating new part due to word limit");
                parts.push((format!("{title} (Part {part_num})"), current.join("\n\n")));
            }
            current = vec![paragraph];
            current_words = paragraph_words;
        } else {
            current.push(paragraph);
            current_words += paragraph_words;
        }
    }

    if !current.is_empty() {
        parts.push((
            format!("{title} (Part {})", parts.len() + 1),
            current.join("\n\n"),
        ));
    }

    parts
}
