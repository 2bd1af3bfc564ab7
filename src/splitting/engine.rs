//! Split engine: tree segmentation into raw chapters and bound enforcement.

use super::bounds::enforce_bounds;
use super::types::{Chapter, RawChapter, SplitParams};
use crate::config::DEFAULT_CHAPTER_TITLE;
use crate::document::DocNode;

/// Engine for splitting a document tree into word-bounded chapters.
///
/// Walks the tree depth-first, cutting a chapter boundary at every text
/// node that qualifies as a heading at the configured level, then applies
/// the min/max word bounds to the raw chapters.
pub struct SplitEngine {
    params: SplitParams,
}

/// Mutable traversal state threaded through the walk.
struct WalkState {
    title: String,
    buffer: Vec<String>,
    finished: Vec<RawChapter>,
}

impl WalkState {
    fn new() -> Self {
        Self {
            title: DEFAULT_CHAPTER_TITLE.to_string(),
            buffer: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// Close the current chapter if it accumulated any text.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.finished.push(RawChapter {
                title: self.title.clone(),
                content: self.buffer.join("\n\n"),
            });
            self.buffer.clear();
        }
    }
}

impl SplitEngine {
    /// Create a new split engine.
    #[must_use]
    pub fn new(params: SplitParams) -> Self {
        Self { params }
    }

    /// Split a document body into accepted chapters.
    ///
    /// Runs segmentation followed by bound enforcement; the result
    /// preserves source document order.
    #[must_use]
    pub fn split(&self, body: &DocNode) -> Vec<Chapter> {
        tracing::info!("Starting document splitting process");
        let raw = self.segment(body);
        tracing::info!(count = raw.len(), "Processing raw chapters");
        enforce_bounds(&self.params, raw)
    }

    /// Segment a document body into raw chapters at heading boundaries.
    ///
    /// Content preceding the first heading lands in a chapter titled with
    /// the default sentinel. The heading text itself is part of the chapter
    /// it opens.
    #[must_use]
    pub fn segment(&self, body: &DocNode) -> Vec<RawChapter> {
        let mut state = WalkState::new();
        self.walk(body, &mut state);
        state.flush();
        state.finished
    }

    fn walk(&self, node: &DocNode, state: &mut WalkState) {
        match node {
            DocNode::Container { children } => {
                for child in children {
                    match child {
                        DocNode::Text { text, is_heading } => {
                            if self.is_target_heading(text, *is_heading) {
                                state.flush();
                                state.title = heading_title(text);
                            }
                            state.buffer.push(text.clone());
                        }
                        DocNode::Container { .. } => self.walk(child, state),
                        DocNode::Other => {}
                    }
                }
            }
            // A bare text root contributes its payload without opening a
            // boundary; unknown roots contribute nothing.
            DocNode::Text { text, .. } => state.buffer.push(text.clone()),
            DocNode::Other => {}
        }
    }

    /// Check whether a text payload is a heading at the configured level.
    ///
    /// Both conditions are required: the converter must have styled the
    /// node as a heading, and the trimmed text must open with a `#` run
    /// whose length equals the target level exactly. A styled heading at a
    /// different level is absorbed as ordinary chapter content.
    fn is_target_heading(&self, text: &str, is_heading: bool) -> bool {
        if !is_heading {
            return false;
        }
        let trimmed = text.trim();
        if !trimmed.starts_with('#') {
            return false;
        }
        let level = trimmed.chars().take_while(|c| *c == '#').count();
        let is_target = level == usize::from(self.params.heading_level);
        if is_target {
            tracing::debug!(
                level = self.params.heading_level,
                text = trimmed,
                "Found heading at target level"
            );
        }
        is_target
    }
}

/// Derive a chapter title from heading text: markers stripped, trimmed.
fn heading_title(text: &str) -> String {
    text.trim().trim_start_matches('#').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(payload: &str) -> DocNode {
        DocNode::Text {
            text: payload.to_string(),
            is_heading: false,
        }
    }

    fn heading(payload: &str) -> DocNode {
        DocNode::Text {
            text: payload.to_string(),
            is_heading: true,
        }
    }

    fn body(children: Vec<DocNode>) -> DocNode {
        DocNode::Container { children }
    }

    fn engine(level: u8) -> SplitEngine {
        SplitEngine::new(SplitParams::new(level, 1, 1_000_000).unwrap())
    }

    #[test]
    fn test_heading_requires_style_flag() {
        let engine = engine(1);
        // Marker present but not styled as heading
        assert!(!engine.is_target_heading("# Title", false));
        assert!(engine.is_target_heading("# Title", true));
    }

    #[test]
    fn test_heading_requires_marker() {
        let engine = engine(1);
        // Styled as heading but no leading marker
        assert!(!engine.is_target_heading("Title", true));
    }

    #[test]
    fn test_heading_requires_exact_level() {
        let engine = engine(2);
        assert!(!engine.is_target_heading("# Too shallow", true));
        assert!(engine.is_target_heading("## Exact", true));
        assert!(!engine.is_target_heading("### Too deep", true));
    }

    #[test]
    fn test_heading_tolerates_surrounding_whitespace() {
        let engine = engine(1);
        assert!(engine.is_target_heading("  # Padded  ", true));
    }

    #[test]
    fn test_segment_default_title_for_leading_content() {
        let engine = engine(1);
        let tree = body(vec![text("front matter"), heading("# One"), text("body")]);

        let raw = engine.segment(&tree);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].title, "Introduction");
        assert_eq!(raw[0].content, "front matter");
        assert_eq!(raw[1].title, "One");
        assert_eq!(raw[1].content, "# One\n\nbody");
    }

    #[test]
    fn test_segment_heading_opens_its_own_chapter() {
        let engine = engine(1);
        let tree = body(vec![heading("# Solo")]);

        let raw = engine.segment(&tree);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].title, "Solo");
        assert_eq!(raw[0].content, "# Solo");
    }

    #[test]
    fn test_segment_wrong_level_heading_is_absorbed() {
        let engine = engine(1);
        let tree = body(vec![
            heading("# Chapter"),
            heading("## Section"),
            text("text"),
        ]);

        let raw = engine.segment(&tree);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].title, "Chapter");
        assert_eq!(raw[0].content, "# Chapter\n\n## Section\n\ntext");
    }

    #[test]
    fn test_segment_recurses_into_containers() {
        let engine = engine(1);
        let tree = body(vec![
            heading("# Outer"),
            body(vec![text("nested one"), text("nested two")]),
            text("tail"),
        ]);

        let raw = engine.segment(&tree);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].content, "# Outer\n\nnested one\n\nnested two\n\ntail");
    }

    #[test]
    fn test_segment_ignores_unknown_nodes() {
        let engine = engine(1);
        let tree = body(vec![text("before"), DocNode::Other, text("after")]);

        let raw = engine.segment(&tree);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].content, "before\n\nafter");
    }

    #[test]
    fn test_segment_bare_text_root() {
        let engine = engine(1);
        let raw = engine.segment(&text("just text"));

        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].title, "Introduction");
        assert_eq!(raw[0].content, "just text");
    }

    #[test]
    fn test_segment_empty_body() {
        let engine = engine(1);
        assert!(engine.segment(&body(vec![])).is_empty());
    }

    #[test]
    fn test_segment_order_preserved() {
        let engine = engine(1);
        let tree = body(vec![
            heading("# First"),
            text("a"),
            heading("# Second"),
            text("b"),
            heading("# Third"),
            text("c"),
        ]);

        let titles: Vec<String> = engine
            .segment(&tree)
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }
}
