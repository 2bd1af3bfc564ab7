//! Document tree model and JSON loading.
//!
//! Document conversion (PDF/DOCX parsing, OCR) happens in an external
//! engine; this crate consumes its exported document tree. Nodes form a
//! closed tagged variant: containers carry ordered children, text leaves
//! carry a payload plus a heading style flag. Node kinds the converter
//! emits that this tool does not understand deserialize into a no-op
//! variant that traversal ignores.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// A node in the converted document tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocNode {
    /// Structural node holding an ordered sequence of children, no text.
    Container {
        #[serde(default)]
        children: Vec<DocNode>,
    },

    /// Text leaf with its payload and heading style flag.
    Text {
        text: String,
        #[serde(default)]
        is_heading: bool,
    },

    /// Any node kind this tool does not handle (references, footnote
    /// anchors, ...). Treated as a leaf with nothing to contribute.
    #[serde(other)]
    Other,
}

impl DocNode {
    /// Visit every text payload in traversal order, mutably.
    pub fn visit_text_mut(&mut self, f: &mut impl FnMut(&mut String)) {
        match self {
            Self::Container { children } => {
                for child in children {
                    child.visit_text_mut(f);
                }
            }
            Self::Text { text, .. } => f(text),
            Self::Other => {}
        }
    }

    /// Collect every text payload in traversal order.
    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Container { children } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Text { text, .. } => out.push(text),
            Self::Other => {}
        }
    }
}

/// Converter-reported image attached to a document.
#[derive(Debug, Clone, Deserialize)]
pub struct Picture {
    /// Location of the image file as exported by the converter.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// A converted document: the body tree plus attached images.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    /// Root of the document tree.
    pub body: DocNode,

    /// Images referenced by the document.
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

impl Document {
    /// Parse a document from the converter's JSON export.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a JSON export file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Export the full document as markdown.
    ///
    /// Text payloads already carry their markdown markers (headings keep
    /// their `#` prefix), so the export is the traversal-order
    /// concatenation separated by blank lines.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut parts = Vec::new();
        self.body.collect_text(&mut parts);
        parts.join("\n\n")
    }

    /// Replace every occurrence of `from` with `to` in all text payloads.
    ///
    /// Used to point image links at their copied location.
    pub fn rewrite_links(&mut self, from: &str, to: &str) {
        self.body.visit_text_mut(&mut |text| {
            if text.contains(from) {
                *text = text.replace(from, to);
            }
        });
    }
}
