//! Chapter splitting for converted documents.
//!
//! Segments a document tree into raw chapters at heading boundaries,
//! then enforces minimum and maximum word bounds, splitting oversized
//! chapters one heading level deeper (or by paragraph grouping once
//! heading granularity is exhausted).

mod bounds;
mod engine;
mod types;

pub use engine::SplitEngine;
pub use types::{word_count, Chapter, ChapterRecord, RawChapter, SplitParams};
