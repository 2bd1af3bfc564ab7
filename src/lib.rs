//! Chapterize - split converted documents into word-bounded markdown chapters.
//!
//! This crate consumes a converted document tree (the JSON export of an
//! external document conversion engine) and partitions its text into an
//! ordered sequence of titled chapters: boundaries are cut at headings of
//! a configurable level, chapters below a minimum word count are
//! discarded, and chapters above a maximum are split one heading level
//! deeper (falling back to paragraph grouping once heading granularity is
//! exhausted). Accepted chapters are written as numbered markdown files.
//!
//! # Example
//!
//! ```
//! use chapterize::config;
//!
//! // Validate split parameters
//! assert!(config::validate_heading_level(1).is_ok());
//! assert!(config::validate_word_bounds(500, 8000).is_ok());
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`document`]: Document tree model and JSON loading
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Chapter segmentation and word-bound enforcement
//! - [`writer`]: Filename sanitization and markdown output
//! - [`processor`]: Document processing service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod processor;
pub mod splitting;
pub mod writer;

// Re-export commonly used items
pub use config::{validate_heading_level, validate_word_bounds};
pub use document::{DocNode, Document, Picture};
pub use error::{ChapterizeError, Result};
pub use processor::{DocumentProcessor, ProcessOutcome, ProcessingStats};
pub use splitting::{Chapter, ChapterRecord, SplitEngine, SplitParams};
