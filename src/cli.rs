//! Command-line interface for chapterize.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{self, validate_heading_level, validate_word_bounds};
use crate::document::Document;
use crate::error::Result;
use crate::processor::{setup_directories, DocumentProcessor, ProcessingStats};
use crate::splitting::SplitParams;

/// Chapterize - split converted documents into word-bounded markdown chapters.
#[derive(Parser)]
#[command(name = "chapterize")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a converted document export into markdown chapters.
    Split {
        /// Path to the converter's JSON document export
        input: PathBuf,

        /// Heading level for chapter boundaries (1=H1, 2=H2, ...)
        #[arg(short = 'l', long, default_value_t = config::DEFAULT_HEADING_LEVEL)]
        heading_level: u8,

        /// Minimum words per chapter; shorter chapters are discarded
        #[arg(long, default_value_t = config::DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Maximum words per chapter; larger chapters are split at the next heading level
        #[arg(long, default_value_t = config::DEFAULT_MAX_WORDS)]
        max_words: usize,

        /// Base output directory
        #[arg(short, long, default_value = config::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Write only the merged markdown export, skip chapter splitting
        #[arg(long)]
        no_chapters: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            input,
            heading_level,
            min_words,
            max_words,
            output,
            no_chapters,
        } => split_command(
            &input,
            heading_level,
            min_words,
            max_words,
            &output,
            no_chapters,
        ),
    }
}

/// Execute the split command.
fn split_command(
    input: &Path,
    heading_level: u8,
    min_words: usize,
    max_words: usize,
    output: &Path,
    no_chapters: bool,
) -> Result<()> {
    // Validate parameters before touching the input
    validate_heading_level(heading_level)?;
    validate_word_bounds(min_words, max_words)?;

    let doc_name = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    println!(
        "{} {}",
        style("Processing").bold(),
        style(input.display()).cyan()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Loading document...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let start = Instant::now();

    let mut doc = match Document::from_json_file(input) {
        Ok(doc) => doc,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Splitting chapters...");

    let params = SplitParams::new(heading_level, min_words, max_words)?;

    let output_dir = match setup_directories(output, &doc_name) {
        Ok(dir) => dir,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    let processor = DocumentProcessor::new(output_dir);
    let outcome = match processor.process(&mut doc, &doc_name, params, !no_chapters) {
        Ok(outcome) => outcome,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let elapsed = start.elapsed();

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        outcome.main_path.display()
    );

    println!();
    println!("Processing Statistics:");
    println!("  Time taken: {:.2} seconds", elapsed.as_secs_f64());

    if !outcome.chapters.is_empty() {
        let stats = ProcessingStats::from_records(&outcome.chapters);
        println!("  Total chapters: {}", style(stats.total_chapters).green());
        println!("  Total words: {}", stats.total_words);
        println!("  Average words per chapter: {}", stats.average_words);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_split_defaults() {
        let cli = Cli::parse_from(["chapterize", "split", "doc.json"]);

        let Commands::Split {
            input,
            heading_level,
            min_words,
            max_words,
            output,
            no_chapters,
        } = cli.command;
        assert_eq!(input, PathBuf::from("doc.json"));
        assert_eq!(heading_level, 1);
        assert_eq!(min_words, 500);
        assert_eq!(max_words, 8000);
        assert_eq!(output, PathBuf::from("output"));
        assert!(!no_chapters);
    }

    #[test]
    fn test_cli_parse_split_overrides() {
        let cli = Cli::parse_from([
            "chapterize",
            "split",
            "doc.json",
            "--heading-level",
            "2",
            "--min-words",
            "100",
            "--max-words",
            "4000",
            "--output",
            "out",
            "--no-chapters",
        ]);

        let Commands::Split {
            heading_level,
            min_words,
            max_words,
            output,
            no_chapters,
            ..
        } = cli.command;
        assert_eq!(heading_level, 2);
        assert_eq!(min_words, 100);
        assert_eq!(max_words, 4000);
        assert_eq!(output, PathBuf::from("out"));
        assert!(no_chapters);
    }

    #[test]
    fn test_split_command_rejects_inverted_bounds() {
        let err = split_command(Path::new("missing.json"), 1, 8000, 500, Path::new("out"), false);
        assert!(err.is_err());
    }

    #[test]
    fn test_split_command_rejects_bad_heading_level() {
        let err = split_command(Path::new("missing.json"), 0, 500, 8000, Path::new("out"), false);
        assert!(err.is_err());
    }
}
