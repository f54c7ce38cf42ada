//! Decides which structural units belong to an author and extracts them.
//!
//! Consumes the segmenter's event stream and the blame table for one file,
//! merges qualifying units into maximal spans, and slices the original
//! content into excerpt text. All per-file; nothing is shared across files.

mod aggregator;
mod error;
mod extractor;

pub use aggregator::{fraction_authored, qualifying_spans, Span};
pub use error::{AttributionError, Result};
pub use extractor::{slice_lines, Excerpt};

use collate_blame::AuthorshipTable;
use collate_segmenter::{segment_document, segment_source, AstStructure, Language};
use std::path::Path;

/// Extract `author`'s qualifying excerpts from one tracked file.
///
/// Reads the file, blames it, segments it by kind, sweeps, and slices. Any
/// failure along the way is fatal for the run; there is no per-file recovery.
pub fn excerpts_for_file(path: &Path, author: &str, threshold: f64) -> Result<Vec<Excerpt>> {
    let content = std::fs::read_to_string(path)?;
    let authors = collate_blame::line_authors(path)?;
    excerpts_for_content(path, &content, &authors, author, threshold)
}

/// Extraction with content and authorship already in hand.
///
/// Split out from [`excerpts_for_file`] so the pipeline can be exercised
/// without a git repository behind the file.
pub fn excerpts_for_content(
    path: &Path,
    content: &str,
    authors: &AuthorshipTable,
    author: &str,
    threshold: f64,
) -> Result<Vec<Excerpt>> {
    let language = Language::from_path(path);
    let lines: Vec<&str> = content.lines().collect();

    // Raw content and blame output are read independently; they must agree
    // on the line count before any range arithmetic happens on top of them.
    authors.ensure_covers(lines.len())?;

    let events = if language.is_document() {
        segment_document(&lines)
    } else if language.supports_ast() {
        let mut provider = AstStructure::new(language)?;
        segment_source(&mut provider, content)?
    } else {
        return Err(AttributionError::UnsupportedFile(path.display().to_string()));
    };

    let spans = qualifying_spans(&events, authors, author, threshold, lines.len());
    log::debug!(
        "{}: {} units -> {} spans",
        path.display(),
        events.len(),
        spans.len()
    );

    Ok(spans
        .into_iter()
        .map(|span| Excerpt {
            path: path.to_path_buf(),
            language,
            span,
            text: slice_lines(&lines, span),
        })
        .collect())
}
