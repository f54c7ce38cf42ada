use crate::aggregator::Span;
use collate_segmenter::Language;
use serde::Serialize;
use std::path::PathBuf;

/// One qualifying excerpt, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Excerpt {
    pub path: PathBuf,
    pub language: Language,
    pub span: Span,
    /// Literal text of the spanned lines, each terminated with `\n`
    pub text: String,
}

/// Slice the spanned lines out of the file content.
///
/// Spans come straight from the sweep over structural units, which in turn
/// came from the same content, so an out-of-range span is a bug in this
/// crate rather than bad input.
#[must_use]
pub fn slice_lines<S: AsRef<str>>(lines: &[S], span: Span) -> String {
    debug_assert!(span.start >= 1 && span.end >= span.start && span.end <= lines.len() + 1);

    lines[span.start - 1..span.end - 1]
        .iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}
