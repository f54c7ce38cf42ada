use collate_blame::AuthorshipTable;
use collate_segmenter::{LineRange, SegmentEvent};
use serde::{Deserialize, Serialize};

/// A maximal run of qualifying content: 1-based, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Number of lines covered
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start
    }
}

/// Fraction of lines in `range` attributed to `author`, in [0, 1].
#[must_use]
pub fn fraction_authored(range: LineRange, authors: &AuthorshipTable, author: &str) -> f64 {
    let owned = (range.start..=range.end)
        .filter(|&line| authors.author_of(line) == Some(author))
        .count();
    owned as f64 / range.line_count() as f64
}

/// Accumulator for the left-to-right merge sweep.
///
/// `open` is the start line of the span currently being grown, if any.
/// `pending_header` arms the type pull-back: when the first unit after a type
/// boundary qualifies and nothing is open yet, the span opens at the type's
/// declaration line so imports, annotations and fields above the first member
/// travel with it.
#[derive(Debug, Clone, Copy, Default)]
struct Sweep {
    open: Option<usize>,
    pending_header: Option<usize>,
}

/// Merge qualifying units into maximal contiguous spans.
///
/// Single ordered pass: a qualifying unit opens a span (or keeps the current
/// one growing), a non-qualifying unit closes it at the unit's own start, and
/// a type boundary closes it at the boundary line. A span still open after
/// the last event runs through end of file. Qualification is strict: a unit
/// whose authored fraction exactly equals the threshold does not qualify.
#[must_use]
pub fn qualifying_spans(
    events: &[SegmentEvent],
    authors: &AuthorshipTable,
    author: &str,
    threshold: f64,
    total_lines: usize,
) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut sweep = Sweep::default();

    for event in events {
        match *event {
            SegmentEvent::TypeStart(line) => {
                if let Some(start) = sweep.open.take() {
                    spans.push(Span { start, end: line });
                }
                sweep.pending_header = Some(line);
            }
            SegmentEvent::Unit(range) => {
                if fraction_authored(range, authors, author) > threshold {
                    if sweep.open.is_none() {
                        sweep.open = Some(sweep.pending_header.unwrap_or(range.start));
                    }
                } else if let Some(start) = sweep.open.take() {
                    spans.push(Span {
                        start,
                        end: range.start,
                    });
                }
                // Pull-back only applies to the first unit after a boundary
                sweep.pending_header = None;
            }
        }
    }

    if let Some(start) = sweep.open {
        spans.push(Span {
            start,
            end: total_lines + 1,
        });
    }

    spans
}
