use crate::types::{LineRange, SegmentEvent};
use once_cell::sync::Lazy;
use regex::Regex;

/// A heading is 1-3 markers followed by non-marker content, as the whole line.
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A#{1,3}[^#]+\z").expect("heading pattern is valid"));

/// Segment a Markdown document into heading-delimited sections.
///
/// Each section runs from its heading line through the line before the next
/// heading; the final section extends to end of file. Content before the
/// first heading is never part of a section, and a file with no headings
/// yields no units at all, so unstructured prose is never attributed.
pub fn segment_document<S: AsRef<str>>(lines: &[S]) -> Vec<SegmentEvent> {
    let mut events = Vec::new();
    let mut section_start: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        if !HEADING.is_match(line.as_ref()) {
            continue;
        }
        let heading_line = idx + 1;
        if let Some(start) = section_start {
            events.push(SegmentEvent::Unit(LineRange::new(start, heading_line - 1)));
        }
        section_start = Some(heading_line);
    }

    if let Some(start) = section_start {
        events.push(SegmentEvent::Unit(LineRange::new(start, lines.len())));
    }

    events
}
