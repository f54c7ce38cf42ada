use serde::{Deserialize, Serialize};

/// A contiguous run of lines, 1-indexed and inclusive on both ends.
///
/// Raw file content, structural units and authorship tables all number lines
/// this way; every conversion to a 0-based slice index happens at the point
/// of extraction, nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Create a new range; `start` must not exceed `end`
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start >= 1, "line numbers are 1-based");
        debug_assert!(start <= end, "range start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Number of lines in this range
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check if the range contains a specific line
    #[must_use]
    pub const fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }
}

/// One step of a file's segmentation, in source order.
///
/// `TypeStart` marks an enclosing type declaration: it closes whatever span
/// the aggregation sweep has open and arms the pull-back that lets the first
/// member unit of the type start at the type's own declaration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentEvent {
    /// An enclosing type declaration begins at this line
    TypeStart(usize),
    /// A segmentable unit: member declaration or document section
    Unit(LineRange),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        assert_eq!(LineRange::new(10, 15).line_count(), 6);
        assert_eq!(LineRange::new(3, 3).line_count(), 1);
    }

    #[test]
    fn test_contains() {
        let range = LineRange::new(10, 15);
        assert!(range.contains(10));
        assert!(range.contains(15));
        assert!(!range.contains(9));
        assert!(!range.contains(16));
    }
}
