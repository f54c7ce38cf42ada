use crate::error::{BlameError, Result};
use serde::{Deserialize, Serialize};

/// Per-line authorship of one file: one author email per physical line.
///
/// Lines are addressed 1-based, matching how structural ranges and blame
/// output number them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipTable {
    authors: Vec<String>,
}

impl AuthorshipTable {
    #[must_use]
    pub fn new(authors: Vec<String>) -> Self {
        Self { authors }
    }

    /// Number of attributed lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.authors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Author email of a line (1-based), or `None` if out of range
    #[must_use]
    pub fn author_of(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.authors.get(line - 1).map(String::as_str)
    }

    /// Assert that the table covers exactly `physical` lines.
    ///
    /// The blame stream and the raw file are read independently; a mismatch
    /// means one of the two readers desynced and any attribution computed on
    /// top of it would be garbage.
    pub fn ensure_covers(&self, physical: usize) -> Result<()> {
        if self.authors.len() != physical {
            return Err(BlameError::LineCountMismatch {
                blamed: self.authors.len(),
                physical,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table() -> AuthorshipTable {
        AuthorshipTable::new(vec![
            "a@example.com".to_string(),
            "b@example.com".to_string(),
            "a@example.com".to_string(),
        ])
    }

    #[test]
    fn author_of_is_one_based() {
        let t = table();
        assert_eq!(t.author_of(1), Some("a@example.com"));
        assert_eq!(t.author_of(2), Some("b@example.com"));
        assert_eq!(t.author_of(3), Some("a@example.com"));
    }

    #[test]
    fn author_of_out_of_range() {
        let t = table();
        assert_eq!(t.author_of(0), None);
        assert_eq!(t.author_of(4), None);
    }

    #[test]
    fn ensure_covers_accepts_matching_count() {
        assert!(table().ensure_covers(3).is_ok());
    }

    #[test]
    fn ensure_covers_rejects_mismatch() {
        let err = table().ensure_covers(5).unwrap_err();
        match err {
            BlameError::LineCountMismatch { blamed, physical } => {
                assert_eq!(blamed, 3);
                assert_eq!(physical, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
