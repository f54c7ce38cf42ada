use crate::error::Result;

/// A member declaration inside a type: method, constructor or nested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberDecl {
    /// Declaration start line (1-based)
    pub start_line: usize,
    /// Declaration end line (1-based, inclusive)
    pub end_line: usize,
    /// First line of the doc comment attached to the declaration, if any
    pub doc_start_line: Option<usize>,
}

impl MemberDecl {
    /// Line the member's unit begins on: the attached doc comment if present,
    /// the declaration itself otherwise
    #[must_use]
    pub fn unit_start(&self) -> usize {
        self.doc_start_line.unwrap_or(self.start_line)
    }
}

/// A top-level type declaration and its member declarations, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Line the type declaration begins on (1-based)
    pub start_line: usize,
    pub members: Vec<MemberDecl>,
}

/// Source of structural information for one file's content.
///
/// Segmentation only needs line positions of top-level types and their member
/// declarations, so any parser that can produce those can back it; the
/// tree-sitter implementation lives in [`crate::AstStructure`].
pub trait StructureProvider {
    /// Ordered top-level type declarations of `content`
    fn top_level_types(&mut self, content: &str) -> Result<Vec<TypeDecl>>;
}
