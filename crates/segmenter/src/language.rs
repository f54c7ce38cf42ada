use crate::error::{Result, SegmenterError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File kind for attribution purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Rust,
    Python,
    JavaScript,
    TypeScript,
    Java,
    Markdown,
    Unknown,
}

impl Language {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => Language::Rust,
            "py" | "pyw" => Language::Python,
            "js" | "mjs" | "cjs" => Language::JavaScript,
            "ts" | "tsx" => Language::TypeScript,
            "java" => Language::Java,
            "md" | "markdown" => Language::Markdown,
            _ => Language::Unknown,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Syntax name used to tag fenced code blocks
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Rust => "rust",
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Markdown => "markdown",
            Language::Unknown => "unknown",
        }
    }

    /// Heading-delimited prose rather than parsed source
    pub fn is_document(self) -> bool {
        self == Language::Markdown
    }

    /// Check if this language is supported for AST segmentation
    pub fn supports_ast(self) -> bool {
        matches!(
            self,
            Language::Rust
                | Language::Python
                | Language::JavaScript
                | Language::TypeScript
                | Language::Java
        )
    }

    /// Whether files of this kind take part in attribution at all
    pub fn is_attributable(self) -> bool {
        self.is_document() || self.supports_ast()
    }

    /// Get Tree-sitter language instance
    pub fn tree_sitter_language(self) -> Result<tree_sitter::Language> {
        match self {
            Language::Rust => Ok(tree_sitter_rust::LANGUAGE.into()),
            Language::Python => Ok(tree_sitter_python::LANGUAGE.into()),
            Language::JavaScript => Ok(tree_sitter_javascript::LANGUAGE.into()),
            Language::TypeScript => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
            Language::Java => Ok(tree_sitter_java::LANGUAGE.into()),
            _ => Err(SegmenterError::unsupported_language(self.as_str())),
        }
    }

    /// Comment prefixes that can form a doc block above a declaration
    pub fn comment_prefixes(self) -> &'static [&'static str] {
        match self {
            Language::Rust => &["///", "//!", "//", "/*", "*/", "*"],
            Language::Java | Language::JavaScript | Language::TypeScript => {
                &["//", "/**", "/*", "*/", "*"]
            }
            Language::Python => &["#"],
            Language::Markdown | Language::Unknown => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Language::Rust);
        assert_eq!(Language::from_extension("JAVA"), Language::Java);
        assert_eq!(Language::from_extension("py"), Language::Python);
        assert_eq!(Language::from_extension("md"), Language::Markdown);
        assert_eq!(Language::from_extension("bin"), Language::Unknown);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Language::from_path("src/Main.java"), Language::Java);
        assert_eq!(Language::from_path("docs/README.md"), Language::Markdown);
        assert_eq!(Language::from_path("no_extension"), Language::Unknown);
    }

    #[test]
    fn test_attributable() {
        assert!(Language::Java.is_attributable());
        assert!(Language::Markdown.is_attributable());
        assert!(!Language::Unknown.is_attributable());
    }

    #[test]
    fn test_markdown_is_document_not_ast() {
        assert!(Language::Markdown.is_document());
        assert!(!Language::Markdown.supports_ast());
        assert!(Language::Java.supports_ast());
        assert!(!Language::Java.is_document());
    }

    #[test]
    fn test_tree_sitter_language() {
        assert!(Language::Java.tree_sitter_language().is_ok());
        assert!(Language::Rust.tree_sitter_language().is_ok());
        assert!(Language::Markdown.tree_sitter_language().is_err());
    }
}
