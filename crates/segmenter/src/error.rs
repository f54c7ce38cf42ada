use thiserror::Error;

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmenterError>;

/// Errors that can occur while segmenting a file into structural units
#[derive(Error, Debug)]
pub enum SegmenterError {
    /// Failed to parse the source code
    #[error("parse error: {0}")]
    ParseError(String),

    /// Unsupported language
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Tree-sitter error
    #[error("tree-sitter error: {0}")]
    TreeSitterError(String),
}

impl SegmenterError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an unsupported language error
    pub fn unsupported_language(lang: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(lang.into())
    }

    /// Create a tree-sitter error
    pub fn tree_sitter(msg: impl Into<String>) -> Self {
        Self::TreeSitterError(msg.into())
    }
}
