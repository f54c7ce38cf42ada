use thiserror::Error;

pub type Result<T> = std::result::Result<T, AttributionError>;

/// Errors that can occur while extracting one file's contributions
#[derive(Error, Debug)]
pub enum AttributionError {
    #[error("blame error: {0}")]
    BlameError(#[from] collate_blame::BlameError),

    #[error("segmenter error: {0}")]
    SegmenterError(#[from] collate_segmenter::SegmenterError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File kind takes no part in attribution; callers normally filter first
    #[error("unsupported file kind: {0}")]
    UnsupportedFile(String),
}
