use thiserror::Error;

/// Result type for blame operations
pub type Result<T> = std::result::Result<T, BlameError>;

/// Errors that can occur while resolving line authorship
#[derive(Error, Debug)]
pub enum BlameError {
    /// git blame could not be invoked or produced no usable output
    #[error("line history unavailable: {0}")]
    HistoryUnavailable(String),

    /// The number of blamed lines disagrees with the physical line count
    #[error("git blame attributed {blamed} lines but the file has {physical}")]
    LineCountMismatch { blamed: usize, physical: usize },

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BlameError {
    /// Create a history-unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::HistoryUnavailable(msg.into())
    }
}
