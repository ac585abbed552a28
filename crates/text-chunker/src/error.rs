use thiserror::Error;

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while normalizing or assembling chunks
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Normalization did not reach a fixed point within the pass budget
    #[error("chunking stalled: no fixed point after {passes} passes")]
    Stalled { passes: usize },

    /// The size measurer failed (e.g. a tokenizer or remote call)
    #[error("size measurement failed: {0}")]
    Measurement(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Chunk texts and metadata records are out of sync
    #[error("collection length mismatch: {texts} texts vs {metas} metas")]
    LengthMismatch { texts: usize, metas: usize },

    /// The run was canceled at a pass boundary
    #[error("chunking canceled")]
    Canceled,
}

impl ChunkerError {
    /// Create a measurement error
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
