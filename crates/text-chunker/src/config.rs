use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};

/// Configuration for chunk normalization and context injection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Minimum chunk size (in measurer units); smaller fragments are merged
    pub min_chunk_size: usize,

    /// Maximum chunk size (in measurer units, hard limit); larger fragments are split
    pub max_chunk_size: usize,

    /// Number of boundary words pulled in from each neighbor; 0 disables overlap
    pub overlap_words: usize,

    /// Upper bound on shrink+grow rounds before the run is declared stalled
    pub max_passes: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: 64,
            max_chunk_size: 512,
            overlap_words: 10,
            max_passes: 16,
        }
    }
}

impl ChunkerConfig {
    /// Create config optimized for embeddings (smaller, focused chunks)
    pub fn for_embeddings() -> Self {
        Self {
            min_chunk_size: 32,
            max_chunk_size: 384,
            ..Default::default()
        }
    }

    /// Create config optimized for LLM context (larger, comprehensive chunks)
    pub fn for_llm_context() -> Self {
        Self {
            min_chunk_size: 128,
            max_chunk_size: 2048,
            overlap_words: 20,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.min_chunk_size == 0 {
            return Err(ChunkerError::invalid_config("min_chunk_size must be > 0"));
        }

        if self.min_chunk_size > self.max_chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "min_chunk_size ({}) cannot exceed max_chunk_size ({})",
                self.min_chunk_size, self.max_chunk_size
            )));
        }

        if self.max_passes == 0 {
            return Err(ChunkerError::invalid_config("max_passes must be > 0"));
        }

        Ok(())
    }
}
