use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};
use crate::types::{ChunkMetadata, TextChunk};

/// Separator placed between chunks when rendering a collection
pub const CHUNK_SEPARATOR: &str = "\n *** END OF CHUNK *** \n";

/// Wrap each chunk as `[...] text [...]` and join with [`CHUNK_SEPARATOR`].
#[must_use]
pub fn join_chunks(texts: &[String]) -> String {
    texts
        .iter()
        .map(|text| format!("[...] {text} [...]"))
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Chunk texts paired positionally with their metadata records.
///
/// The two sequences always have the same length; the constructor checks
/// it and every transformation preserves it. Used to reassemble chunks
/// that came back from storage in arbitrary order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkCollection {
    texts: Vec<String>,
    metas: Vec<ChunkMetadata>,
}

impl ChunkCollection {
    /// Build a collection from parallel sequences.
    pub fn new(texts: Vec<String>, metas: Vec<ChunkMetadata>) -> Result<Self> {
        if texts.len() != metas.len() {
            return Err(ChunkerError::LengthMismatch {
                texts: texts.len(),
                metas: metas.len(),
            });
        }
        Ok(Self { texts, metas })
    }

    /// Build a collection from produced chunk records.
    #[must_use]
    pub fn from_chunks(chunks: Vec<TextChunk>) -> Self {
        let (texts, metas) = chunks
            .into_iter()
            .map(|chunk| (chunk.content, chunk.metadata))
            .unzip();
        Self { texts, metas }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    #[must_use]
    pub fn metas(&self) -> &[ChunkMetadata] {
        &self.metas
    }

    /// Append a (text, meta) pair.
    pub fn push(&mut self, text: String, meta: ChunkMetadata) {
        self.texts.push(text);
        self.metas.push(meta);
    }

    /// Remove and return the final (text, meta) pair.
    ///
    /// Used to discard a trailing, typically-empty chunk; both sequences
    /// stay in sync.
    pub fn pop_last(&mut self) -> Option<(String, ChunkMetadata)> {
        match (self.texts.pop(), self.metas.pop()) {
            (Some(text), Some(meta)) => Some((text, meta)),
            _ => None,
        }
    }

    /// Restore canonical order: ascending by `order_index`, ties resolved
    /// by original input position. Duplicate or missing indices are not an
    /// error; the sort is stable, so they order deterministically. Never
    /// drops or duplicates entries.
    #[must_use]
    pub fn order_chunks(&self) -> Vec<String> {
        let mut paired: Vec<(usize, &String)> = self
            .metas
            .iter()
            .zip(&self.texts)
            .map(|(meta, text)| (meta.order_index, text))
            .collect();
        paired.sort_by_key(|&(order_index, _)| order_index);
        paired.into_iter().map(|(_, text)| text.clone()).collect()
    }

    /// Order the chunks and join them into a single delimited string.
    #[must_use]
    pub fn render(&self) -> String {
        join_chunks(&self.order_chunks())
    }
}
