use serde::{Deserialize, Serialize};

/// A normalized, context-augmented text chunk with metadata
///
/// Metadata is flattened on the wire, so the serialized record is a flat
/// object: `{"content", "order_index", "size", "language"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextChunk {
    /// The chunk text, including any injected neighbor context
    pub content: String,

    /// Metadata about this chunk
    #[serde(flatten)]
    pub metadata: ChunkMetadata,
}

impl TextChunk {
    /// Create a new chunk
    #[must_use]
    pub const fn new(content: String, metadata: ChunkMetadata) -> Self {
        Self { content, metadata }
    }

    /// Last measured size, in whatever unit the measurer reports
    #[must_use]
    pub const fn size(&self) -> usize {
        self.metadata.size
    }

    /// Canonical position of this chunk in its document
    #[must_use]
    pub const fn order_index(&self) -> usize {
        self.metadata.order_index
    }
}

/// Metadata attached to a chunk
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkMetadata {
    /// Position in the produced sequence; not guaranteed unique or
    /// contiguous once chunks have been stored and retrieved out of order
    pub order_index: usize,

    /// Measured size in measurer units (token count, words, ...)
    pub size: usize,

    /// Detected language code, if a detector was configured and succeeded
    pub language: Option<String>,
}

impl ChunkMetadata {
    /// Create metadata for a chunk at the given position
    #[must_use]
    pub const fn at_index(order_index: usize) -> Self {
        Self {
            order_index,
            size: 0,
            language: None,
        }
    }

    /// Builder: set measured size
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Builder: set language tag
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metadata_builder() {
        let metadata = ChunkMetadata::at_index(3).size(42).language("de");

        assert_eq!(metadata.order_index, 3);
        assert_eq!(metadata.size, 42);
        assert_eq!(metadata.language.as_deref(), Some("de"));
    }

    #[test]
    fn test_wire_record_is_flat() {
        let chunk = TextChunk::new(
            "some text".to_string(),
            ChunkMetadata::at_index(0).size(2).language("en"),
        );

        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "content": "some text",
                "order_index": 0,
                "size": 2,
                "language": "en",
            })
        );
    }

    #[test]
    fn test_wire_record_round_trip() {
        let chunk = TextChunk::new("abc".to_string(), ChunkMetadata::at_index(7).size(3));

        let json = serde_json::to_string(&chunk).unwrap();
        let back: TextChunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
        assert_eq!(back.metadata.language, None);
    }
}
