//! End-to-end pipeline tests: raw text through splitting, normalization,
//! context injection, tagging, and back through the orderer.

use pretty_assertions::assert_eq;
use ragchunk_text_chunker::{
    ChunkCollection, Chunker, ChunkerConfig, SentenceSplitter, StopwordDetector, TextChunk,
    WordCount,
};

fn word_config(min: usize, max: usize, overlap: usize) -> ChunkerConfig {
    ChunkerConfig {
        min_chunk_size: min,
        max_chunk_size: max,
        overlap_words: overlap,
        max_passes: 16,
    }
}

#[test]
fn pipeline_produces_bounded_ordered_chunks() {
    let chunker = Chunker::new(SentenceSplitter::new(), WordCount, word_config(2, 6, 0)).unwrap();

    let text = "The cat sat on the mat. It was warm. The dog watched from the door. \
                Nothing else moved. The evening settled in quietly.";
    let chunks = chunker.chunk_str(text).unwrap();

    assert!(!chunks.is_empty());
    for (index, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.order_index(), index);
        let words = chunk.content.split_whitespace().count();
        assert!(words >= 2, "undersized chunk: {:?}", chunk.content);
        assert!(words <= 6, "oversized chunk: {:?}", chunk.content);
    }
}

#[test]
fn pipeline_overlap_carries_neighbor_words() {
    let chunker = Chunker::new(SentenceSplitter::new(), WordCount, word_config(2, 6, 3)).unwrap();

    let chunks = chunker
        .chunk_str("one two three four five. six seven eight nine ten.")
        .unwrap();

    assert_eq!(chunks.len(), 2);
    // Last three words of the first sentence lead the second chunk
    assert!(chunks[1].content.starts_with("three four five\n\n"));
    // First three words of the second sentence trail the first chunk
    assert!(chunks[0].content.ends_with("\n\nsix seven eight"));
}

#[test]
fn pipeline_tags_language_per_chunk() {
    let chunker = Chunker::new(SentenceSplitter::new(), WordCount, word_config(2, 20, 0))
        .unwrap()
        .with_language_detector(StopwordDetector::new());

    let chunks = chunker
        .chunk_str("The house is old and the garden is not small. Der Hund und die Katze sind nicht auf dem Dach.")
        .unwrap();

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].metadata.language.as_deref(), Some("en"));
    assert_eq!(chunks[1].metadata.language.as_deref(), Some("de"));
}

#[test]
fn chunks_survive_shuffle_and_reassembly() {
    let chunker = Chunker::new(SentenceSplitter::new(), WordCount, word_config(2, 6, 0)).unwrap();

    let text = "alpha beta gamma delta. epsilon zeta eta theta. iota kappa lambda mu.";
    let chunks = chunker.chunk_str(text).unwrap();
    assert_eq!(chunks.len(), 3);

    // Simulate out-of-order retrieval
    let shuffled: Vec<TextChunk> = vec![chunks[2].clone(), chunks[0].clone(), chunks[1].clone()];
    let collection = ChunkCollection::from_chunks(shuffled);

    let expected: Vec<String> = chunks.iter().map(|chunk| chunk.content.clone()).collect();
    assert_eq!(collection.order_chunks(), expected);
}

#[test]
fn wire_records_round_trip_through_json() {
    let chunker = Chunker::new(SentenceSplitter::new(), WordCount, word_config(2, 6, 0)).unwrap();

    let chunks = chunker
        .chunk_str("alpha beta gamma delta. epsilon zeta eta theta.")
        .unwrap();

    let json = serde_json::to_string(&chunks).unwrap();
    let back: Vec<TextChunk> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chunks);

    // Boundary contract: flat records with the four fields, order preserved
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), chunks.len());
    for (index, record) in records.iter().enumerate() {
        assert_eq!(record["order_index"], index);
        assert!(record.get("content").is_some());
        assert!(record.get("size").is_some());
        assert!(record.get("language").is_some());
    }
}

#[test]
fn trailing_empty_chunk_can_be_popped_before_render() {
    let mut collection = ChunkCollection::new(
        vec!["real content here".to_string(), String::new()],
        vec![
            ragchunk_text_chunker::ChunkMetadata::at_index(0).size(3),
            ragchunk_text_chunker::ChunkMetadata::at_index(1).size(0),
        ],
    )
    .unwrap();

    collection.pop_last();
    assert_eq!(collection.render(), "[...] real content here [...]");
}
