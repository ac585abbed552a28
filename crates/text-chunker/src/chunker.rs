use crate::config::ChunkerConfig;
use crate::error::Result;
use crate::language::LanguageDetector;
use crate::measure::SizeMeasurer;
use crate::normalize::{CancelToken, Normalizer};
use crate::split::Splitter;
use crate::types::{ChunkMetadata, TextChunk};
use crate::window::add_context;

/// End-to-end chunking pipeline: split, normalize, inject neighbor
/// context, then tag the result.
///
/// Metadata is attached only to the final sequence: every chunk gets its
/// position as `order_index`, a size measured after context injection, and
/// a language tag from the optional detector. Nothing is carried over from
/// intermediate fragments.
pub struct Chunker<S, M> {
    splitter: S,
    measurer: M,
    detector: Option<Box<dyn LanguageDetector>>,
    config: ChunkerConfig,
}

impl<S: Splitter, M: SizeMeasurer> Chunker<S, M> {
    /// Create a chunker; rejects invalid configuration.
    pub fn new(splitter: S, measurer: M, config: ChunkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            splitter,
            measurer,
            detector: None,
            config,
        })
    }

    /// Attach a language detector; chunks it cannot classify stay untagged.
    #[must_use]
    pub fn with_language_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Some(Box::new(detector));
        self
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Chunk a document.
    pub fn chunk_str(&self, text: &str) -> Result<Vec<TextChunk>> {
        self.chunk_str_with_cancel(text, &CancelToken::new())
    }

    /// Chunk a document, honoring `cancel` at normalization pass boundaries.
    pub fn chunk_str_with_cancel(
        &self,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<TextChunk>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let fragments = self.splitter.split(text);
        let normalizer = Normalizer::new(&self.splitter, &self.measurer, &self.config);
        let normalized = normalizer.normalize_with_cancel(fragments, cancel)?;
        let windowed = add_context(&normalized, self.config.overlap_words);

        let sizes = self.measurer.measure_all(&windowed)?;
        let chunks = windowed
            .into_iter()
            .zip(sizes)
            .enumerate()
            .map(|(index, (content, size))| {
                let mut metadata = ChunkMetadata::at_index(index).size(size);
                if let Some(detector) = &self.detector {
                    metadata.language = detector.detect(&content);
                    if metadata.language.is_none() {
                        log::debug!("language detection inconclusive for chunk {index}");
                    }
                }
                TextChunk::new(content, metadata)
            })
            .collect();

        Ok(chunks)
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_size: usize,
    pub avg_size: usize,
    pub min_size: usize,
    pub max_size: usize,
}

/// Summarize a produced chunk sequence.
#[must_use]
pub fn get_stats(chunks: &[TextChunk]) -> ChunkingStats {
    let total_size = chunks.iter().map(TextChunk::size).sum();
    ChunkingStats {
        total_chunks: chunks.len(),
        total_size,
        avg_size: if chunks.is_empty() {
            0
        } else {
            total_size / chunks.len()
        },
        min_size: chunks.iter().map(TextChunk::size).min().unwrap_or(0),
        max_size: chunks.iter().map(TextChunk::size).max().unwrap_or(0),
    }
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Size: {} | Avg: {} | Range: {}-{}",
            self.total_chunks, self.total_size, self.avg_size, self.min_size, self.max_size
        )
    }
}
