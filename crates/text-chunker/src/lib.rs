//! # Ragchunk Text Chunker
//!
//! Size-normalized, context-overlapped text chunking for retrieval and
//! embedding pipelines.
//!
//! ## Philosophy
//!
//! An upstream splitter decides where text *can* break; this crate decides
//! where chunks *should* end up:
//! - Every chunk lands inside a configured size range, in whatever unit
//!   the injected measurer reports (tokens, words, characters)
//! - Neighboring chunks share overlapping boundary words so cross-boundary
//!   meaning survives retrieval
//! - Chunks that come back from storage out of order can be restored and
//!   rendered deterministically
//!
//! ## Architecture
//!
//! ```text
//! Raw Text
//!     │
//!     ├──> Splitter (sentence/paragraph/custom) → raw fragments
//!     │
//!     ├──> Normalizer
//!     │    ├─> Shrink pass: split fragments over max_chunk_size
//!     │    ├─> Grow pass: merge fragments under min_chunk_size
//!     │    └─> Repeat to a fixed point, bounded by max_passes
//!     │
//!     ├──> Context windower (overlap_words from each neighbor)
//!     │
//!     └──> TextChunk[] tagged with order_index, size, language
//! ```
//!
//! Separately, [`ChunkCollection`] restores canonical order from shuffled
//! `(text, metadata)` pairs and joins them into one delimited string.
//!
//! ## Example
//!
//! ```rust
//! use ragchunk_text_chunker::{Chunker, ChunkerConfig, SentenceSplitter, WordCount};
//!
//! let config = ChunkerConfig {
//!     min_chunk_size: 2,
//!     max_chunk_size: 8,
//!     overlap_words: 0,
//!     max_passes: 16,
//! };
//! let chunker = Chunker::new(SentenceSplitter::new(), WordCount, config).unwrap();
//!
//! let chunks = chunker
//!     .chunk_str("First sentence here. Second sentence follows. And a third one.")
//!     .unwrap();
//! for chunk in chunks {
//!     println!("#{} ({} words): {}", chunk.order_index(), chunk.size(), chunk.content);
//! }
//! ```

mod chunker;
mod collection;
mod config;
mod error;
mod language;
mod measure;
mod normalize;
mod split;
mod types;
mod window;

pub use chunker::{get_stats, Chunker, ChunkingStats};
pub use collection::{join_chunks, ChunkCollection, CHUNK_SEPARATOR};
pub use config::ChunkerConfig;
pub use error::{ChunkerError, Result};
pub use language::{LanguageDetector, StopwordDetector};
pub use measure::{CharCount, HeuristicTokenCount, SizeMeasurer, WordCount};
pub use normalize::{CancelToken, Normalizer};
pub use split::{ParagraphSplitter, SentenceSplitter, Splitter};
pub use types::{ChunkMetadata, TextChunk};
