use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ragchunk_text_chunker::{
    get_stats, CharCount, ChunkCollection, Chunker, ChunkerConfig, HeuristicTokenCount,
    ParagraphSplitter, SentenceSplitter, SizeMeasurer, Splitter, StopwordDetector, TextChunk,
    WordCount,
};

#[derive(Parser)]
#[command(name = "ragchunk", version, about = "Normalize, overlap, and reorder text chunks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chunk a text file and print the chunk records as JSON
    Chunk(ChunkCmd),
    /// Reorder a chunk-record file and render it as one delimited string
    Join(JoinCmd),
}

#[derive(Args)]
struct ChunkCmd {
    /// Input text file
    input: PathBuf,
    #[arg(long, default_value_t = 64)]
    min_size: usize,
    #[arg(long, default_value_t = 512)]
    max_size: usize,
    #[arg(long, default_value_t = 10)]
    overlap_words: usize,
    #[arg(long, default_value_t = 16)]
    max_passes: usize,
    #[arg(long, value_enum, default_value_t = SplitterKind::Sentence)]
    splitter: SplitterKind,
    #[arg(long, value_enum, default_value_t = MeasureKind::Words)]
    measure: MeasureKind,
    /// Tag each chunk with a detected language
    #[arg(long, default_value_t = false)]
    detect_language: bool,
    /// Print a summary line to stderr
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(Args)]
struct JoinCmd {
    /// JSON file with an array of chunk records, in any order
    input: PathBuf,
    /// Keep a trailing empty record instead of discarding it
    #[arg(long, default_value_t = false)]
    keep_empty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SplitterKind {
    Sentence,
    Paragraph,
}

#[derive(Clone, Copy, ValueEnum)]
enum MeasureKind {
    Words,
    Chars,
    Tokens,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Chunk(cmd) => chunk(cmd),
        Command::Join(cmd) => join(cmd),
    }
}

fn chunk(cmd: ChunkCmd) -> Result<()> {
    let text = fs::read_to_string(&cmd.input)
        .with_context(|| format!("read {}", cmd.input.display()))?;

    let config = ChunkerConfig {
        min_chunk_size: cmd.min_size,
        max_chunk_size: cmd.max_size,
        overlap_words: cmd.overlap_words,
        max_passes: cmd.max_passes,
    };

    let splitter: Box<dyn Splitter> = match cmd.splitter {
        SplitterKind::Sentence => Box::new(SentenceSplitter::new()),
        SplitterKind::Paragraph => Box::new(ParagraphSplitter::new()),
    };
    let measurer: Box<dyn SizeMeasurer> = match cmd.measure {
        MeasureKind::Words => Box::new(WordCount),
        MeasureKind::Chars => Box::new(CharCount),
        MeasureKind::Tokens => Box::new(HeuristicTokenCount),
    };

    let mut chunker = Chunker::new(splitter, measurer, config)?;
    if cmd.detect_language {
        chunker = chunker.with_language_detector(StopwordDetector::new());
    }

    let chunks = chunker
        .chunk_str(&text)
        .with_context(|| format!("chunk {}", cmd.input.display()))?;
    log::debug!("produced {} chunk(s)", chunks.len());

    if cmd.stats {
        eprintln!("{}", get_stats(&chunks));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &chunks).context("serialize chunk records")?;
    writeln!(out)?;
    Ok(())
}

fn join(cmd: JoinCmd) -> Result<()> {
    let data = fs::read_to_string(&cmd.input)
        .with_context(|| format!("read {}", cmd.input.display()))?;
    let records: Vec<TextChunk> =
        serde_json::from_str(&data).context("parse chunk records")?;

    let mut collection = ChunkCollection::from_chunks(records);
    // Splitters often leave a trailing empty chunk behind; drop it unless asked not to
    let trailing_empty = collection
        .texts()
        .last()
        .is_some_and(|text| text.trim().is_empty());
    if !cmd.keep_empty && trailing_empty {
        collection.pop_last();
        log::debug!("discarded trailing empty chunk");
    }

    println!("{}", collection.render());
    Ok(())
}
