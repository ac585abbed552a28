use crate::error::Result;

/// Capability: report the size of a text in some external unit.
///
/// The unit is whatever the implementation counts (words, characters,
/// model tokens); the core never assumes character length. Implementations
/// that call out to a tokenizer or service carry that context themselves
/// and may fail; a failure aborts the chunking run for the current
/// document only.
pub trait SizeMeasurer {
    fn measure(&self, text: &str) -> Result<usize>;

    /// Measure a whole pass worth of fragments.
    ///
    /// The normalizer calls this once per pass, so implementations backed
    /// by a slow tokenizer can batch or fan out the calls. Either every
    /// measurement succeeds or the pass fails as a whole.
    fn measure_all(&self, texts: &[String]) -> Result<Vec<usize>> {
        texts.iter().map(|text| self.measure(text)).collect()
    }
}

impl<T: SizeMeasurer + ?Sized> SizeMeasurer for Box<T> {
    fn measure(&self, text: &str) -> Result<usize> {
        (**self).measure(text)
    }

    fn measure_all(&self, texts: &[String]) -> Result<Vec<usize>> {
        (**self).measure_all(texts)
    }
}

/// Counts whitespace-delimited words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCount;

impl SizeMeasurer for WordCount {
    fn measure(&self, text: &str) -> Result<usize> {
        Ok(text.split_whitespace().count())
    }
}

/// Counts characters (Unicode scalar values, not bytes).
#[derive(Debug, Clone, Copy, Default)]
pub struct CharCount;

impl SizeMeasurer for CharCount {
    fn measure(&self, text: &str) -> Result<usize> {
        Ok(text.chars().count())
    }
}

/// Estimates model tokens without a tokenizer.
///
/// Rough estimate: 4 chars per token on average, at least 1 for non-empty
/// text. Stands in for a real tokenizer-backed measurer where exact counts
/// are not worth the latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenCount;

impl SizeMeasurer for HeuristicTokenCount {
    fn measure(&self, text: &str) -> Result<usize> {
        if text.is_empty() {
            return Ok(0);
        }
        Ok((text.len() / 4).max(1))
    }
}
