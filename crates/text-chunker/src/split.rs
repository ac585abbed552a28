use regex::Regex;

/// Capability: divide text into an ordered sequence of fragments.
///
/// Implementations must be deterministic and side-effect free. Returning
/// the input unchanged is legal; the normalizer treats it as non-progress,
/// not as an error.
pub trait Splitter {
    fn split(&self, text: &str) -> Vec<String>;
}

impl<T: Splitter + ?Sized> Splitter for Box<T> {
    fn split(&self, text: &str) -> Vec<String> {
        (**self).split(text)
    }
}

/// Splits on sentence-ending punctuation (`.`, `?`, `!`).
///
/// Delimiters are dropped and empty pieces filtered, so
/// `"A? B. C."` becomes `["A", " B", " C"]`.
pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"[.?!]").expect("valid sentence boundary regex"),
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for SentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        self.boundary
            .split(text)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Splits on blank lines, keeping paragraphs intact.
pub struct ParagraphSplitter {
    boundary: Regex,
}

impl ParagraphSplitter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            boundary: Regex::new(r"\n[ \t]*\n").expect("valid paragraph boundary regex"),
        }
    }
}

impl Default for ParagraphSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for ParagraphSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        self.boundary
            .split(text)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }
}
