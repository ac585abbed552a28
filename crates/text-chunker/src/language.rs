use unicode_segmentation::UnicodeSegmentation;

/// Capability: guess the language of a text.
///
/// Optional collaborator; `None` degrades to an untagged chunk and never
/// aborts a run.
pub trait LanguageDetector {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Languages the built-in detector can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Language {
    English,
    German,
    French,
    Spanish,
}

const LANGUAGES: [Language; 4] = [
    Language::English,
    Language::German,
    Language::French,
    Language::Spanish,
];

impl Language {
    /// ISO 639-1 code
    fn as_str(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }

    /// High-frequency function words, used as a fingerprint
    fn stopwords(self) -> &'static [&'static str] {
        match self {
            Language::English => &[
                "the", "and", "of", "to", "in", "is", "that", "it", "for", "was", "with", "are",
                "this", "not", "have",
            ],
            Language::German => &[
                "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "mit", "für", "auf",
                "den", "von", "sich", "werden",
            ],
            Language::French => &[
                "le", "la", "les", "et", "est", "pas", "une", "des", "dans", "pour", "que", "qui",
                "sur", "avec", "sont",
            ],
            Language::Spanish => &[
                "el", "los", "las", "es", "una", "del", "por", "con", "para", "como", "más", "pero",
                "sus", "este", "está",
            ],
        }
    }
}

/// Stopword-frequency language detector.
///
/// Counts how many words of the text appear in each language's stopword
/// table and reports the best match. Texts with fewer than `min_hits`
/// matches stay undetected, so short or non-prose fragments are not
/// mislabeled.
pub struct StopwordDetector {
    min_hits: usize,
}

impl StopwordDetector {
    #[must_use]
    pub fn new() -> Self {
        Self { min_hits: 2 }
    }

    /// Require at least `min_hits` stopword matches before reporting a language
    #[must_use]
    pub fn with_min_hits(min_hits: usize) -> Self {
        Self { min_hits }
    }
}

impl Default for StopwordDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for StopwordDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let words: Vec<String> = text
            .unicode_words()
            .map(|word| word.to_lowercase())
            .collect();
        if words.is_empty() {
            return None;
        }

        let mut best: Option<(Language, usize)> = None;
        for language in LANGUAGES {
            let table = language.stopwords();
            let hits = words
                .iter()
                .filter(|word| table.contains(&word.as_str()))
                .count();
            // Ties keep the earlier language; the table order is fixed
            if hits > best.map_or(0, |(_, count)| count) {
                best = Some((language, hits));
            }
        }

        best.filter(|&(_, hits)| hits >= self.min_hits)
            .map(|(language, _)| language.as_str().to_string())
    }
}
