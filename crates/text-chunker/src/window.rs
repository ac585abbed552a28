/// Pull a boundary slice of `n_words + 1` whitespace-delimited words from
/// one end of a chunk's text. No punctuation normalization; words keep
/// their original spelling and are re-joined with single spaces.
#[must_use]
pub fn extract_boundary(text: &str, n_words: usize, from_start: bool) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let take = (n_words + 1).min(words.len());
    let slice = if from_start {
        &words[..take]
    } else {
        &words[words.len() - take..]
    };
    slice.join(" ")
}

/// Augment each chunk with overlapping context from its neighbors.
///
/// Returns a new sequence of the same length and order; the input is never
/// mutated. Chunk `i` gets the trailing `overlap_words` words of chunk
/// `i - 1` prepended and the leading `overlap_words` words of chunk `i + 1`
/// appended, each separated by a blank line. First and last chunks only
/// receive context from the side that exists. `overlap_words == 0` returns
/// verbatim copies.
#[must_use]
pub fn add_context(texts: &[String], overlap_words: usize) -> Vec<String> {
    if overlap_words == 0 {
        return texts.to_vec();
    }

    let n_words = overlap_words - 1;
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let mut out = String::new();

            if i > 0 {
                let tail = extract_boundary(&texts[i - 1], n_words, false);
                if !tail.is_empty() {
                    out.push_str(&tail);
                    out.push_str("\n\n");
                }
            }

            out.push_str(text);

            if i + 1 < texts.len() {
                let head = extract_boundary(&texts[i + 1], n_words, true);
                if !head.is_empty() {
                    out.push_str("\n\n");
                    out.push_str(&head);
                }
            }

            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_boundary_literals() {
        assert_eq!(extract_boundary("This is a test", 1, true), "This is");
        assert_eq!(extract_boundary("This is a test", 2, true), "This is a");
        assert_eq!(extract_boundary("This is a test", 2, false), "is a test");
        assert_eq!(
            extract_boundary("How many apples in a bunch", 3, true),
            "How many apples in"
        );
        assert_eq!(
            extract_boundary("How many apples in a bunch", 4, true),
            "How many apples in a"
        );
        assert_eq!(
            extract_boundary("How many apples in a bunch", 3, false),
            "apples in a bunch"
        );
    }

    #[test]
    fn test_extract_boundary_short_text() {
        assert_eq!(extract_boundary("one two", 5, true), "one two");
        assert_eq!(extract_boundary("", 2, false), "");
    }

    #[test]
    fn test_zero_overlap_copies_input() {
        let texts = vec!["first chunk".to_string(), "second chunk".to_string()];
        assert_eq!(add_context(&texts, 0), texts);
    }

    #[test]
    fn test_neighbor_context_both_sides() {
        let texts = vec![
            "one two three four".to_string(),
            "five six seven eight".to_string(),
            "nine ten eleven twelve".to_string(),
        ];
        let out = add_context(&texts, 2);

        assert_eq!(out.len(), texts.len());
        assert_eq!(out[0], "one two three four\n\nfive six");
        assert_eq!(out[1], "three four\n\nfive six seven eight\n\nnine ten");
        assert_eq!(out[2], "seven eight\n\nnine ten eleven twelve");
    }

    #[test]
    fn test_single_chunk_gets_no_context() {
        let texts = vec!["alone in here".to_string()];
        assert_eq!(add_context(&texts, 3), texts);
    }

    #[test]
    fn test_input_not_mutated() {
        let texts = vec!["a b c".to_string(), "d e f".to_string()];
        let before = texts.clone();
        let _ = add_context(&texts, 2);
        assert_eq!(texts, before);
    }

    #[test]
    fn test_empty_neighbor_adds_no_separator() {
        let texts = vec![String::new(), "real content here".to_string()];
        let out = add_context(&texts, 2);
        assert_eq!(out[1], "real content here");
    }
}
