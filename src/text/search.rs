//! Literal whole-word search over the virtual concatenation
//!
//! Case-insensitive scan for a literal term, bounded on both sides by
//! non-alphanumeric characters. Ranges follow the cumulative-length rule
//! (`len + 1` per prior paragraph), so they line up with paragraph spans
//! and host highlight ranges.

use crate::models::{HighlightRange, WordMatch};

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Find all whole-word occurrences of `term`, in document order.
///
/// The matched text is returned as it appears in the document, which may
/// differ from `term` in case.
pub fn find_word(paragraphs: &[String], term: &str) -> Vec<WordMatch> {
    let needle: Vec<char> = term.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut cumulative = 0usize;

    for text in paragraphs {
        let haystack: Vec<char> = text.chars().collect();
        let mut i = 0;

        while i + needle.len() <= haystack.len() {
            let window = &haystack[i..i + needle.len()];
            let candidate = window
                .iter()
                .zip(&needle)
                .all(|(h, n)| chars_eq_ignore_case(*h, *n));

            let bounded_left = i == 0 || !is_word_char(haystack[i - 1]);
            let after = i + needle.len();
            let bounded_right = after == haystack.len() || !is_word_char(haystack[after]);

            if candidate && bounded_left && bounded_right {
                matches.push(WordMatch {
                    text: window.iter().collect(),
                    range: HighlightRange::new(cumulative + i, cumulative + after - 1),
                });
                i = after;
            } else {
                i += 1;
            }
        }

        cumulative += haystack.len() + 1;
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let matches = find_word(&paragraphs(&["Hello world, hello again"]), "hello");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "Hello");
        assert_eq!(matches[0].range, HighlightRange::new(0, 4));
        assert_eq!(matches[1].text, "hello");
        assert_eq!(matches[1].range, HighlightRange::new(13, 17));
    }

    #[test]
    fn test_whole_word_only() {
        let matches = find_word(&paragraphs(&["cat category concat"]), "cat");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].range, HighlightRange::new(0, 2));
    }

    #[test]
    fn test_ranges_use_cumulative_paragraph_lengths() {
        // Second paragraph starts at 4 under the len + 1 rule
        let matches = find_word(&paragraphs(&["dog", "dog dog"]), "dog");

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].range, HighlightRange::new(0, 2));
        assert_eq!(matches[1].range, HighlightRange::new(4, 6));
        assert_eq!(matches[2].range, HighlightRange::new(8, 10));
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let matches = find_word(&paragraphs(&["stop. Stop, stop!"]), "stop");

        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        assert!(find_word(&paragraphs(&["anything"]), "").is_empty());
    }

    #[test]
    fn test_no_match_in_empty_document() {
        assert!(find_word(&[], "word").is_empty());
    }
}
