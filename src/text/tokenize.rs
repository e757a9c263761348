//! Whitespace tokenizer with virtual-offset tracking
//!
//! Splits paragraph texts on runs of Unicode whitespace and assigns each
//! token an inclusive offset range in the virtual concatenation. A single
//! cursor is shared across all paragraphs: it advances by `len + 1` per
//! token (the inter-word space) and by one more at each paragraph end
//! (the implicit newline).
//!
//! Splitting keeps the empty segments a paragraph produces when it is
//! empty or starts/ends with whitespace. Dropping them would shift every
//! later token's offsets, so they travel through the table as degenerate
//! zero-length tokens.

use crate::models::{AnchoredToken, ParagraphSpan, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Split one paragraph into segments with their real character offsets.
///
/// Segments between, before and after whitespace runs are kept even when
/// empty, matching the split artifacts the offset math depends on.
fn split_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;
    for sep in WHITESPACE.find_iter(text) {
        segments.push((char_pos, &text[byte_pos..sep.start()]));
        char_pos += text[byte_pos..sep.end()].chars().count();
        byte_pos = sep.end();
    }
    segments.push((char_pos, &text[byte_pos..]));
    segments
}

/// Tokenize paragraphs into words with offsets in the virtual
/// concatenation.
///
/// Offsets follow the cursor rule, not the raw text: every token is
/// followed by exactly one virtual space, so runs of whitespace in the
/// source collapse to width one in the table.
pub fn tokenize(paragraphs: &[String]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cursor = 0usize;

    for text in paragraphs {
        for (_, word) in split_with_offsets(text) {
            let token = Token::new(word, cursor);
            cursor += token.len() + 1;
            tokens.push(token);
        }
        cursor += 1; // paragraph terminator
    }

    tokens
}

/// Each paragraph's text with its start offset in the virtual
/// concatenation (cumulative `len + 1` over prior paragraphs).
pub fn paragraph_spans(paragraphs: &[String]) -> Vec<ParagraphSpan> {
    let mut spans = Vec::with_capacity(paragraphs.len());
    let mut cumulative = 0usize;

    for text in paragraphs {
        spans.push(ParagraphSpan {
            text: text.clone(),
            start: cumulative,
        });
        cumulative += text.chars().count() + 1;
    }

    spans
}

/// Tokenize paragraphs into words anchored at their real positions.
///
/// Anchors keep the actual character offset of each word inside its
/// paragraph (whitespace runs at full width), which is what the host
/// needs to place an inline control.
pub fn anchored_tokens(paragraphs: &[String]) -> Vec<AnchoredToken> {
    let mut tokens = Vec::new();

    for (paragraph, text) in paragraphs.iter().enumerate() {
        for (offset, word) in split_with_offsets(text) {
            tokens.push(AnchoredToken {
                word: word.to_string(),
                paragraph,
                offset,
            });
        }
    }

    tokens
}
