//! Core types for tokens, offsets and edits
//!
//! All offsets count Unicode scalar values in the virtual concatenation
//! of the document's paragraphs (paragraphs joined by one newline).

use serde::{Deserialize, Serialize};

/// A whitespace-delimited word with its inclusive offset range in the
/// virtual concatenation.
///
/// `to` is `from + len - 1`, so an empty split artifact (a paragraph
/// that is empty or starts/ends with whitespace) carries the degenerate
/// range `to = from - 1`. Offsets are signed for exactly that case: the
/// artifact at the very start of the document has `from = 0, to = -1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub word: String,
    pub from: i64,
    pub to: i64,
}

impl Token {
    pub fn new(word: impl Into<String>, from: usize) -> Self {
        let word = word.into();
        let len = word.chars().count() as i64;
        let from = from as i64;
        Self {
            word,
            from,
            to: from + len - 1,
        }
    }

    /// Length of the word in Unicode scalar values
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// True for empty split artifacts
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// One paragraph's text together with its start offset in the virtual
/// concatenation (cumulative `len + 1` over prior paragraphs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphSpan {
    pub text: String,
    pub start: usize,
}

/// A word with its location inside its owning paragraph.
///
/// Unlike [`Token`], the offset here is the word's real position in the
/// paragraph text (runs of whitespace kept at their actual width), which
/// is what a host anchor needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchoredToken {
    pub word: String,
    pub paragraph: usize,
    pub offset: usize,
}

/// A span of the virtual concatenation to overwrite.
///
/// Offsets are inclusive on both ends. There are no privileged spans:
/// callers supply the range explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl EditRequest {
    pub fn new(start: usize, end: usize, replacement: impl Into<String>) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }
}

/// The fully reconstructed text for one paragraph touched by an edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphPatch {
    pub paragraph_index: usize,
    pub new_text: String,
}

/// Result of applying an [`EditRequest`]: the paragraphs to rewrite plus
/// the token table of the patched document.
///
/// An edit whose span intersects no paragraph window yields no patches
/// and the tokens of the unchanged input; that outcome is a no-op, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOutcome {
    pub patches: Vec<ParagraphPatch>,
    pub tokens: Vec<Token>,
}

impl EditOutcome {
    /// True when the edit matched no paragraph
    pub fn is_noop(&self) -> bool {
        self.patches.is_empty()
    }
}

/// An inclusive character range to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub from: usize,
    pub to: usize,
}

impl HighlightRange {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// A whole-word search hit: the matched text as it appears in the
/// document and its highlight range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    pub text: String,
    pub range: HighlightRange,
}

/// Anchor for an inline choice control: a paragraph and the real
/// character offset of the wrapped word within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlAnchor {
    pub paragraph_index: usize,
    pub offset: usize,
}

impl ControlAnchor {
    pub fn new(paragraph_index: usize, offset: usize) -> Self {
        Self {
            paragraph_index,
            offset,
        }
    }
}
