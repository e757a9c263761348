//! Layer 0: pure text engine
//!
//! Tokenization, offset arithmetic, range edits and search over a
//! snapshot of the document's paragraph texts. No knowledge of the host
//! document and no side effects; everything here is a pure function of
//! its input, safe to call repeatedly and concurrently.
//!
//! Offsets refer to the *virtual concatenation*: the conceptual single
//! string formed by joining all paragraph texts with one newline. It is
//! never materialized; a running cursor locates tokens and paragraphs
//! without re-scanning prior text.
//!
//! ## Modules
//!
//! - `tokenize`: whitespace tokenizer with offset tracking
//! - `patch`: range replacement producing paragraph patches
//! - `window`: index-window selection over token sequences
//! - `search`: literal whole-word search

pub mod patch;
pub mod search;
pub mod tokenize;
pub mod window;

// Re-exports for convenience
pub use patch::apply_edit;
pub use search::find_word;
pub use tokenize::{anchored_tokens, paragraph_spans, tokenize};
pub use window::select_window;
