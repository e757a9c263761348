//! Document host bridge
//!
//! The host document lives on the other side of an async request/response
//! protocol the embedding owns. This module models only the observable
//! contract: reads return a snapshot, mutations queue, and a single
//! `flush` commits everything queued. Nothing a mutation does is visible
//! before its flush.
//!
//! Putting the seam behind a trait keeps the operation layer testable
//! without a real document host; [`MemoryHost`] is the concrete stand-in.

pub mod memory;

pub use memory::{InsertedControl, MemoryHost};

use crate::models::{ControlAnchor, HighlightRange};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced by the bridge
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// A read (paragraphs, selection) was rejected by the host
    #[error("host read failed: {0}")]
    Read(String),

    /// The host rejected the queued batch at commit time
    #[error("host flush failed: {0}")]
    Flush(String),
}

/// One queued document mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Replace one paragraph's full text
    SetParagraphText { index: usize, text: String },
    /// Highlight the given ranges in the given color
    Highlight {
        ranges: Vec<HighlightRange>,
        color: String,
    },
    /// Remove every highlight in the document
    ClearHighlights,
    /// Insert an inline choice control wrapping the word at `anchor`
    InsertChoiceControl {
        anchor: ControlAnchor,
        tag: String,
        label: String,
        options: Vec<String>,
    },
    /// Replace the current selection's text
    ReplaceSelection { text: String },
}

/// The document host seam
///
/// Reads take `&mut self` because the host may have to load and
/// synchronize to answer them. Queued mutations are not observable until
/// `flush`, and one logical operation performs at most one flush.
pub trait DocumentHost {
    /// Current paragraph texts, in document order
    fn paragraphs(&mut self) -> Result<Vec<String>, HostError>;

    /// Text of the current selection
    fn selection_text(&mut self) -> Result<String, HostError>;

    /// Queue a mutation for the next flush
    fn queue(&mut self, mutation: Mutation);

    /// Commit every queued mutation in order
    fn flush(&mut self) -> Result<(), HostError>;
}
