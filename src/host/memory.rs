//! In-memory document host
//!
//! Owns paragraph texts, highlights, inserted controls and a selection,
//! and applies queued mutations on flush. Backs the operation tests and
//! any native embedding; fault injection and call counters exist so the
//! failure paths are testable too.

use super::{DocumentHost, HostError, Mutation};
use crate::models::{ControlAnchor, HighlightRange};

/// A choice control recorded by [`MemoryHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedControl {
    pub anchor: ControlAnchor,
    pub tag: String,
    pub label: String,
    pub options: Vec<String>,
}

/// In-memory [`DocumentHost`] implementation
#[derive(Debug, Default)]
pub struct MemoryHost {
    paragraphs: Vec<String>,
    selection: String,
    highlights: Vec<(HighlightRange, String)>,
    controls: Vec<InsertedControl>,
    queue: Vec<Mutation>,
    fail_next_read: bool,
    fail_next_flush: bool,
    read_calls: usize,
    flush_calls: usize,
}

impl MemoryHost {
    pub fn new(paragraphs: Vec<String>) -> Self {
        Self {
            paragraphs,
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Make the next read fail with [`HostError::Read`]
    pub fn fail_next_read(&mut self) {
        self.fail_next_read = true;
    }

    /// Make the next flush fail with [`HostError::Flush`]
    pub fn fail_next_flush(&mut self) {
        self.fail_next_flush = true;
    }

    pub fn paragraph_texts(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    pub fn highlights(&self) -> &[(HighlightRange, String)] {
        &self.highlights
    }

    pub fn controls(&self) -> &[InsertedControl] {
        &self.controls
    }

    /// Mutations queued but not yet flushed
    pub fn pending(&self) -> &[Mutation] {
        &self.queue
    }

    /// Number of host reads performed
    pub fn read_calls(&self) -> usize {
        self.read_calls
    }

    /// Number of flushes performed
    pub fn flush_calls(&self) -> usize {
        self.flush_calls
    }

    fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetParagraphText { index, text } => {
                if let Some(slot) = self.paragraphs.get_mut(index) {
                    *slot = text;
                }
            }
            Mutation::Highlight { ranges, color } => {
                self.highlights
                    .extend(ranges.into_iter().map(|r| (r, color.clone())));
            }
            Mutation::ClearHighlights => {
                self.highlights.clear();
            }
            Mutation::InsertChoiceControl {
                anchor,
                tag,
                label,
                options,
            } => {
                self.controls.push(InsertedControl {
                    anchor,
                    tag,
                    label,
                    options,
                });
            }
            Mutation::ReplaceSelection { text } => {
                self.selection = text;
            }
        }
    }
}

impl DocumentHost for MemoryHost {
    fn paragraphs(&mut self) -> Result<Vec<String>, HostError> {
        self.read_calls += 1;
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(HostError::Read("injected read failure".to_string()));
        }
        Ok(self.paragraphs.clone())
    }

    fn selection_text(&mut self) -> Result<String, HostError> {
        self.read_calls += 1;
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(HostError::Read("injected read failure".to_string()));
        }
        Ok(self.selection.clone())
    }

    fn queue(&mut self, mutation: Mutation) {
        self.queue.push(mutation);
    }

    fn flush(&mut self) -> Result<(), HostError> {
        self.flush_calls += 1;
        if self.fail_next_flush {
            self.fail_next_flush = false;
            self.queue.clear();
            return Err(HostError::Flush("injected flush failure".to_string()));
        }
        for mutation in std::mem::take(&mut self.queue) {
            self.apply(mutation);
        }
        Ok(())
    }
}
