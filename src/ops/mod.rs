//! Task pane operations
//!
//! The operations the pane exposes, generic over [`DocumentHost`] so the
//! same code runs against the real bridge and the in-memory host. Every
//! operation validates its input before contacting the host, batches all
//! of its mutations, and commits them with a single flush.
//!
//! Failures come back as tagged results; callers that need the legacy
//! swallow-and-log contract get it from the adapter in `api::bridge`,
//! not from this layer.

pub mod dropdown;
pub mod extract;
pub mod replace;
pub mod search;

pub use dropdown::{default_options, insert_dropdowns, plan_dropdowns, DropdownPlacement};
pub use extract::{extract_paragraphs, word_positions};
pub use replace::{replace_in_selection, replace_range};
pub use search::{clear_highlights, search_and_highlight};

use crate::host::HostError;
use thiserror::Error;

/// Longest accepted search term, in Unicode scalar values
pub const MAX_SEARCH_TERM_CHARS: usize = 100;

/// Highlight color used when the caller does not pick one
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "yellow";

/// Operation-boundary error type
#[derive(Debug, Clone, Error)]
pub enum OpError {
    /// Rejected before any host contact
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The document host bridge failed during a read or flush
    #[error(transparent)]
    Host(#[from] HostError),
}

impl OpError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        OpError::InvalidInput {
            reason: reason.into(),
        }
    }
}
