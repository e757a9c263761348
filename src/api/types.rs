//! Shared types for the WASM API
//!
//! Result types returned across the JS boundary.

use crate::models::{Token, WordMatch};
use serde::{Deserialize, Serialize};

/// A token paired with its global index in the flattened stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedToken {
    pub index: usize,
    pub token: Token,
}

/// Everything JS needs to apply a search highlight: the hits and the
/// color to paint them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightPlan {
    pub matches: Vec<WordMatch>,
    pub color: String,
}
