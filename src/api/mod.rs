//! Task Pane WASM API
//!
//! The JavaScript-facing surface of the engine. Two styles of endpoint
//! live here:
//!
//! - `engine`: pure functions in the patch style. JS owns the document
//!   and its async batching protocol; WASM returns token tables, paragraph
//!   patches and control plans for JS to apply. These return `Result` so
//!   failure kinds stay distinguishable at the boundary.
//! - `bridge`: a [`JsHost`](bridge::JsHost) that drives the full
//!   operations through JS callbacks, with adapter methods that never
//!   throw past the boundary (failures are logged and the default value
//!   returned), matching what the pane UI expects.
//!
//! `helpers` carries the shared serialization, validation and console
//! logging utilities.

pub mod bridge;
pub mod engine;
pub mod helpers;
pub mod types;

pub use bridge::JsHost;
pub use engine::{
    compute_range_edit, find_word_ranges, paragraph_spans, plan_dropdown_controls,
    select_token_window, token_table_json, tokenize_paragraphs,
};
