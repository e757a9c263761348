//! Task Pane Document Engine WASM Module
//!
//! Computational core for a word-processor task pane add-in: word
//! tokenization with virtual-offset tracking, offset-range edits,
//! whole-word search and choice-control planning, plus the operation
//! layer that drives the host document through a batched bridge.

pub mod api;
pub mod host;
pub mod models;
pub mod ops;
pub mod text;

// Re-export commonly used types
pub use models::core::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Task pane document engine WASM module initialized");
}
