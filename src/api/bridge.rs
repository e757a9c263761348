//! JS-callback document host and the legacy pane adapter
//!
//! [`JsHost`] implements [`DocumentHost`] over three callbacks the task
//! pane JS supplies: one returning the paragraph texts, one returning
//! the selection text, and one applying a batch of queued mutations
//! inside a single host synchronization.
//!
//! The adapter methods mirror the pane's original surface: they run the
//! full operation and never throw past the boundary. Failures are logged
//! to the console and the empty/default value returned; callers that
//! need to distinguish failure kinds use the `engine` endpoints or the
//! `ops` layer directly.

use crate::host::{DocumentHost, HostError, Mutation};
use crate::models::EditRequest;
use crate::ops;
use crate::{wasm_error, wasm_info};
use wasm_bindgen::prelude::*;

fn js_error_text(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

/// A [`DocumentHost`] backed by task pane JS callbacks
#[wasm_bindgen]
pub struct JsHost {
    read_paragraphs: js_sys::Function,
    read_selection: js_sys::Function,
    apply_mutations: js_sys::Function,
    queue: Vec<Mutation>,
}

#[wasm_bindgen]
impl JsHost {
    /// # Parameters
    /// - `read_paragraphs`: `() -> string[]`
    /// - `read_selection`: `() -> string`
    /// - `apply_mutations`: `(batch: Mutation[]) -> void`, expected to
    ///   commit the whole batch in one host synchronization
    #[wasm_bindgen(constructor)]
    pub fn new(
        read_paragraphs: js_sys::Function,
        read_selection: js_sys::Function,
        apply_mutations: js_sys::Function,
    ) -> JsHost {
        JsHost {
            read_paragraphs,
            read_selection,
            apply_mutations,
            queue: Vec::new(),
        }
    }

    /// Search for a word and highlight every occurrence
    ///
    /// Returns the matched texts; an invalid term or a host failure
    /// yields an empty array.
    #[wasm_bindgen(js_name = searchForWord)]
    pub fn search_for_word(&mut self, term: &str) -> JsValue {
        match ops::search_and_highlight(self, term, ops::DEFAULT_HIGHLIGHT_COLOR) {
            Ok(texts) => serde_wasm_bindgen::to_value(&texts).unwrap_or(JsValue::NULL),
            Err(e) => {
                wasm_error!("Error searching for word: {}", e);
                js_sys::Array::new().into()
            }
        }
    }

    /// Remove every highlight in the document
    #[wasm_bindgen(js_name = clearHighlights)]
    pub fn clear_highlights(&mut self) {
        if let Err(e) = ops::clear_highlights(self) {
            wasm_error!("Error clearing highlights: {}", e);
        }
    }

    /// Extract paragraph texts with their start offsets
    #[wasm_bindgen(js_name = extractTextWithPositions)]
    pub fn extract_text_with_positions(&mut self) -> JsValue {
        match ops::extract_paragraphs(self) {
            Ok(spans) => serde_wasm_bindgen::to_value(&spans).unwrap_or(JsValue::NULL),
            Err(e) => {
                wasm_error!("Error extracting text with positions: {}", e);
                js_sys::Array::new().into()
            }
        }
    }

    /// The token table for the current document
    #[wasm_bindgen(js_name = getWordPositions)]
    pub fn get_word_positions(&mut self) -> JsValue {
        match ops::word_positions(self) {
            Ok(tokens) => serde_wasm_bindgen::to_value(&tokens).unwrap_or(JsValue::NULL),
            Err(e) => {
                wasm_error!("Error getting word positions: {}", e);
                js_sys::Array::new().into()
            }
        }
    }

    /// Overwrite an offset span of the document and return the token
    /// table of the patched document
    #[wasm_bindgen(js_name = getWordPositionsAndReplace)]
    pub fn get_word_positions_and_replace(
        &mut self,
        start: usize,
        end: usize,
        replacement: &str,
    ) -> JsValue {
        match ops::replace_range(self, &EditRequest::new(start, end, replacement)) {
            Ok(outcome) => {
                wasm_info!(
                    "Replacement for span {}..={} touched {} paragraph(s)",
                    start,
                    end,
                    outcome.patches.len()
                );
                serde_wasm_bindgen::to_value(&outcome.tokens).unwrap_or(JsValue::NULL)
            }
            Err(e) => {
                wasm_error!("Error getting and replacing word positions: {}", e);
                js_sys::Array::new().into()
            }
        }
    }

    /// Wrap every word in the index window in a choice control
    #[wasm_bindgen(js_name = addDropdownToWordsInRange)]
    pub fn add_dropdown_to_words_in_range(&mut self, low: usize, high: usize) {
        match ops::insert_dropdowns(self, low, high, &ops::default_options()) {
            Ok(inserted) => {
                wasm_info!(
                    "Dropdown added to {} words in positions from {} to {}",
                    inserted,
                    low,
                    high
                );
            }
            Err(e) => wasm_error!("Error adding dropdown: {}", e),
        }
    }

    /// Replace a span of the current selection's text
    #[wasm_bindgen(js_name = replaceTextInRange)]
    pub fn replace_text_in_range(&mut self, start: usize, end: usize, replacement: &str) {
        if let Err(e) = ops::replace_in_selection(self, start, end, replacement) {
            wasm_error!("Error replacing text: {}", e);
        }
    }
}

impl DocumentHost for JsHost {
    fn paragraphs(&mut self) -> Result<Vec<String>, HostError> {
        let value = self
            .read_paragraphs
            .call0(&JsValue::NULL)
            .map_err(|e| HostError::Read(js_error_text(e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| HostError::Read(e.to_string()))
    }

    fn selection_text(&mut self) -> Result<String, HostError> {
        let value = self
            .read_selection
            .call0(&JsValue::NULL)
            .map_err(|e| HostError::Read(js_error_text(e)))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| HostError::Read(e.to_string()))
    }

    fn queue(&mut self, mutation: Mutation) {
        self.queue.push(mutation);
    }

    fn flush(&mut self) -> Result<(), HostError> {
        // Reads need no commit; skip the host round-trip for an empty batch
        if self.queue.is_empty() {
            return Ok(());
        }

        let batch = std::mem::take(&mut self.queue);
        let batch_js = serde_wasm_bindgen::to_value(&batch)
            .map_err(|e| HostError::Flush(e.to_string()))?;
        self.apply_mutations
            .call1(&JsValue::NULL, &batch_js)
            .map_err(|e| HostError::Flush(js_error_text(e)))?;
        Ok(())
    }
}
