//! Pure engine endpoints
//!
//! JS owns the document buffer and the host's batching protocol; these
//! functions take a paragraph snapshot and return the tables and patches
//! for JS to apply. No endpoint here touches the host.

use crate::api::helpers::{deserialize, serialize, validate_search_term, validate_window, validation_error};
use crate::api::types::{HighlightPlan, SelectedToken};
use crate::models::{EditRequest, Token};
use crate::ops::{default_options, plan_dropdowns, DEFAULT_HIGHLIGHT_COLOR};
use crate::text;
use wasm_bindgen::prelude::*;

/// Tokenize a paragraph snapshot into the offset table
///
/// # Parameters
/// - `paragraphs_js`: JavaScript array of paragraph texts
///
/// # Returns
/// Array of `{ word, from, to }` tokens in document order
#[wasm_bindgen(js_name = tokenizeParagraphs)]
pub fn tokenize_paragraphs(paragraphs_js: JsValue) -> Result<JsValue, JsValue> {
    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let tokens = text::tokenize(&paragraphs);
    serialize(&tokens, "Failed to serialize tokens")
}

/// Each paragraph's text with its cumulative start offset
#[wasm_bindgen(js_name = paragraphSpans)]
pub fn paragraph_spans(paragraphs_js: JsValue) -> Result<JsValue, JsValue> {
    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let spans = text::paragraph_spans(&paragraphs);
    serialize(&spans, "Failed to serialize paragraph spans")
}

/// Compute the paragraph patches for an offset-range edit
///
/// # Returns
/// `{ patches, tokens }` where `patches` rewrite whole paragraphs and
/// `tokens` describe the patched document. An edit matching no paragraph
/// returns empty patches and the unchanged token table.
#[wasm_bindgen(js_name = computeRangeEdit)]
pub fn compute_range_edit(
    paragraphs_js: JsValue,
    start: usize,
    end: usize,
    replacement: &str,
) -> Result<JsValue, JsValue> {
    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let outcome = text::apply_edit(&paragraphs, &EditRequest::new(start, end, replacement));
    serialize(&outcome, "Failed to serialize edit outcome")
}

/// Select the tokens whose global index falls in `[low, high]`
#[wasm_bindgen(js_name = selectTokenWindow)]
pub fn select_token_window(tokens_js: JsValue, low: usize, high: usize) -> Result<JsValue, JsValue> {
    validate_window(low, high).map_err(validation_error)?;

    let tokens: Vec<Token> = deserialize(tokens_js, "Failed to deserialize tokens")?;
    let selected: Vec<SelectedToken> = text::select_window(&tokens, low, high)
        .into_iter()
        .map(|(index, token)| SelectedToken {
            index,
            token: token.clone(),
        })
        .collect();
    serialize(&selected, "Failed to serialize selected tokens")
}

/// Find whole-word matches and the ranges to highlight
///
/// Rejects empty terms and terms over the length ceiling before doing
/// any work, so JS can rely on the same validation the operations use.
#[wasm_bindgen(js_name = findWordRanges)]
pub fn find_word_ranges(
    paragraphs_js: JsValue,
    term: &str,
    color: Option<String>,
) -> Result<JsValue, JsValue> {
    validate_search_term(term).map_err(validation_error)?;

    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let plan = HighlightPlan {
        matches: text::find_word(&paragraphs, term),
        color: color.unwrap_or_else(|| DEFAULT_HIGHLIGHT_COLOR.to_string()),
    };
    serialize(&plan, "Failed to serialize highlight plan")
}

/// Token table as a pretty-printed JSON string
///
/// Debugging aid for the pane: the same table `tokenizeParagraphs`
/// returns, rendered for display.
///
/// # Returns
/// JSON string representation of the token table
#[wasm_bindgen(js_name = tokenTableJson)]
pub fn token_table_json(paragraphs_js: JsValue) -> Result<String, JsValue> {
    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let tokens = text::tokenize(&paragraphs);

    serde_json::to_string_pretty(&tokens)
        .map_err(|e| JsValue::from_str(&format!("Failed to render token table: {}", e)))
}

/// Plan the choice controls for a word-index window
///
/// # Parameters
/// - `options_js`: JavaScript array of option texts, or undefined for
///   the placeholder seed
#[wasm_bindgen(js_name = planDropdownControls)]
pub fn plan_dropdown_controls(
    paragraphs_js: JsValue,
    low: usize,
    high: usize,
    options_js: JsValue,
) -> Result<JsValue, JsValue> {
    validate_window(low, high).map_err(validation_error)?;

    let paragraphs: Vec<String> = deserialize(paragraphs_js, "Failed to deserialize paragraphs")?;
    let options: Vec<String> = if options_js.is_undefined() || options_js.is_null() {
        default_options()
    } else {
        deserialize(options_js, "Failed to deserialize options")?
    };

    let plan = plan_dropdowns(&paragraphs, low, high, &options);
    serialize(&plan, "Failed to serialize dropdown plan")
}
