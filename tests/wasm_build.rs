//! WASM build test
//!
//! Checks that the module's JS-facing endpoints work end to end in a
//! browser environment.

use taskpane_wasm::api::types::{HighlightPlan, SelectedToken};
use taskpane_wasm::api::{
    compute_range_edit, find_word_ranges, select_token_window, tokenize_paragraphs,
};
use taskpane_wasm::models::{EditOutcome, Token};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn paragraphs_js(texts: &[&str]) -> wasm_bindgen::JsValue {
    let texts: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
    serde_wasm_bindgen::to_value(&texts).unwrap()
}

#[wasm_bindgen_test]
fn test_tokenize_endpoint() {
    let result = tokenize_paragraphs(paragraphs_js(&["Hello world"]));
    assert!(result.is_ok());

    let tokens: Vec<Token> = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].word, "Hello");
    assert_eq!(tokens[1].from, 6);
}

#[wasm_bindgen_test]
fn test_range_edit_endpoint() {
    let result = compute_range_edit(paragraphs_js(&["0123456789abcdef"]), 13, 16, "X");
    assert!(result.is_ok());

    let outcome: EditOutcome = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(outcome.patches.len(), 1);
    assert_eq!(outcome.patches[0].new_text, "0123456789abcX");
}

#[wasm_bindgen_test]
fn test_window_endpoint() {
    let tokens = tokenize_paragraphs(paragraphs_js(&["a b c d e"])).unwrap();
    let result = select_token_window(tokens, 1, 3);
    assert!(result.is_ok());

    let selected: Vec<SelectedToken> = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(selected.len(), 3);
    assert_eq!(selected[0].index, 1);
    assert_eq!(selected[0].token.word, "b");
}

#[wasm_bindgen_test]
fn test_search_endpoint_validates_term() {
    let result = find_word_ranges(paragraphs_js(&["Hello world"]), "", None);
    assert!(result.is_err());

    let overlong = "x".repeat(101);
    let result = find_word_ranges(paragraphs_js(&["Hello world"]), &overlong, None);
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_search_endpoint_finds_matches() {
    let result = find_word_ranges(paragraphs_js(&["Hello world"]), "hello", None);
    assert!(result.is_ok());

    let plan: HighlightPlan = serde_wasm_bindgen::from_value(result.unwrap()).unwrap();
    assert_eq!(plan.matches.len(), 1);
    assert_eq!(plan.color, "yellow");
}
