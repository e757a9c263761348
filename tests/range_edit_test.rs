// Range replacement edge cases over the virtual concatenation

use taskpane_wasm::models::{EditRequest, Token};
use taskpane_wasm::text::{apply_edit, tokenize};

fn paragraphs(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_overrun_boundary_truncates_suffix() {
    let outcome = apply_edit(
        &paragraphs(&["0123456789abcdef"]),
        &EditRequest::new(13, 16, "X"),
    );

    assert_eq!(outcome.patches.len(), 1);
    assert_eq!(outcome.patches[0].paragraph_index, 0);
    assert_eq!(outcome.patches[0].new_text, "0123456789abcX");
}

#[test]
fn test_edit_spanning_full_paragraph() {
    let outcome = apply_edit(&paragraphs(&["abcde"]), &EditRequest::new(0, 4, "z"));

    assert_eq!(outcome.patches[0].new_text, "z");
}

#[test]
fn test_edit_with_multi_word_replacement_retokenizes() {
    let outcome = apply_edit(
        &paragraphs(&["Hello world"]),
        &EditRequest::new(0, 4, "Good morning"),
    );

    assert_eq!(outcome.patches[0].new_text, "Good morning world");
    let words: Vec<&str> = outcome.tokens.iter().map(|t| t.word.as_str()).collect();
    assert_eq!(words, vec!["Good", "morning", "world"]);
}

#[test]
fn test_tokens_describe_patched_document() {
    let source = paragraphs(&["Hello world", "Foo bar baz"]);
    let outcome = apply_edit(&source, &EditRequest::new(13, 16, "replacementWord"));

    let mut patched = source.clone();
    for patch in &outcome.patches {
        patched[patch.paragraph_index] = patch.new_text.clone();
    }
    assert_eq!(outcome.tokens, tokenize(&patched));
}

#[test]
fn test_noop_preserves_token_table() {
    let source = paragraphs(&["tiny"]);
    let outcome = apply_edit(&source, &EditRequest::new(100, 104, "X"));

    assert!(outcome.is_noop());
    assert_eq!(outcome.tokens, vec![Token::new("tiny", 0)]);
}

#[test]
fn test_cross_paragraph_span_is_noop() {
    let outcome = apply_edit(
        &paragraphs(&["abcde", "fghij"]),
        &EditRequest::new(3, 7, "X"),
    );

    assert!(outcome.is_noop());
}

#[test]
fn test_reapplying_same_edit_to_patched_text_is_noop() {
    let request = EditRequest::new(13, 16, "X");
    let source = paragraphs(&["0123456789abcdef"]);

    let first = apply_edit(&source, &request);
    let patched = vec![first.patches[0].new_text.clone()];
    assert_eq!(patched[0], "0123456789abcX");

    // The patched paragraph is too short for the guard now; nothing may
    // be replaced twice.
    let second = apply_edit(&patched, &request);
    assert!(second.is_noop());
}

#[test]
fn test_edit_at_document_start() {
    let outcome = apply_edit(&paragraphs(&["Hello world"]), &EditRequest::new(0, 0, "J"));

    assert_eq!(outcome.patches[0].new_text, "Jello world");
}

#[test]
fn test_empty_replacement_deletes_span() {
    let outcome = apply_edit(&paragraphs(&["Hello world"]), &EditRequest::new(5, 10, ""));

    assert_eq!(outcome.patches[0].new_text, "Hello");
}
