//! Range replacement over the virtual concatenation
//!
//! Locates the paragraph owning an edit span by the cumulative-length
//! rule (each prior paragraph contributes `len + 1`) and rebuilds that
//! paragraph's text around the replacement. The edit never splices
//! across paragraphs: a span the guard cannot place inside a single
//! paragraph window produces no patch and the input stands unchanged.

use crate::models::{EditOutcome, EditRequest, ParagraphPatch};
use crate::text::tokenize::tokenize;

/// Apply an edit request to a paragraph snapshot.
///
/// Returns the paragraphs to rewrite (normally at most one) plus the
/// token table of the patched document, so callers can apply the patches
/// and trust the table without re-tokenizing. A span that intersects no
/// paragraph window is a no-op outcome, not an error.
pub fn apply_edit(paragraphs: &[String], edit: &EditRequest) -> EditOutcome {
    let mut patches = Vec::new();

    if edit.start <= edit.end {
        let mut cumulative = 0usize;
        for (paragraph_index, text) in paragraphs.iter().enumerate() {
            let len = text.chars().count();

            // Both bounds must hold: the paragraph window has to contain
            // the whole span.
            if cumulative <= edit.start && cumulative + len >= edit.end {
                let rel_start = edit.start - cumulative;
                let rel_end = edit.end - cumulative;

                let prefix: String = text.chars().take(rel_start).collect();
                // rel_end + 1 may run past the paragraph end; the suffix
                // saturates to empty.
                let suffix: String = text.chars().skip(rel_end + 1).collect();

                patches.push(ParagraphPatch {
                    paragraph_index,
                    new_text: format!("{}{}{}", prefix, edit.replacement, suffix),
                });
            }

            cumulative += len + 1;
        }
    }

    let tokens = if patches.is_empty() {
        tokenize(paragraphs)
    } else {
        let mut patched = paragraphs.to_vec();
        for patch in &patches {
            patched[patch.paragraph_index] = patch.new_text.clone();
        }
        tokenize(&patched)
    };

    EditOutcome { patches, tokens }
}
