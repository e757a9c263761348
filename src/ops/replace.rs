//! Range and selection replacement operations

use super::OpError;
use crate::host::{DocumentHost, Mutation};
use crate::models::{EditOutcome, EditRequest};
use crate::text::apply_edit;

/// Overwrite an offset span of the document with replacement text.
///
/// Reads the current paragraph snapshot, computes the patches, queues a
/// full-text rewrite for each touched paragraph and commits them in one
/// flush. A span that intersects no paragraph is a no-op outcome: the
/// returned [`EditOutcome`] has no patches and the document is left
/// untouched.
pub fn replace_range<H: DocumentHost>(
    host: &mut H,
    edit: &EditRequest,
) -> Result<EditOutcome, OpError> {
    let paragraphs = host.paragraphs()?;
    let outcome = apply_edit(&paragraphs, edit);

    for patch in &outcome.patches {
        host.queue(Mutation::SetParagraphText {
            index: patch.paragraph_index,
            text: patch.new_text.clone(),
        });
    }
    host.flush()?;

    if outcome.is_noop() {
        log::info!(
            "edit span {}..={} matched no paragraph, document unchanged",
            edit.start,
            edit.end
        );
    } else {
        log::info!("rewrote {} paragraph(s)", outcome.patches.len());
    }
    Ok(outcome)
}

/// Replace a span of the current selection's text.
///
/// Takes the substring of the selection at `[start, end]` (inclusive,
/// clamped to the selection like JS `substring`), replaces its first
/// occurrence in the selection text, and rewrites the selection in one
/// flush. Returns the rewritten text.
pub fn replace_in_selection<H: DocumentHost>(
    host: &mut H,
    start: usize,
    end: usize,
    replacement: &str,
) -> Result<String, OpError> {
    let selection = host.selection_text()?;
    let chars: Vec<char> = selection.chars().collect();

    let a = start.min(chars.len());
    let b = end.saturating_add(1).min(chars.len());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let needle: String = chars[lo..hi].iter().collect();

    let rewritten = selection.replacen(&needle, replacement, 1);
    host.queue(Mutation::ReplaceSelection {
        text: rewritten.clone(),
    });
    host.flush()?;

    Ok(rewritten)
}
