//! Search/highlight operations

use super::{OpError, MAX_SEARCH_TERM_CHARS};
use crate::host::{DocumentHost, Mutation};
use crate::text::find_word;

/// Search for whole-word occurrences of `term` and highlight them.
///
/// Returns the matched texts in document order. The term is validated
/// before any host contact: empty terms and terms over
/// [`MAX_SEARCH_TERM_CHARS`] are rejected as [`OpError::InvalidInput`].
pub fn search_and_highlight<H: DocumentHost>(
    host: &mut H,
    term: &str,
    color: &str,
) -> Result<Vec<String>, OpError> {
    if term.is_empty() {
        return Err(OpError::invalid_input("search term is empty"));
    }
    if term.chars().count() > MAX_SEARCH_TERM_CHARS {
        return Err(OpError::invalid_input(format!(
            "search term exceeds {} characters",
            MAX_SEARCH_TERM_CHARS
        )));
    }

    let paragraphs = host.paragraphs()?;
    let matches = find_word(&paragraphs, term);

    if !matches.is_empty() {
        host.queue(Mutation::Highlight {
            ranges: matches.iter().map(|m| m.range).collect(),
            color: color.to_string(),
        });
    }
    host.flush()?;

    log::info!("highlighted {} occurrences of search term", matches.len());
    Ok(matches.into_iter().map(|m| m.text).collect())
}

/// Remove every highlight in the document
pub fn clear_highlights<H: DocumentHost>(host: &mut H) -> Result<(), OpError> {
    host.queue(Mutation::ClearHighlights);
    host.flush()?;

    log::info!("cleared document highlights");
    Ok(())
}
