//! Read-only extraction operations

use super::OpError;
use crate::host::DocumentHost;
use crate::models::{ParagraphSpan, Token};
use crate::text::{paragraph_spans, tokenize};

/// Extract every paragraph's text with its start offset in the virtual
/// concatenation.
pub fn extract_paragraphs<H: DocumentHost>(host: &mut H) -> Result<Vec<ParagraphSpan>, OpError> {
    let paragraphs = host.paragraphs()?;
    log::debug!("extracted {} paragraphs", paragraphs.len());
    Ok(paragraph_spans(&paragraphs))
}

/// The full token table for the current document snapshot
pub fn word_positions<H: DocumentHost>(host: &mut H) -> Result<Vec<Token>, OpError> {
    let paragraphs = host.paragraphs()?;
    Ok(tokenize(&paragraphs))
}
