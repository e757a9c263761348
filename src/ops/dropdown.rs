//! Choice-control ("dropdown") insertion

use super::OpError;
use crate::host::{DocumentHost, Mutation};
use crate::models::ControlAnchor;
use crate::text::{anchored_tokens, select_window};
use serde::{Deserialize, Serialize};

/// One planned choice control: where it goes and what it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownPlacement {
    pub anchor: ControlAnchor,
    pub tag: String,
    pub label: String,
    pub options: Vec<String>,
}

/// The placeholder options a control is seeded with when the caller
/// does not supply any.
pub fn default_options() -> Vec<String> {
    vec![
        "Option 1".to_string(),
        "Option 2".to_string(),
        "Option 3".to_string(),
    ]
}

/// Plan the controls for every word whose global index falls in
/// `[low, high]`.
///
/// Empty split artifacts consume an index but get no control; the tag
/// records the consumed index, so tags are stable across artifacts.
pub fn plan_dropdowns(
    paragraphs: &[String],
    low: usize,
    high: usize,
    options: &[String],
) -> Vec<DropdownPlacement> {
    let tokens = anchored_tokens(paragraphs);

    select_window(&tokens, low, high)
        .into_iter()
        .filter(|(_, token)| !token.word.is_empty())
        .map(|(counter, token)| DropdownPlacement {
            anchor: ControlAnchor::new(token.paragraph, token.offset),
            tag: format!("dropdown_{}", counter),
            label: format!("Dropdown for {}", token.word),
            options: options.to_vec(),
        })
        .collect()
}

/// Insert a choice control around every word in the index window,
/// committing the whole batch in one flush. Returns the number of
/// controls inserted.
pub fn insert_dropdowns<H: DocumentHost>(
    host: &mut H,
    low: usize,
    high: usize,
    options: &[String],
) -> Result<usize, OpError> {
    let paragraphs = host.paragraphs()?;
    let plan = plan_dropdowns(&paragraphs, low, high, options);
    let inserted = plan.len();

    for placement in plan {
        host.queue(Mutation::InsertChoiceControl {
            anchor: placement.anchor,
            tag: placement.tag,
            label: placement.label,
            options: placement.options,
        });
    }
    host.flush()?;

    log::info!(
        "inserted {} choice controls for word window {}..={}",
        inserted,
        low,
        high
    );
    Ok(inserted)
}
