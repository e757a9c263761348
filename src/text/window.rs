//! Index-window selection over token sequences
//!
//! A zero-based counter advances once per item, empty split artifacts
//! included; items whose counter falls inside the inclusive window are
//! selected. Generic so the same walk serves offset tokens and anchored
//! tokens.

/// Select the items whose zero-based position lies in `[low, high]`,
/// paired with that position.
pub fn select_window<T>(items: &[T], low: usize, high: usize) -> Vec<(usize, &T)> {
    items
        .iter()
        .enumerate()
        .filter(|(counter, _)| *counter >= low && *counter <= high)
        .collect()
}
