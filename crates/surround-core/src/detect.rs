//! Marker toggle detection.
//!
//! Pure decisions over extracted text: does the selection already carry the
//! marker pair (strip it) or not (wrap it)? Detection never touches the
//! buffer, so the add/remove choice is fixed before the first write.

use crate::extract::{Extraction, SurroundStyle};
use surround_core_markers::MarkerPair;

/// Decide whether a toggle should strip the markers instead of adding them.
///
/// `allow_remove` short-circuits to "add"; link insertion passes `false`
/// because its closing wrapper embeds a per-invocation target.
///
/// A single-line selection equal to exactly `before + after` (empty
/// content) counts as removable, not as a fresh wrap.
pub fn should_remove(
    extraction: &Extraction,
    pair: &MarkerPair,
    style: SurroundStyle,
    allow_remove: bool,
) -> bool {
    if !allow_remove {
        return false;
    }
    let before = pair.before.as_str();
    let after = pair.after.as_str();

    match style {
        SurroundStyle::Inline => match extraction.lines.as_slice() {
            [] => false,
            [only] => {
                only.starts_with(before)
                    && only.ends_with(after)
                    && only.len() >= pair.total_len()
            }
            [first, .., last] => {
                first.trim_start().starts_with(before) && last.trim_end().ends_with(after)
            }
        },
        SurroundStyle::Fence => {
            // A single line equal to both tokens is an unpaired fence.
            extraction.lines.len() >= 2
                && extraction.lines.first().is_some_and(|line| line == before)
                && extraction.lines.last().is_some_and(|line| line == after)
        }
        SurroundStyle::Block => {
            // All-or-nothing: one bare line forces "add" for the whole
            // rectangle, so partial toggles are never applied.
            !extraction.lines.is_empty()
                && extraction.lines.iter().all(|slice| {
                    let trimmed = slice.trim();
                    trimmed.starts_with(before)
                        && trimmed.ends_with(after)
                        && trimmed.len() >= pair.total_len()
                })
        }
    }
}
