//! Surround mutation.
//!
//! Applies the add/remove edit a toggle decided on, line by line, against
//! the host buffer. Every branch also computes the selection boundaries of
//! the edited span purely from marker lengths (no post-edit rescanning),
//! so the caller can write back marks that reselect the result.

use crate::error::SurroundError;
use crate::extract::{Extraction, SurroundStyle};
use crate::host::TextBuffer;
use crate::position::{Position, clamp_span};
use surround_core_markers::MarkerPair;
use tracing::trace;

/// Marks and cursor describing the edited span after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSelection {
    /// New start-of-selection mark.
    pub start: Position,
    /// New end-of-selection mark.
    pub end: Position,
    /// Where the cursor lands after the edit.
    pub cursor: Position,
}

/// Apply the surround edit for an extracted selection.
///
/// `removing` must be the verdict of
/// [`should_remove`](crate::detect::should_remove) for the same extraction
/// and pair; the mutator assumes detection has already vetted the text.
pub fn apply<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
    pair: &MarkerPair,
    style: SurroundStyle,
    removing: bool,
) -> Result<AppliedSelection, SurroundError> {
    match style {
        SurroundStyle::Inline => apply_inline(buffer, extraction, pair, removing),
        SurroundStyle::Fence => {
            if removing {
                remove_fence(buffer, extraction)
            } else {
                add_fence(buffer, extraction, pair)
            }
        }
        SurroundStyle::Block => apply_block(buffer, extraction, pair, removing),
    }
}

fn apply_inline<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
    pair: &MarkerPair,
    removing: bool,
) -> Result<AppliedSelection, SurroundError> {
    let start = extraction.start;
    let end = extraction.end;

    if start.line == end.line {
        return apply_inline_single(buffer, extraction, pair, removing);
    }

    if removing {
        // The opening token sits at the first non-blank byte of the first
        // line's tail; the closing token ends before the last line's
        // trailing blanks. Mirrors detection's trimming.
        let first = extraction.lines.first().cloned().unwrap_or_default();
        let blank = first.len() - first.trim_start().len();
        let open_from = start.column + blank;
        buffer.set_text(
            Position::new(start.line, open_from),
            Position::new(start.line, open_from + pair.before_len() - 1),
            &[String::new()],
        );

        let last = extraction.lines.last().cloned().unwrap_or_default();
        let blank = last.len() - last.trim_end().len();
        let close_to = end.column - blank;
        buffer.set_text(
            Position::new(end.line, close_to - pair.after_len() + 1),
            Position::new(end.line, close_to),
            &[String::new()],
        );
        trace!(start_line = start.line, end_line = end.line, "stripped multi-line surround");

        // Only the closing token shifts the end mark; the opening edit is
        // on a different line.
        let end = Position::new(end.line, end.column - pair.after_len());
        Ok(AppliedSelection { start, end, cursor: start })
    } else {
        buffer.insert_text(start, &[pair.before.clone()]);
        buffer.insert_text(
            Position::new(end.line, end.column + 1),
            &[pair.after.clone()],
        );
        trace!(start_line = start.line, end_line = end.line, "added multi-line surround");

        let end = Position::new(end.line, end.column + pair.after_len());
        Ok(AppliedSelection { start, end, cursor: start })
    }
}

fn apply_inline_single<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
    pair: &MarkerPair,
    removing: bool,
) -> Result<AppliedSelection, SurroundError> {
    let start = extraction.start;
    let end = extraction.end;

    if removing {
        let content = extraction.lines.first().cloned().unwrap_or_default();
        let stripped = content
            .strip_prefix(pair.before.as_str())
            .and_then(|c| c.strip_suffix(pair.after.as_str()))
            .unwrap_or(content.as_str())
            .to_string();
        let delta = content.len() - stripped.len();
        buffer.set_text(start, end, &[stripped]);
        trace!(line = start.line, delta, "stripped inline surround");

        let end = Position::new(end.line, end.column - delta);
        Ok(AppliedSelection { start, end, cursor: start })
    } else {
        buffer.insert_text(start, &[pair.before.clone()]);
        // The opening token shifted everything at or after `start.column`
        // right by its length.
        buffer.insert_text(
            Position::new(end.line, end.column + pair.before_len() + 1),
            &[pair.after.clone()],
        );
        trace!(line = start.line, "added inline surround");

        let end = Position::new(end.line, end.column + pair.total_len());
        Ok(AppliedSelection { start, end, cursor: start })
    }
}

fn apply_block<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
    pair: &MarkerPair,
    removing: bool,
) -> Result<AppliedSelection, SurroundError> {
    let span = extraction.block.ok_or(SurroundError::NoSelection)?;

    let mut first_from = 0;
    let mut last_to = 0;
    for line_no in span.start_line..=span.end_line {
        let line = buffer
            .get_line(line_no)
            .ok_or(SurroundError::LineOutOfRange(line_no))?;
        let (from, to) = clamp_span(&line, span.left_col, span.right_col);
        let segment = &line[from..to];

        let blank = segment.len() - segment.trim_start().len();
        let (lead, rest) = segment.split_at(blank);
        let blank = rest.len() - rest.trim_end().len();
        let (core, trail) = rest.split_at(rest.len() - blank);

        let new_segment = if removing {
            let stripped = core
                .strip_prefix(pair.before.as_str())
                .and_then(|c| c.strip_suffix(pair.after.as_str()))
                .unwrap_or(core);
            format!("{lead}{stripped}{trail}")
        } else {
            format!("{lead}{}{core}{}{trail}", pair.before, pair.after)
        };
        trace!(line = line_no, removing, "rewrote block segment");

        if line_no == span.start_line {
            first_from = from;
        }
        if line_no == span.end_line {
            last_to = from + new_segment.len();
        }

        let new_line = format!("{}{}{}", &line[..from], new_segment, &line[to..]);
        buffer.set_lines(line_no, line_no + 1, &[new_line]);
    }

    let start = Position::new(span.start_line, first_from + 1);
    let end = Position::new(span.end_line, last_to);
    Ok(AppliedSelection { start, end, cursor: start })
}

fn add_fence<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
    pair: &MarkerPair,
) -> Result<AppliedSelection, SurroundError> {
    let first = extraction.start.line;
    let last = extraction.end.line;

    buffer.set_lines(first, first, &[pair.before.clone()]);
    // Content shifted down one line; the closing fence goes below it.
    buffer.set_lines(last + 2, last + 2, &[pair.after.clone()]);
    trace!(first, last, "added fence lines");

    let start = Position::new(first, 1);
    let end = Position::new(last + 2, pair.after_len());
    Ok(AppliedSelection { start, end, cursor: start })
}

fn remove_fence<B: TextBuffer>(
    buffer: &mut B,
    extraction: &Extraction,
) -> Result<AppliedSelection, SurroundError> {
    let first = extraction.start.line;
    let last = extraction.end.line;

    // Higher line first so the second deletion's number stays valid.
    buffer.delete_line(last);
    buffer.delete_line(first);
    trace!(first, last, "removed fence lines");

    let start = Position::new(first, 1);
    let end = if last >= first + 2 {
        let line = buffer.get_line(last - 2).unwrap_or_default();
        Position::new(last - 2, line.len())
    } else {
        // Fence-only selection: nothing remains between the fences.
        start
    };
    Ok(AppliedSelection { start, end, cursor: start })
}
