//! Selection extraction.
//!
//! Converts the host's selection state (mode + marks, plus the out-of-band
//! block capture) into a normalized, byte-exact [`Extraction`]: resolved
//! start/end positions and the literal text the selection covers. Nothing
//! here mutates the buffer; extraction failures therefore always leave the
//! buffer untouched.

use crate::error::SurroundError;
use crate::host::{BlockSpan, Mark, SelectionMode, SelectionState, TextBuffer};
use crate::position::{Position, character_end, clamp_span, first_byte_of};
use tracing::trace;

/// How markers are applied to an extracted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurroundStyle {
    /// Markers hug the selected span, possibly across lines.
    Inline,
    /// Markers are standalone lines above and below the selection.
    Fence,
    /// Markers wrap the trimmed slice of every line in a rectangle.
    Block,
}

/// A normalized selection: byte-exact boundaries plus covered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Shape the selection was made in.
    pub mode: SelectionMode,
    /// Resolved start of the selection (first byte of its first character).
    pub start: Position,
    /// Resolved end of the selection (last byte of its last character).
    pub end: Position,
    /// Covered text, one element per spanned line. For block mode these
    /// are the per-line rectangle slices, not whole lines.
    pub lines: Vec<String>,
    /// The normalized rectangle the slices were cut with (block mode only).
    pub block: Option<BlockSpan>,
}

/// Extract the active selection.
///
/// `block` is the capture taken while the selection was still live; it is
/// required when the mode is [`SelectionMode::Block`] and ignored
/// otherwise. Missing marks (or a missing capture) yield
/// [`SurroundError::NoSelection`]; reversed marks in Inline/Linewise mode
/// yield [`SurroundError::InvalidRange`].
pub fn extract<B: TextBuffer, S: SelectionState>(
    buffer: &B,
    selection: &S,
    block: Option<BlockSpan>,
) -> Result<Extraction, SurroundError> {
    let mode = selection.mode();
    if mode == SelectionMode::Block {
        let span = block.ok_or(SurroundError::NoSelection)?;
        return extract_block(buffer, span);
    }

    let start = selection
        .mark(Mark::SelectionStart)
        .ok_or(SurroundError::NoSelection)?;
    let end = selection
        .mark(Mark::SelectionEnd)
        .ok_or(SurroundError::NoSelection)?;

    match mode {
        SelectionMode::Inline => extract_inline(buffer, start, end),
        SelectionMode::Linewise => extract_linewise(buffer, start, end),
        SelectionMode::Block => unreachable!("handled above"),
    }
}

fn extract_inline<B: TextBuffer>(
    buffer: &B,
    start: Position,
    end: Position,
) -> Result<Extraction, SurroundError> {
    if start > end {
        return Err(SurroundError::InvalidRange { start, end });
    }

    let first_line = buffer
        .get_line(start.line)
        .ok_or(SurroundError::LineOutOfRange(start.line))?;
    let last_line = if end.line == start.line {
        first_line.clone()
    } else {
        buffer
            .get_line(end.line)
            .ok_or(SurroundError::LineOutOfRange(end.line))?
    };

    // Boundary resolution only ever widens the span, so the mark order
    // established above still holds afterwards.
    let start = first_byte_of(&first_line, start);
    let end = character_end(&last_line, end);
    let lines = buffer.get_text(start, end);
    trace!(?start, ?end, line_count = lines.len(), "extracted inline selection");

    Ok(Extraction {
        mode: SelectionMode::Inline,
        start,
        end,
        lines,
        block: None,
    })
}

fn extract_linewise<B: TextBuffer>(
    buffer: &B,
    start: Position,
    end: Position,
) -> Result<Extraction, SurroundError> {
    if start.line > end.line {
        return Err(SurroundError::InvalidRange { start, end });
    }

    let mut lines = Vec::with_capacity(end.line - start.line + 1);
    for line in start.line..=end.line {
        lines.push(
            buffer
                .get_line(line)
                .ok_or(SurroundError::LineOutOfRange(line))?,
        );
    }

    // The reported end column is a sentinel for line-visual selections;
    // recompute the true last column from the line itself.
    let last_len = lines.last().map(|l| l.len()).unwrap_or(0);
    trace!(start_line = start.line, end_line = end.line, "extracted linewise selection");

    Ok(Extraction {
        mode: SelectionMode::Linewise,
        start: Position::new(start.line, 1),
        end: Position::new(end.line, last_len),
        lines,
        block: None,
    })
}

fn extract_block<B: TextBuffer>(
    buffer: &B,
    span: BlockSpan,
) -> Result<Extraction, SurroundError> {
    let span = span.normalized();

    let mut lines = Vec::with_capacity(span.end_line - span.start_line + 1);
    let mut first_from = 0;
    let mut last_to = 0;
    for line_no in span.start_line..=span.end_line {
        let line = buffer
            .get_line(line_no)
            .ok_or(SurroundError::LineOutOfRange(line_no))?;
        let (from, to) = clamp_span(&line, span.left_col, span.right_col);
        if line_no == span.start_line {
            first_from = from;
        }
        if line_no == span.end_line {
            last_to = to;
        }
        lines.push(line[from..to].to_string());
    }
    trace!(
        start_line = span.start_line,
        end_line = span.end_line,
        "extracted block selection"
    );

    Ok(Extraction {
        mode: SelectionMode::Block,
        start: Position::new(span.start_line, first_from + 1),
        end: Position::new(span.end_line, last_to),
        lines,
        block: Some(span),
    })
}
