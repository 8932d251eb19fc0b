//! In-memory reference host.
//!
//! A [`ropey::Rope`]-backed [`TextBuffer`] and a plain-struct
//! [`SelectionState`], implementing the host contracts well enough for
//! tests, examples, and embedding the engine without a real editor. Column
//! arguments follow the host convention: 1-indexed byte offsets that lie on
//! character boundaries.

use crate::host::{BlockSpan, Mark, SelectionMode, SelectionState, TextBuffer, TO_LINE_END};
use crate::position::Position;
use ropey::Rope;

/// Rope-backed text buffer.
///
/// Lines are addressed 1-indexed; a trailing newline in the source text
/// introduces a final empty line, matching rope semantics.
#[derive(Debug, Clone)]
pub struct MemoryBuffer {
    rope: Rope,
}

impl MemoryBuffer {
    /// Build a buffer from text.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Build a buffer from individual lines.
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::new(&lines.join("\n"))
    }

    /// Full buffer content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// All lines, without line breaks.
    pub fn lines(&self) -> Vec<String> {
        (1..=self.line_count())
            .map(|line| self.get_line(line).unwrap_or_default())
            .collect()
    }

    fn line_text(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line_idx).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    fn line_byte_len(&self, line_idx: usize) -> usize {
        self.line_text(line_idx).map(|l| l.len()).unwrap_or(0)
    }

    /// Char index of the byte addressed by `pos` (column clamped to the
    /// line length).
    fn char_at(&self, pos: Position) -> usize {
        let line_idx = pos.line.saturating_sub(1).min(self.rope.len_lines() - 1);
        let line_start = self.rope.line_to_byte(line_idx);
        let offset = pos.column.saturating_sub(1).min(self.line_byte_len(line_idx));
        self.rope.byte_to_char(line_start + offset)
    }

    /// Char index one past the byte addressed by `pos` (exclusive end of
    /// an inclusive range).
    fn char_after(&self, pos: Position) -> usize {
        let line_idx = pos.line.saturating_sub(1).min(self.rope.len_lines() - 1);
        let line_start = self.rope.line_to_byte(line_idx);
        let offset = pos.column.min(self.line_byte_len(line_idx));
        self.rope.byte_to_char(line_start + offset)
    }
}

impl TextBuffer for MemoryBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn get_line(&self, line: usize) -> Option<String> {
        if line == 0 {
            return None;
        }
        self.line_text(line - 1)
    }

    fn set_lines(&mut self, start_line: usize, end_line_exclusive: usize, replacement: &[String]) {
        let total = self.rope.len_lines();
        let start = start_line.saturating_sub(1).min(total);
        let end = end_line_exclusive.saturating_sub(1).clamp(start, total);

        let start_char = if start < total {
            self.rope.line_to_char(start)
        } else {
            self.rope.len_chars()
        };
        let end_char = if end < total {
            self.rope.line_to_char(end)
        } else {
            self.rope.len_chars()
        };
        self.rope.remove(start_char..end_char);

        if replacement.is_empty() {
            return;
        }
        let mut text = replacement.join("\n");
        if end < total {
            text.push('\n');
        } else if start >= total && self.rope.len_chars() > 0 {
            text.insert(0, '\n');
        }
        self.rope.insert(start_char, &text);
    }

    fn insert_text(&mut self, at: Position, lines: &[String]) {
        if lines.is_empty() {
            return;
        }
        let char_idx = self.char_at(at);
        self.rope.insert(char_idx, &lines.join("\n"));
    }

    fn delete_line(&mut self, line: usize) {
        let total = self.rope.len_lines();
        if line == 0 || line > total {
            return;
        }
        let idx = line - 1;
        let mut start_char = self.rope.line_to_char(idx);
        let end_char = if idx + 1 < total {
            self.rope.line_to_char(idx + 1)
        } else {
            // The last line has no trailing break; eat the preceding one.
            if start_char > 0 {
                start_char -= 1;
            }
            self.rope.len_chars()
        };
        self.rope.remove(start_char..end_char);
    }

    fn get_text(&self, start: Position, end: Position) -> Vec<String> {
        if end < start {
            return Vec::new();
        }
        if start.line == end.line {
            let line = self.get_line(start.line).unwrap_or_default();
            let from = start.column.saturating_sub(1).min(line.len());
            let to = end.column.min(line.len()).max(from);
            return vec![line[from..to].to_string()];
        }

        let mut out = Vec::with_capacity(end.line - start.line + 1);
        let first = self.get_line(start.line).unwrap_or_default();
        let from = start.column.saturating_sub(1).min(first.len());
        out.push(first[from..].to_string());
        for line in start.line + 1..end.line {
            out.push(self.get_line(line).unwrap_or_default());
        }
        let last = self.get_line(end.line).unwrap_or_default();
        let to = end.column.min(last.len());
        out.push(last[..to].to_string());
        out
    }

    fn set_text(&mut self, start: Position, end: Position, replacement: &[String]) {
        let from = self.char_at(start);
        let to = self.char_after(end).max(from);
        self.rope.remove(from..to);
        let text = replacement.join("\n");
        if !text.is_empty() {
            self.rope.insert(from, &text);
        }
    }
}

/// Plain-struct selection service.
///
/// Linewise constructors report an oversized end column and block
/// constructors persist clamp-prone corner marks, mimicking the lossy
/// representations real hosts hand out, so the engine's recomputation
/// paths are exercised.
#[derive(Debug, Clone)]
pub struct MemorySelection {
    mode: SelectionMode,
    start: Option<Position>,
    end: Option<Position>,
    block: Option<BlockSpan>,
    cursor: Position,
}

impl MemorySelection {
    /// No selection was ever made.
    pub fn empty() -> Self {
        Self {
            mode: SelectionMode::Inline,
            start: None,
            end: None,
            block: None,
            cursor: Position::new(1, 1),
        }
    }

    /// Character-granular selection between two positions (inclusive).
    pub fn inline(start: Position, end: Position) -> Self {
        Self {
            mode: SelectionMode::Inline,
            start: Some(start),
            end: Some(end),
            block: None,
            cursor: start,
        }
    }

    /// Whole-line selection over `[start_line, end_line]`.
    pub fn linewise(start_line: usize, end_line: usize) -> Self {
        Self {
            mode: SelectionMode::Linewise,
            start: Some(Position::new(start_line, 1)),
            // Hosts report an "infinite" column for line-visual selections.
            end: Some(Position::new(end_line, TO_LINE_END)),
            block: None,
            cursor: Position::new(start_line, 1),
        }
    }

    /// Rectangular selection with a live capture of its true bounds.
    pub fn block(span: BlockSpan) -> Self {
        Self {
            mode: SelectionMode::Block,
            start: Some(Position::new(span.start_line, span.left_col)),
            end: Some(Position::new(span.end_line, span.right_col)),
            block: Some(span),
            cursor: Position::new(span.start_line, span.left_col),
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Both selection marks, when present.
    pub fn marks(&self) -> Option<(Position, Position)> {
        Some((self.start?, self.end?))
    }
}

impl Default for MemorySelection {
    fn default() -> Self {
        Self::empty()
    }
}

impl SelectionState for MemorySelection {
    fn mark(&self, which: Mark) -> Option<Position> {
        match which {
            Mark::SelectionStart => self.start,
            Mark::SelectionEnd => self.end,
        }
    }

    fn set_mark(&mut self, which: Mark, pos: Position) {
        match which {
            Mark::SelectionStart => self.start = Some(pos),
            Mark::SelectionEnd => self.end = Some(pos),
        }
    }

    fn mode(&self) -> SelectionMode {
        self.mode
    }

    fn capture_block_span(&self) -> Option<BlockSpan> {
        self.block
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }
}
