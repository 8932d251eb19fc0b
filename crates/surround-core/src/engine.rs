//! Mode dispatch: the four surround operations.
//!
//! [`SurroundEngine`] wires extraction, detection, and mutation into the
//! operations a keybinding layer invokes: `bold`, `italic`, `code`, and
//! `link`. Each is an add/remove toggle over the active selection (calling
//! twice toggles twice). The engine also owns the block-mode
//! capture-before-teardown step: the true rectangle is read from the live
//! selection before anything else touches selection state, because
//! persisted marks are clamped to line length.

use crate::detect::should_remove;
use crate::error::SurroundError;
use crate::extract::{Extraction, SurroundStyle, extract};
use crate::host::{Mark, SelectionMode, SelectionState, TextBuffer};
use crate::mutate::{AppliedSelection, apply};
use surround_core_markers::MarkerPair;
use tracing::debug;

/// Outcome of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The marker pair was inserted around the selection.
    Added,
    /// The marker pair was stripped from the selection.
    Removed,
}

/// Collaborator that asks the user for a link target.
///
/// Exactly one resolution per request: a URL, or `None` when the prompt
/// was dismissed. Hosts that prompt asynchronously drive the engine once
/// their prompt resolves.
pub trait LinkPrompt {
    /// Request a URL from the user.
    fn request_url(&mut self) -> Option<String>;
}

impl<F> LinkPrompt for F
where
    F: FnMut() -> Option<String>,
{
    fn request_url(&mut self) -> Option<String> {
        self()
    }
}

/// The surround toggling engine.
///
/// One parametrized toggle pipeline; the four public operations are thin
/// configuration call sites over [`MarkerPair`] and [`SurroundStyle`].
///
/// # Example
///
/// ```rust
/// use surround_core::{MemoryBuffer, MemorySelection, Position, SurroundEngine};
///
/// let mut buffer = MemoryBuffer::new("hello world");
/// let mut selection = MemorySelection::inline(Position::new(1, 1), Position::new(1, 5));
///
/// let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
/// engine.bold().unwrap();
/// assert_eq!(buffer.text(), "**hello** world");
/// ```
pub struct SurroundEngine<'a, B, S> {
    buffer: &'a mut B,
    selection: &'a mut S,
}

impl<'a, B: TextBuffer, S: SelectionState> SurroundEngine<'a, B, S> {
    /// Create an engine over the host's buffer and selection services.
    pub fn new(buffer: &'a mut B, selection: &'a mut S) -> Self {
        Self { buffer, selection }
    }

    /// Toggle strong emphasis (`**`) around the selection.
    pub fn bold(&mut self) -> Result<Toggle, SurroundError> {
        self.toggle(MarkerPair::bold(), true)
    }

    /// Toggle emphasis (`_`) around the selection.
    pub fn italic(&mut self) -> Result<Toggle, SurroundError> {
        self.toggle(MarkerPair::italic(), true)
    }

    /// Toggle code formatting around the selection.
    ///
    /// A linewise selection becomes a fenced code block (triple-backtick
    /// lines above and below); any other selection gets an inline
    /// single-backtick surround.
    pub fn code(&mut self) -> Result<Toggle, SurroundError> {
        match self.selection.mode() {
            SelectionMode::Linewise => {
                self.toggle_styled(MarkerPair::fence(), SurroundStyle::Fence, true)
            }
            _ => self.toggle(MarkerPair::code(), true),
        }
    }

    /// Wrap the selection as a markdown link, asking `prompt` for the
    /// target.
    ///
    /// A dismissed prompt is a no-op: the buffer is untouched and
    /// [`SurroundError::PromptCancelled`] is returned. Links are never
    /// auto-removed by re-invoking this operation: the closing wrapper
    /// embeds a per-invocation target, so a stale match would be wrong.
    pub fn link(&mut self, prompt: &mut impl LinkPrompt) -> Result<Toggle, SurroundError> {
        let extraction = self.prepare()?;
        // No mutation may happen before this resolves.
        let url = prompt.request_url().ok_or(SurroundError::PromptCancelled)?;
        let pair = MarkerPair::link(&url);
        let style = style_for(extraction.mode, SurroundStyle::Inline);
        debug!(url = %url, ?style, "inserting link surround");

        let applied = apply(self.buffer, &extraction, &pair, style, false)?;
        Ok(self.finish(applied, false))
    }

    /// Toggle an arbitrary marker pair around the selection, using the
    /// shape implied by the selection mode.
    pub fn toggle(
        &mut self,
        pair: MarkerPair,
        allow_remove: bool,
    ) -> Result<Toggle, SurroundError> {
        let style = style_for(self.selection.mode(), SurroundStyle::Inline);
        self.toggle_styled(pair, style, allow_remove)
    }

    fn toggle_styled(
        &mut self,
        pair: MarkerPair,
        style: SurroundStyle,
        allow_remove: bool,
    ) -> Result<Toggle, SurroundError> {
        let extraction = self.prepare()?;
        let removing = should_remove(&extraction, &pair, style, allow_remove);
        debug!(?style, removing, opening = %pair.before, "toggling surround");

        let applied = apply(self.buffer, &extraction, &pair, style, removing)?;
        Ok(self.finish(applied, removing))
    }

    /// Capture block bounds (while the selection is still live) and
    /// extract. Read-only: any failure here leaves the buffer untouched.
    fn prepare(&mut self) -> Result<Extraction, SurroundError> {
        let block = match self.selection.mode() {
            SelectionMode::Block => Some(
                self.selection
                    .capture_block_span()
                    .ok_or(SurroundError::NoSelection)?,
            ),
            _ => None,
        };
        extract(self.buffer, self.selection, block)
    }

    fn finish(&mut self, applied: AppliedSelection, removing: bool) -> Toggle {
        self.selection.set_mark(Mark::SelectionStart, applied.start);
        self.selection.set_mark(Mark::SelectionEnd, applied.end);
        self.selection.set_cursor(applied.cursor);
        if removing { Toggle::Removed } else { Toggle::Added }
    }
}

fn style_for(mode: SelectionMode, fallback: SurroundStyle) -> SurroundStyle {
    match mode {
        SelectionMode::Block => SurroundStyle::Block,
        SelectionMode::Inline | SelectionMode::Linewise => fallback,
    }
}
