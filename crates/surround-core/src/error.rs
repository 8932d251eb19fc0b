//! Error taxonomy for toggle operations.
//!
//! Every error is raised before the first buffer write, so a failed
//! operation always leaves the buffer byte-for-byte unchanged.

use crate::position::Position;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Reasons a toggle operation can abort.
pub enum SurroundError {
    #[error("no active selection")]
    /// A required selection mark (or block capture) is absent. Hosts treat
    /// this as a silent no-op: nothing was selected.
    NoSelection,

    #[error("selection start {start:?} is after end {end:?}")]
    /// The selection start mark sits after the end mark in a mode that
    /// forbids it. Hosts surface this as a non-fatal warning.
    InvalidRange {
        /// The offending start mark.
        start: Position,
        /// The offending end mark.
        end: Position,
    },

    #[error("link prompt cancelled")]
    /// The user dismissed the link URL prompt. Hosts treat this as a
    /// silent no-op.
    PromptCancelled,

    #[error("line {0} is out of range")]
    /// A mark points past the end of the buffer.
    LineOutOfRange(usize),
}
