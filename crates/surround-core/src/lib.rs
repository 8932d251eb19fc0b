#![warn(missing_docs)]
//! Surround Core - Headless Surround-Toggling Engine
//!
//! # Overview
//!
//! `surround-core` is a headless engine that inserts or removes a pair of
//! marker strings (e.g. `**`/`**`, `_`/`_`, `` ` ``/`` ` ``, or a markdown
//! link wrapper) around a user selection, and keeps the selection marks
//! consistent so the edited span can be reselected afterward. It does not
//! own text or selection state, assuming the host editor provides both
//! behind the [`TextBuffer`] and [`SelectionState`] traits.
//!
//! # Core Features
//!
//! - **Byte-Accurate Boundaries**: positions are 1-indexed byte columns,
//!   snapped to UTF-8 character boundaries before any edit
//! - **Three Selection Shapes**: inline (mid-line), linewise (whole
//!   lines), and block (rectangular) selections
//! - **Toggle Detection**: existing markers are stripped, missing markers
//!   are added, all-or-nothing across block rectangles
//! - **Mark Consistency**: selection boundaries are recomputed purely from
//!   marker lengths after every edit
//! - **Untrusted Host Columns**: linewise sentinel columns and clamped
//!   block marks are recomputed or captured out-of-band, never trusted
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  SurroundEngine (bold/italic/code/link)     │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Extraction & Detection (read-only)         │  ← Add/Remove Decision
//! ├─────────────────────────────────────────────┤
//! │  Mutation (line-by-line splices)            │  ← Buffer Edits
//! ├─────────────────────────────────────────────┤
//! │  Byte-Boundary Resolution (UTF-8)           │  ← Position Safety
//! ├─────────────────────────────────────────────┤
//! │  TextBuffer + SelectionState traits         │  ← Host Services
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use surround_core::{MemoryBuffer, MemorySelection, Position, SurroundEngine, Toggle};
//!
//! let mut buffer = MemoryBuffer::new("toggle me please");
//! let mut selection = MemorySelection::inline(Position::new(1, 8), Position::new(1, 9));
//!
//! let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
//! assert_eq!(engine.bold().unwrap(), Toggle::Added);
//! assert_eq!(buffer.text(), "toggle **me** please");
//!
//! // The updated marks reselect the edited span, so the next call toggles
//! // the markers back off.
//! let mut engine = SurroundEngine::new(&mut buffer, &mut selection);
//! assert_eq!(engine.bold().unwrap(), Toggle::Removed);
//! assert_eq!(buffer.text(), "toggle me please");
//! ```
//!
//! # Module Description
//!
//! - [`position`] - byte-accurate positions and UTF-8 boundary resolution
//! - [`host`] - the [`TextBuffer`] and [`SelectionState`] host contracts
//! - [`extract`] - selection extraction for the three shapes
//! - [`detect`] - add/remove toggle detection
//! - [`mutate`] - the actual surround edits
//! - [`engine`] - the four operations and the link prompt collaborator
//! - [`memory`] - ropey-backed in-memory reference host
//!
//! # Error Guarantees
//!
//! Extraction and detection are read-only; mutation only begins after both
//! have succeeded. Every [`SurroundError`] therefore leaves the buffer
//! byte-for-byte unchanged, including a cancelled link prompt.

pub mod detect;
pub mod engine;
pub mod error;
pub mod extract;
pub mod host;
pub mod memory;
pub mod mutate;
pub mod position;

pub use detect::should_remove;
pub use engine::{LinkPrompt, SurroundEngine, Toggle};
pub use error::SurroundError;
pub use extract::{Extraction, SurroundStyle, extract};
pub use host::{BlockSpan, Mark, SelectionMode, SelectionState, TO_LINE_END, TextBuffer};
pub use memory::{MemoryBuffer, MemorySelection};
pub use mutate::{AppliedSelection, apply};
pub use position::{Position, character_end, clamp_span, first_byte_of, last_byte_of};
pub use surround_core_markers::MarkerPair;
