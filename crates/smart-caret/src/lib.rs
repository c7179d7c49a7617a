#![warn(missing_docs)]
//! Smart Caret - Punctuation-Aware Multi-Caret Insertion
//!
//! # Overview
//!
//! `smart-caret` adds one caret to an existing multi-caret set, on the line above or below.
//! Instead of copying the screen column, it looks for a punctuation character next to the
//! caret (`(`, `,`, `=`, quotes, brackets, tab, ...) and puts the new caret next to the
//! *same numbered* occurrence of that character on the target line. When that does not apply it
//! aligns by visual column, expanding tabs.
//!
//! The crate is headless: the editor is reached through the [`CaretHost`] trait, and an
//! in-memory [`Document`] host is included.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands (insertCaretBelow/Above)          │  ← Host API
//! ├─────────────────────────────────────────────┤
//! │  Insertion (anchor, target line, policy)    │  ← Orchestration
//! ├──────────────┬──────────────┬───────────────┤
//! │  Trigger     │  Consistency │  Occurrence   │  ← Trigger alignment
//! ├──────────────┴──────────────┴───────────────┤
//! │  Fallback + Layout (visual columns)         │  ← Screen alignment
//! ├─────────────────────────────────────────────┤
//! │  Host traits / Document (Rope lines)        │  ← Editor state
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use smart_caret::{Command, CommandExecutor, Document, Position};
//!
//! let mut document = Document::new("call(a, b, c)\nf(x, y, z)\n");
//! document.set_carets([Position::new(0, 10)]).unwrap();
//!
//! let mut executor = CommandExecutor::new(document);
//! executor.execute(Command::InsertCaretBelow).unwrap();
//!
//! // Line 0 caret sits after the second comma, so the new one does too.
//! assert_eq!(
//!     executor.host().carets(),
//!     vec![Position::new(0, 10), Position::new(1, 7)]
//! );
//! ```
//!
//! # Module Description
//!
//! - [`trigger`] - trigger adjacency matching
//! - [`consistency`] - cross-caret check of a trigger match
//! - [`occurrence`] - occurrence correspondence between lines
//! - [`fallback`] - visual-column alignment
//! - [`layout`] - visual column conversion (tabs, wide characters)
//! - [`insert`] - insertion policy
//! - [`commands`] - host-invoked commands
//! - [`host`] - host capability traits
//! - [`document`] - in-memory host
//! - [`config`] - editor options

pub mod commands;
pub mod config;
pub mod consistency;
pub mod document;
pub mod fallback;
pub mod host;
pub mod insert;
pub mod layout;
pub mod line_index;
pub mod occurrence;
mod selection_set;
mod text;
pub mod trigger;

pub use commands::{
    Command, CommandError, CommandExecutor, CommandResult, Position, Selection,
    SelectionDirection,
};
pub use config::{ConfigError, EditorOptions};
pub use document::{Document, SelectionChange, SelectionChangeCallback};
pub use host::{CaretHost, LineSource};
pub use insert::{InsertDirection, insert_caret, plan_insertion};
pub use layout::DEFAULT_TAB_WIDTH;
pub use line_index::LineIndex;
pub use trigger::{TRIGGER_CHARS, TriggerMatch, match_trigger};
