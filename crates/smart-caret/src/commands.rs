//! Command Interface Layer
//!
//! Exposes the caret insertion algorithm as host-invoked commands.
//!
//! # Overview
//!
//! A host registers the two commands under their [`Command::id`] and dispatches key bindings to
//! [`CommandExecutor::execute_by_id`]. The executor reads the host's carets and tab width through
//! [`CaretHost`], runs [`plan_insertion`](crate::insert::plan_insertion), and replaces the host's
//! caret set only when a caret was actually added.
//!
//! # Example
//!
//! ```rust
//! use smart_caret::{Command, CommandExecutor, CommandResult, Document, Position};
//!
//! let mut document = Document::new("foo(bar)\nbaz(qux)");
//! document.set_carets([Position::new(0, 4)]).unwrap();
//!
//! let mut executor = CommandExecutor::new(document);
//! let result = executor.execute(Command::InsertCaretBelow).unwrap();
//!
//! assert_eq!(result, CommandResult::Inserted(Position::new(1, 4)));
//! assert_eq!(executor.host().carets(), vec![Position::new(0, 4), Position::new(1, 4)]);
//! ```

use crate::host::CaretHost;
use crate::insert::{InsertDirection, apply_insertion, plan_insertion};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selection range
///
/// Caret insertion only looks at `end`, the active position of each selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selection start position
    pub start: Position,
    /// Selection end position
    pub end: Position,
    /// Selection direction
    pub direction: SelectionDirection,
}

impl Selection {
    /// A zero-width selection (a caret) at `position`.
    pub fn caret(position: Position) -> Self {
        Self {
            start: position,
            end: position,
            direction: SelectionDirection::Forward,
        }
    }

    /// Whether this selection is zero-width.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (from start to end)
    Forward,
    /// Backward selection (from end to start)
    Backward,
}

/// Host-invoked caret commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Add a caret on the line below the bottom-most caret.
    InsertCaretBelow,
    /// Add a caret on the line above the top-most caret.
    InsertCaretAbove,
}

impl Command {
    /// Every command, in registration order.
    pub const ALL: [Command; 2] = [Command::InsertCaretBelow, Command::InsertCaretAbove];

    /// Identifier a host registers this command under.
    pub fn id(self) -> &'static str {
        match self {
            Command::InsertCaretBelow => "smart-caret.insertCaretBelow",
            Command::InsertCaretAbove => "smart-caret.insertCaretAbove",
        }
    }

    /// Direction in which the new caret is inserted.
    pub fn direction(self) -> InsertDirection {
        match self {
            Command::InsertCaretBelow => InsertDirection::Below,
            Command::InsertCaretAbove => InsertDirection::Above,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.id() == id)
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))
    }
}

/// Command execution result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// A caret was added at this position and the host's caret set was replaced.
    Inserted(Position),
    /// Nothing to do (no carets, or the adjacent line does not exist). The host was not touched.
    Unchanged,
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// No command is registered under this id
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    /// A caret refers to a line the document does not have
    #[error("Invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },
    /// A selection list must contain at least one selection
    #[error("Selection list cannot be empty")]
    EmptySelections,
}

/// Command executor
///
/// Owns the host and dispatches [`Command`]s against it.
#[derive(Debug)]
pub struct CommandExecutor<H: CaretHost> {
    host: H,
    command_history: Vec<Command>,
}

impl<H: CaretHost> CommandExecutor<H> {
    /// Create an executor driving `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            command_history: Vec::new(),
        }
    }

    /// Execute command
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        self.command_history.push(command);
        self.execute_insert(command.direction())
    }

    /// Execute the command registered under `id`.
    pub fn execute_by_id(&mut self, id: &str) -> Result<CommandResult, CommandError> {
        let command = id.parse()?;
        self.execute(command)
    }

    /// Batch execute commands, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    /// Get command history
    pub fn get_command_history(&self) -> &[Command] {
        &self.command_history
    }

    /// Get the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the executor and return the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn execute_insert(&mut self, direction: InsertDirection) -> Result<CommandResult, CommandError> {
        let selections = self.host.selections();
        let line_count = self.host.line_count();
        if let Some(stale) = selections.iter().find(|sel| sel.end.line >= line_count) {
            return Err(CommandError::InvalidPosition {
                line: stale.end.line,
                column: stale.end.column,
            });
        }

        let tab_width = self.host.tab_width();
        let Some(position) = plan_insertion(&self.host, &selections, direction, tab_width) else {
            return Ok(CommandResult::Unchanged);
        };

        self.host
            .replace_selections(apply_insertion(&selections, position));
        Ok(CommandResult::Inserted(position))
    }
}
