//! Undo history and command-name bookkeeping.
//!
//! # Responsibility
//! - Record every undoable mutation as one tagged action on one stack.
//! - Record command names to answer frequency queries over past commands.
//!
//! # Invariants
//! - Both sequences are most-recent-last.
//! - Reading the most recent entry never removes it; removal is a separate
//!   step so a failed inverse mutation keeps its history entry.

use crate::model::person::Person;
use serde::{Deserialize, Serialize};

/// Command name recorded for delete operations.
///
/// [`UndoHistory::count_delete_commands`] scans for this literal.
pub const DELETE_COMMAND: &str = "delete";

/// Before/after snapshot of one in-place edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    /// The person as it was before the edit.
    pub before: Person,
    /// The person that replaced it.
    pub after: Person,
}

/// One reversible store mutation.
///
/// A single tagged stack replaces per-kind parallel stacks, so the most
/// recent undoable action is always the top entry regardless of kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UndoableAction {
    /// A person was appended to the store.
    Added(Person),
    /// A person was removed from the store.
    Deleted(Person),
    /// A person was replaced in place.
    Edited(EditRecord),
}

impl UndoableAction {
    /// Short tag used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Deleted(_) => "deleted",
            Self::Edited(_) => "edited",
        }
    }
}

/// Ordered history of undoable actions plus recorded command names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoHistory {
    actions: Vec<UndoableAction>,
    commands: Vec<String>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes one undoable action, most-recent-last.
    pub fn record(&mut self, action: UndoableAction) {
        self.actions.push(action);
    }

    /// Reads the most recent action without removing it.
    ///
    /// Returns `None` on empty history; callers decide whether an undo is
    /// possible before attempting the inverse mutation.
    pub fn peek_last(&self) -> Option<&UndoableAction> {
        self.actions.last()
    }

    /// Removes and returns the most recent action.
    ///
    /// Callers must only remove after the inverse mutation succeeded, so a
    /// failed undo never loses its history entry.
    pub fn remove_last(&mut self) -> Option<UndoableAction> {
        self.actions.pop()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of recorded delete actions still on the stack.
    pub fn deleted_count(&self) -> usize {
        self.count_kind(|action| matches!(action, UndoableAction::Deleted(_)))
    }

    /// Number of recorded add actions still on the stack.
    pub fn added_count(&self) -> usize {
        self.count_kind(|action| matches!(action, UndoableAction::Added(_)))
    }

    /// Number of recorded edit actions still on the stack.
    pub fn edited_count(&self) -> usize {
        self.count_kind(|action| matches!(action, UndoableAction::Edited(_)))
    }

    fn count_kind(&self, pred: impl Fn(&UndoableAction) -> bool) -> usize {
        self.actions.iter().filter(|action| pred(action)).count()
    }

    /// Records the name of an executed undoable command.
    pub fn record_command(&mut self, name: impl Into<String>) {
        self.commands.push(name.into());
    }

    /// Reads the most recent command name without removing it.
    pub fn last_command(&self) -> Option<&str> {
        self.commands.last().map(String::as_str)
    }

    /// Removes the most recent command name.
    pub fn remove_last_command(&mut self) -> Option<String> {
        self.commands.pop()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Frequency of the literal delete command name over the FULL recorded
    /// history, not a recent window.
    pub fn count_delete_commands(&self) -> usize {
        self.commands
            .iter()
            .filter(|name| name.as_str() == DELETE_COMMAND)
            .count()
    }
}
