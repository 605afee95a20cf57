//! Move history: board snapshots with the move that produced each one.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{Board, Position};

/// A board snapshot and the move that produced it.
///
/// The initial entry has no move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Square filled by the move, `None` for the game start.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board and no move.
    pub fn start() -> Self {
        Self::new(Board::new(), None)
    }

    /// Label shown for this entry in the move list.
    pub fn label(&self, step: usize) -> String {
        match self.last_move {
            Some(pos) => format!("Go to move #{} ({}, {})", step, pos.row(), pos.col()),
            None => "Go to game start".to_string(),
        }
    }
}

/// Ordered, never-empty sequence of history entries.
///
/// Entry 0 is always the empty board. Entries are appended by moves and
/// dropped only when a move is made from an earlier step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the game start.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries, including the game start.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`, then appends `entry`.
    ///
    /// Returns the step of the appended entry.
    pub fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        self.entries.truncate(step + 1);
        self.entries.push(entry);
        self.last_step()
    }
}

#[cfg(test)]
impl History {
    /// Builds a history from raw entries, bypassing every check.
    pub(crate) fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
