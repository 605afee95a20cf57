//! Game session: owns the history and the time-travel cursor.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::action::{Action, Rejection, Transition};
use crate::history::{History, HistoryEntry};
use crate::invariants::assert_invariants;
use crate::{Board, Outcome, Player, Position, rules};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Which part of the timeline is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewing {
    /// The newest history entry.
    Latest,
    /// An earlier entry; a move from here discards everything after it.
    Past {
        /// Step being viewed.
        step: usize,
    },
}

/// Explicit state of the session: where we are plus how that board stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phase {
    /// Position in the timeline.
    pub viewing: Viewing,
    /// Outcome of the viewed board.
    pub outcome: Outcome,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct MoveListItem {
    /// History step this row jumps to.
    step: usize,
    /// Text shown on the row.
    label: String,
    /// True for the step currently viewed.
    is_current: bool,
}

/// A tic-tac-toe game with move history and time travel.
///
/// The session is the single owner of game state. It changes only through
/// [`Session::dispatch`]; everything a view needs is derived on demand.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// All boards played so far.
    history: History,
    /// Index of the viewed history entry.
    step: usize,
    /// Player placing the next mark. Always the parity of `step`.
    to_move: Player,
    /// Order of the move list.
    order: SortOrder,
}

impl Session {
    /// Creates a session at the game start.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::default())
    }

    /// Creates a session at the game start with a given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            to_move: Player::X,
            order,
        }
    }

    /// Replays clicks from a fresh session.
    ///
    /// Illegal clicks are skipped, exactly as if the player had made them.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        let mut session = Self::new();
        for pos in moves {
            session.dispatch(Action::ClickCell(*pos));
        }
        session
    }

    /// Entry currently viewed.
    pub fn current(&self) -> &HistoryEntry {
        // `step` never exceeds the last entry and the history is never empty.
        &self.history.entries()[self.step]
    }

    /// Board currently viewed.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Outcome of the viewed board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(self.board())
    }

    /// Status line for the viewed board.
    pub fn status_line(&self) -> String {
        self.outcome().status_line(self.to_move)
    }

    /// Where the session is in the timeline and how that board stands.
    pub fn phase(&self) -> Phase {
        let viewing = if self.step == self.history.last_step() {
            Viewing::Latest
        } else {
            Viewing::Past { step: self.step }
        };
        Phase {
            viewing,
            outcome: self.outcome(),
        }
    }

    /// Move-list rows in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        let items = self
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListItem {
                step,
                label: entry.label(step),
                is_current: step == self.step,
            });

        match self.order {
            SortOrder::Ascending => items.collect(),
            SortOrder::Descending => items.rev().collect(),
        }
    }

    /// Applies an action.
    ///
    /// Every action is accepted. An illegal one leaves the session untouched
    /// and reports why.
    #[instrument(skip(self), fields(step = self.step, to_move = %self.to_move))]
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = match action {
            Action::ClickCell(pos) => self.click_cell(pos),
            Action::JumpTo(step) => self.jump_to(step),
            Action::ToggleOrder => {
                self.order = self.order.toggle();
                Transition::Applied
            }
        };

        match transition {
            Transition::Applied => {
                debug!(step = self.step, to_move = %self.to_move, order = ?self.order, "Action applied");
                assert_invariants(self);
            }
            Transition::Ignored(reason) => debug!(%reason, "Action ignored"),
        }
        transition
    }

    fn click_cell(&mut self, pos: Position) -> Transition {
        let current = self.current();
        if !rules::evaluate(current.board()).is_in_progress() {
            return Transition::Ignored(Rejection::GameOver);
        }
        if !current.board().is_empty(pos) {
            return Transition::Ignored(Rejection::SquareOccupied(pos));
        }

        let board = current.board().with_mark(pos, self.to_move);
        self.step = self
            .history
            .branch(self.step, HistoryEntry::new(board, Some(pos)));
        self.to_move = self.to_move.opponent();
        if let Some(winner) = rules::evaluate(self.current().board()).winner() {
            info!(%winner, step = self.step, "Game won");
        }
        Transition::Applied
    }

    fn jump_to(&mut self, step: usize) -> Transition {
        if step > self.history.last_step() {
            return Transition::Ignored(Rejection::StepOutOfRange(step));
        }
        self.step = step;
        self.to_move = Player::for_step(step);
        Transition::Applied
    }
}

#[cfg(test)]
impl Session {
    /// Builds a session from raw parts, bypassing every check.
    pub(crate) fn from_parts(history: History, step: usize, to_move: Player) -> Self {
        Self {
            history,
            step,
            to_move,
            order: SortOrder::default(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
