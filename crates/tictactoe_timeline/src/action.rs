//! User actions and the result of dispatching them.
//!
//! Actions are the only way a [`Session`](crate::Session) changes. Every
//! action is accepted: illegal ones are ignored, and the reason is reported
//! so callers can log it. Nothing is surfaced to the player.

use serde::{Deserialize, Serialize};

use crate::Position;

/// Something the player did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Clicked a board cell.
    #[display("click {}", _0)]
    ClickCell(Position),
    /// Clicked a move-list entry.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
    /// Clicked the reverse-order toggle.
    #[display("toggle order")]
    ToggleOrder,
}

/// Why an action left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The viewed board is already won or drawn.
    #[display("game is already over")]
    GameOver,
    /// The clicked square is occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),
    /// The requested step is past the end of the history.
    #[display("step {} is not in the history", _0)]
    StepOutOfRange(usize),
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The session changed.
    Applied,
    /// The session is unchanged.
    Ignored(Rejection),
}

impl Transition {
    /// Returns true if the session changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}
