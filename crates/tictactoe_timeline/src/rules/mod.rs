//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board.
//! Rules are separated from board storage so the session can
//! re-derive the outcome of any history entry on demand.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board.
///
/// A completed line always wins, even on a full board. Only when no line
/// is complete does a full board count as a draw.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Won { player, line };
    }

    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
