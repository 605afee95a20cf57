//! Draw detection logic for tic-tac-toe.

use crate::{Board, Position};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a draw when no line is complete; see
/// [`evaluate`](super::evaluate).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    Position::valid_moves(board).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::for_step(pos.to_index())));
        }
        assert!(is_full(&board));
    }
}
