//! Game outcome derived from a board.

use serde::{Deserialize, Serialize};

use crate::{Player, Position};

/// Status of a board, as decided by [`evaluate`](crate::rules::evaluate).
///
/// Outcomes are always derived from a board and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has won.
    InProgress,
    /// Board is full with no completed line.
    Draw,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The completed line, in board order.
        line: [Position; 3],
    },
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Positions to emphasize: the winning line, or nothing.
    pub fn highlight(&self) -> &[Position] {
        match self {
            Outcome::Won { line, .. } => line,
            Outcome::InProgress | Outcome::Draw => &[],
        }
    }

    /// Returns true while moves can still be made.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Status line shown above the move list.
    ///
    /// `to_move` only matters while the game is in progress.
    pub fn status_line(&self, to_move: Player) -> String {
        match self {
            Outcome::Won { player, .. } => format!("Winner: {}", player),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", to_move),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        let won = Outcome::Won {
            player: Player::O,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        assert_eq!(won.status_line(Player::X), "Winner: O");
        assert_eq!(Outcome::Draw.status_line(Player::X), "Draw");
        assert_eq!(Outcome::InProgress.status_line(Player::O), "Next player: O");
    }

    #[test]
    fn test_highlight_only_for_win() {
        assert!(Outcome::InProgress.highlight().is_empty());
        assert!(Outcome::Draw.highlight().is_empty());
        let won = Outcome::Won {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        };
        assert_eq!(
            won.highlight(),
            &[Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }
}
