//! Alternating turn invariant: the player to move follows step parity.

use super::Invariant;
use crate::{Player, Session};

/// Invariant: X moves on even steps, O on odd steps.
///
/// Holds whether the session got to its step by playing or by jumping.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        *session.to_move() == Player::for_step(*session.step())
    }

    fn description() -> &'static str {
        "Player to move matches the parity of the viewed step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Action, Position};

    #[test]
    fn test_holds_after_moves_and_jumps() {
        let mut session = Session::replay(&[Position::Center, Position::TopLeft, Position::TopRight]);
        assert!(AlternatingTurnInvariant::holds(&session));

        for step in [2, 0, 3, 1] {
            session.dispatch(Action::JumpTo(step));
            assert!(AlternatingTurnInvariant::holds(&session));
        }
    }

    #[test]
    fn test_wrong_player_violates() {
        let session = Session::from_parts(History::new(), 0, Player::O);
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
