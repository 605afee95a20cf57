//! Monotonic history invariant: each entry extends its predecessor by its move.

use super::Invariant;
use crate::{Player, Session};

/// Invariant: entry k+1 equals entry k with the recorded move placed by
/// the player whose turn it was at step k.
///
/// Marks are never removed or overwritten along a single timeline.
pub struct MonotonicHistoryInvariant;

impl Invariant<Session> for MonotonicHistoryInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                match *after.last_move() {
                    Some(pos) => {
                        before.board().is_empty(pos)
                            && before.board().with_mark(pos, Player::for_step(step))
                                == *after.board()
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly its recorded move to the previous board"
    }
}
