//! History consistency invariant: entry k holds exactly k marks.

use super::Invariant;
use crate::Session;

/// Invariant: every entry has as many marks as its step, and the viewed
/// step exists.
///
/// Entry 0 is the empty board and each move adds exactly one mark.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        let counts_match = history
            .entries()
            .iter()
            .enumerate()
            .all(|(step, entry)| entry.board().occupied() == step);

        let start_has_no_move = history
            .get(0)
            .is_some_and(|entry| entry.last_move().is_none());

        counts_match && start_has_no_move && *session.step() < history.len()
    }

    fn description() -> &'static str {
        "Each history entry holds one mark per step and the viewed step exists"
    }
}
