//! Property-based tests for the evaluator and the session.
//!
//! Boards are generated freely (not only reachable ones) so the evaluator
//! is exercised on every shape it can be handed.

use proptest::prelude::*;
use tictactoe_timeline::invariants::{InvariantSet, SessionInvariants};
use tictactoe_timeline::rules::{LINES, evaluate};
use tictactoe_timeline::{Action, Board, Outcome, Player, Position, Session, Square, Transition};

prop_compose! {
    fn arbitrary_square()(variant in 0..3u8) -> Square {
        match variant {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(squares in prop::array::uniform9(arbitrary_square())) -> Board {
        Board::from(squares)
    }
}

prop_compose! {
    fn arbitrary_position()(index in 0..9usize) -> Position {
        Position::ALL[index]
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => arbitrary_position().prop_map(Action::ClickCell),
        2 => (0..12usize).prop_map(Action::JumpTo),
        1 => Just(Action::ToggleOrder),
    ]
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(board in arbitrary_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn completed_line_always_wins(board in arbitrary_board(), line in 0..8usize, x in any::<bool>()) {
        let player = if x { Player::X } else { Player::O };
        let mut board = board;
        for pos in LINES[line] {
            board.set(pos, Square::Occupied(player));
        }
        let outcome = evaluate(&board);
        prop_assert!(outcome.winner().is_some());
        prop_assert_eq!(outcome.highlight().len(), 3);
    }

    #[test]
    fn highlight_is_owned_by_winner(board in arbitrary_board()) {
        if let Outcome::Won { player, line } = evaluate(&board) {
            for pos in line {
                prop_assert_eq!(board.get(pos), Square::Occupied(player));
            }
        } else {
            prop_assert!(evaluate(&board).highlight().is_empty());
        }
    }

    #[test]
    fn draw_only_when_full(board in arbitrary_board()) {
        if evaluate(&board) == Outcome::Draw {
            prop_assert_eq!(board.occupied(), 9);
        }
    }

    #[test]
    fn invariants_hold_under_any_actions(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut session = Session::new();
        for action in actions {
            session.dispatch(action);
            prop_assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn viewed_step_always_exists(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut session = Session::new();
        for action in actions {
            session.dispatch(action);
            prop_assert!(*session.step() <= session.history().last_step());
            prop_assert!(session.history().get(*session.step()).is_some());
        }
    }

    #[test]
    fn ignored_actions_change_nothing(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut session = Session::new();
        for action in actions {
            let before = session.clone();
            if let Transition::Ignored(_) = session.dispatch(action) {
                prop_assert_eq!(&session, &before);
            }
        }
    }

    #[test]
    fn toggle_never_touches_the_game(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let mut session = Session::new();
        for action in actions {
            session.dispatch(action);
        }
        let before = session.clone();
        session.dispatch(Action::ToggleOrder);
        prop_assert_eq!(session.board(), before.board());
        prop_assert_eq!(session.step(), before.step());
        prop_assert_eq!(session.to_move(), before.to_move());
        prop_assert_eq!(session.history(), before.history());
        prop_assert_ne!(session.order(), before.order());
    }
}
