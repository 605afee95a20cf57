//! Tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: [`rules::evaluate`] maps any board to an [`Outcome`]
//! - **History**: every move appends a [`HistoryEntry`]; moving from an
//!   earlier step discards the entries after it
//! - **Session**: the single owner of game state, changed only by
//!   dispatching an [`Action`]
//! - **Invariants**: properties of a session checked after every applied
//!   action in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{Action, Position, Session, Transition};
//!
//! let mut session = Session::new();
//! assert_eq!(session.dispatch(Action::ClickCell(Position::Center)), Transition::Applied);
//! assert_eq!(session.status_line(), "Next player: O");
//!
//! // Clicking an occupied square changes nothing.
//! assert!(!session.dispatch(Action::ClickCell(Position::Center)).is_applied());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Action, Rejection, Transition};
pub use history::{History, HistoryEntry};
pub use outcome::Outcome;
pub use position::Position;
pub use session::{MoveListItem, Phase, Session, SortOrder, Viewing};
pub use types::{Board, Player, Square};
