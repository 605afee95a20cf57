//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_timeline::{Action, Position, Session};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    Cursor(Position),
    /// Hand an action to the session.
    Dispatch(Action),
    /// Leave the program.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Up => (row.saturating_sub(1), col),
        _ => (row, col),
    };
    Position::from_coords(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command.
///
/// History keys compute their target from the viewed step; the session
/// ignores targets past the newest entry.
pub fn command_for_key(key: &KeyEvent, cursor: Position, session: &Session) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let step = *session.step();
    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::Cursor(move_cursor(cursor, key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Command::Dispatch(Action::ClickCell(cursor)),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Command::Dispatch(Action::ClickCell(Position::from_index(index)?))
        }
        KeyCode::Char('r') => Command::Dispatch(Action::ToggleOrder),
        KeyCode::Char('[') | KeyCode::PageUp => Command::Dispatch(Action::JumpTo(step.saturating_sub(1))),
        KeyCode::Char(']') | KeyCode::PageDown => Command::Dispatch(Action::JumpTo(step + 1)),
        KeyCode::Home => Command::Dispatch(Action::JumpTo(0)),
        KeyCode::End => Command::Dispatch(Action::JumpTo(session.history().last_step())),
        _ => return None,
    };
    Some(command)
}
