//! Stateless widgets.
//!
//! Every widget is a pure function of the values handed to it. Hit-testing
//! helpers live next to each widget and use the same geometry it draws with,
//! so a click always lands on what is on screen.

mod board;
mod cell;
mod move_list;
mod toggle;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardWidget, CELL_HEIGHT, CELL_WIDTH};
pub use cell::CellWidget;
pub use move_list::MoveListWidget;
pub use toggle::{TOGGLE_LABEL, ToggleButton};

use ratatui::layout::{Constraint, Layout, Rect};

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, centered, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(column);

    centered
}
