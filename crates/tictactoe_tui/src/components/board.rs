//! The 3x3 grid of cells.

use ratatui::{
    buffer::Buffer,
    layout::{self, Rect},
    style::{Color, Style},
    widgets::Widget,
};
use tictactoe_timeline::{Board, Position};

use super::{CellWidget, center_rect};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Width of the grid including separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the grid including separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Lays out nine [`CellWidget`]s in three rows of three.
///
/// Cell at row `i`, column `j` shows board index `i * 3 + j`.
#[derive(Debug, Clone, Copy)]
pub struct BoardWidget<'a> {
    board: &'a Board,
    highlight: &'a [Position],
    cursor: Option<Position>,
}

impl<'a> BoardWidget<'a> {
    /// Creates a board view that emphasizes `highlight`.
    pub fn new(board: &'a Board, highlight: &'a [Position]) -> Self {
        Self {
            board,
            highlight,
            cursor: None,
        }
    }

    /// Shows the keyboard cursor on `cursor`.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Screen rectangle of every cell, in board index order.
    ///
    /// The grid is centered in `area` and clipped to it.
    pub fn cell_areas(area: Rect) -> [Rect; 9] {
        let grid = grid_rect(area);
        Position::ALL.map(|pos| {
            let col = pos.col() as u16;
            let row = pos.row() as u16;
            Rect::new(
                grid.x + col * (CELL_WIDTH + 1),
                grid.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        })
    }

    /// The cell under screen coordinate (`column`, `row`), if any.
    pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
        let point = layout::Position::new(column, row);
        Self::cell_areas(area)
            .iter()
            .position(|cell| cell.contains(point))
            .and_then(Position::from_index)
    }
}

fn grid_rect(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = grid_rect(area);
        let line_style = Style::default().fg(Color::DarkGray);

        // Horizontal lines, then vertical lines with crossings, then cells.
        for i in 1..3u16 {
            let y = grid.y + i * (CELL_HEIGHT + 1) - 1;
            for dx in 0..BOARD_WIDTH {
                if let Some(cell) = buf.cell_mut((grid.x + dx, y))
                    && area.contains(layout::Position::new(grid.x + dx, y))
                {
                    cell.set_symbol("─").set_style(line_style);
                }
            }
        }
        for i in 1..3u16 {
            let x = grid.x + i * (CELL_WIDTH + 1) - 1;
            for dy in 0..BOARD_HEIGHT {
                let sym = if (dy + 1) % (CELL_HEIGHT + 1) == 0 { "┼" } else { "│" };
                if let Some(cell) = buf.cell_mut((x, grid.y + dy))
                    && area.contains(layout::Position::new(x, grid.y + dy))
                {
                    cell.set_symbol(sym).set_style(line_style);
                }
            }
        }

        for (pos, cell_area) in Position::ALL.into_iter().zip(Self::cell_areas(area)) {
            if cell_area.is_empty() {
                continue;
            }
            CellWidget::new(self.board.get(pos))
                .highlight(self.highlight.contains(&pos))
                .focused(self.cursor == Some(pos))
                .render(cell_area, buf);
        }
    }
}
