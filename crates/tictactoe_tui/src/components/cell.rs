//! A single board cell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};
use tictactoe_timeline::{Player, Square};

/// Renders one square: its mark, or blank.
///
/// Cells hold no state. Whether a click on one means anything is decided
/// by the session, never by the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWidget {
    square: Square,
    highlight: bool,
    focused: bool,
}

impl CellWidget {
    /// Creates a plain cell.
    pub fn new(square: Square) -> Self {
        Self {
            square,
            highlight: false,
            focused: false,
        }
    }

    /// Marks the cell as part of the winning line.
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Marks the cell as under the keyboard cursor.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Text drawn in the middle of the cell.
    pub fn symbol(&self) -> &'static str {
        match self.square {
            Square::Empty => " ",
            Square::Occupied(Player::X) => "X",
            Square::Occupied(Player::O) => "O",
        }
    }

    /// Style applied to the whole cell area.
    pub fn style(&self) -> Style {
        let base = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        let base = if self.highlight {
            base.bg(Color::Red).fg(Color::White)
        } else {
            base
        };

        if self.focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for CellWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        buf.set_style(area, style);

        // Mark sits on the middle row.
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        Paragraph::new(self.symbol())
            .style(style)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
