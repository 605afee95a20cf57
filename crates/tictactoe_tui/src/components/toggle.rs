//! Button that reverses the move list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use tictactoe_timeline::SortOrder;

/// Label of the reverse-order button.
pub const TOGGLE_LABEL: &str = "[ Reverse history ]";

/// The reverse-order button, with the current order shown next to it.
#[derive(Debug, Clone, Copy)]
pub struct ToggleButton {
    order: SortOrder,
}

impl ToggleButton {
    /// Creates the button for the current `order`.
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Screen area that reacts to clicks.
    pub fn hit_area(area: Rect) -> Rect {
        Rect {
            width: area.width.min(TOGGLE_LABEL.len() as u16),
            height: area.height.min(1),
            ..area
        }
    }

    /// True if (`column`, `row`) is on the button.
    pub fn is_hit(area: Rect, column: u16, row: u16) -> bool {
        Self::hit_area(area).contains(ratatui::layout::Position::new(column, row))
    }
}

impl Widget for ToggleButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let order = match self.order {
            SortOrder::Ascending => " oldest first",
            SortOrder::Descending => " newest first",
        };
        Line::from(vec![
            Span::styled(
                TOGGLE_LABEL,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(order, Style::default().fg(Color::DarkGray)),
        ])
        .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_area_covers_label_only() {
        let area = Rect::new(4, 2, 40, 1);
        assert!(ToggleButton::is_hit(area, 4, 2));
        assert!(ToggleButton::is_hit(area, 4 + TOGGLE_LABEL.len() as u16 - 1, 2));
        assert!(!ToggleButton::is_hit(area, 4 + TOGGLE_LABEL.len() as u16, 2));
        assert!(!ToggleButton::is_hit(area, 4, 3));
    }
}
