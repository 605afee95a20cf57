//! Clickable, scrollable list of history entries.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};
use tictactoe_timeline::MoveListItem;

/// Renders one row per history entry, in the order given.
///
/// Rows are numbered by display position like an ordered list. The entry
/// being viewed gets a yellow background. When the entries outnumber the
/// rows, the list scrolls: by default just far enough to keep the viewed
/// entry on screen, or to an explicit row set with [`Self::scroll`].
#[derive(Debug, Clone, Copy)]
pub struct MoveListWidget<'a> {
    items: &'a [MoveListItem],
    scroll: Option<usize>,
}

impl<'a> MoveListWidget<'a> {
    /// Creates a list over `items` that follows the viewed entry.
    pub fn new(items: &'a [MoveListItem]) -> Self {
        Self {
            items,
            scroll: None,
        }
    }

    /// Pins the first visible row; `None` follows the viewed entry.
    pub fn scroll(mut self, scroll: Option<usize>) -> Self {
        self.scroll = scroll;
        self
    }

    /// Text of the row at display position `index`.
    pub fn row_text(index: usize, item: &MoveListItem) -> String {
        format!("{:>2}. {}", index + 1, item.label())
    }

    /// Display index of the entry being viewed.
    pub fn current_index(items: &[MoveListItem]) -> Option<usize> {
        items.iter().position(|item| *item.is_current())
    }

    /// Largest useful offset for a panel `height` rows tall.
    pub fn max_offset(items: &[MoveListItem], height: u16) -> usize {
        items.len().saturating_sub(usize::from(height))
    }

    /// First visible row for a panel `height` rows tall.
    pub fn offset(items: &[MoveListItem], height: u16, scroll: Option<usize>) -> usize {
        let max = Self::max_offset(items, height);
        match scroll {
            Some(offset) => offset.min(max),
            None => Self::current_index(items)
                .map_or(0, |index| {
                    index.saturating_sub(usize::from(height).saturating_sub(1))
                })
                .min(max),
        }
    }

    /// History step of the row under (`column`, `row`), if any.
    pub fn step_at(
        area: Rect,
        items: &[MoveListItem],
        scroll: Option<usize>,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        if !area.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        let offset = Self::offset(items, area.height, scroll);
        items
            .get(offset + usize::from(row - area.y))
            .map(|item| *item.step())
    }
}

impl Widget for MoveListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if *item.is_current() {
                    Style::default().bg(Color::Yellow).fg(Color::Black)
                } else {
                    Style::default()
                };
                ListItem::new(Self::row_text(index, item)).style(style)
            })
            .collect();

        let mut state =
            ListState::default().with_offset(Self::offset(self.items, area.height, self.scroll));
        StatefulWidget::render(List::new(rows), area, buf, &mut state);
    }
}
