//! Screen layout and drawing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::components::{BOARD_WIDTH, BoardWidget, MoveListWidget, ToggleButton};

/// Key help shown at the bottom of the screen.
pub const HELP_TEXT: &str =
    "Click/1-9/Enter: move | [ ]: step | Home/End: first/last | Wheel: scroll | R: reverse | Q: quit";

/// Screen regions, computed the same way for drawing and for mouse hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board_panel: Rect,
    /// Inside of the board panel, where the grid is centered.
    pub board: Rect,
    /// Bordered status box.
    pub status: Rect,
    /// Reverse-order button row.
    pub toggle: Rect,
    /// Bordered move-list panel.
    pub moves_panel: Rect,
    /// Inside of the move-list panel, one row per visible entry.
    pub moves: Rect,
    /// Help bar, zero-height when hidden.
    pub help: Rect,
}

impl AppLayout {
    /// Splits `area` into the screen regions.
    pub fn compute(area: Rect, show_help: bool) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(if show_help { 3 } else { 0 }),
        ])
        .areas(area);

        let [board_panel, info] =
            Layout::horizontal([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(0)]).areas(body);

        let [status, toggle, moves_panel] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(info);

        Self {
            title,
            board_panel,
            board: Block::bordered().inner(board_panel),
            status,
            toggle,
            moves_panel,
            moves: Block::bordered().inner(moves_panel),
            help,
        }
    }
}

/// Draws the whole screen for the current state of `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = AppLayout::compute(frame.area(), *app.show_help());
    let session = app.session();
    let outcome = session.outcome();

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(title, layout.title);

    frame.render_widget(Block::bordered().title("Board"), layout.board_panel);
    frame.render_widget(
        BoardWidget::new(session.board(), outcome.highlight()).cursor(Some(*app.cursor())),
        layout.board,
    );

    let status = Paragraph::new(session.status_line())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::bordered().title("Status"));
    frame.render_widget(status, layout.status);

    frame.render_widget(ToggleButton::new(*session.order()), layout.toggle);

    let items = session.move_list();
    frame.render_widget(Block::bordered().title("Moves"), layout.moves_panel);
    frame.render_widget(
        MoveListWidget::new(&items).scroll(*app.list_scroll()),
        layout.moves,
    );

    if *app.show_help() {
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(help, layout.help);
    }
}
