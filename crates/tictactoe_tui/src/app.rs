//! Controller: owns the session and turns input into actions.

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_timeline::{Action, Position, Session, Transition};
use tracing::{debug, info, instrument};

use crate::components::{BoardWidget, MoveListWidget, ToggleButton};
use crate::config::UiConfig;
use crate::input::{Command, command_for_key};
use crate::ui::AppLayout;

/// Main application state.
///
/// The session is the only game state. The cursor, move-list scroll and
/// quit flag belong to the terminal front end and never affect the game.
#[derive(Debug, Getters)]
pub struct App {
    session: Session,
    cursor: Position,
    /// First visible move-list row set by the mouse wheel; `None` follows
    /// the viewed entry.
    list_scroll: Option<usize>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application at the game start.
    #[instrument(skip(config))]
    pub fn new(config: &UiConfig) -> Self {
        info!(order = ?config.initial_order(), "Creating App");
        Self {
            session: Session::with_order(config.initial_order()),
            cursor: Position::Center,
            list_scroll: None,
            show_help: *config.show_help(),
            should_quit: false,
        }
    }

    /// Handles one terminal event against the screen `area` it was drawn in.
    ///
    /// Returns the transition if the event became a session action.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> Option<Transition> {
        let action = match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, area),
            _ => None,
        }?;
        Some(self.dispatch(action))
    }

    /// Applies a key press; returns an action for the session if any.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<Action> {
        match command_for_key(key, self.cursor, &self.session)? {
            Command::Cursor(pos) => {
                self.cursor = pos;
                None
            }
            Command::Dispatch(action) => Some(action),
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        }
    }

    /// Hit-tests a left click against the widgets laid out in `area`.
    ///
    /// The wheel scrolls the move list when the pointer is over it.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, area: Rect) -> Option<Action> {
        let layout = AppLayout::compute(area, self.show_help);
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                if layout
                    .moves_panel
                    .contains(ratatui::layout::Position::new(column, row))
                {
                    self.scroll_moves(layout.moves, mouse.kind == MouseEventKind::ScrollDown);
                }
                return None;
            }
            _ => return None,
        }

        if let Some(pos) = BoardWidget::cell_at(layout.board, column, row) {
            self.cursor = pos;
            return Some(Action::ClickCell(pos));
        }
        if ToggleButton::is_hit(layout.toggle, column, row) {
            return Some(Action::ToggleOrder);
        }
        let items = self.session.move_list();
        MoveListWidget::step_at(layout.moves, &items, self.list_scroll, column, row)
            .map(Action::JumpTo)
    }

    /// Moves the move list one row, starting from what is on screen in `moves`.
    fn scroll_moves(&mut self, moves: Rect, down: bool) {
        let items = self.session.move_list();
        let offset = MoveListWidget::offset(&items, moves.height, self.list_scroll);
        let offset = if down {
            (offset + 1).min(MoveListWidget::max_offset(&items, moves.height))
        } else {
            offset.saturating_sub(1)
        };
        debug!(offset, "Move list scrolled");
        self.list_scroll = Some(offset);
    }

    /// Hands an action to the session.
    ///
    /// An applied action hands the move list back to following the viewed
    /// entry.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = self.session.dispatch(action);
        if transition.is_applied() {
            self.list_scroll = None;
        }
        debug!(%action, ?transition, status = %self.session.status_line(), "Dispatched");
        transition
    }
}
