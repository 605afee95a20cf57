//! Rendering tests against an in-memory terminal.

use crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    Terminal,
    backend::TestBackend,
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use tictactoe_timeline::{Action, Position};
use tictactoe_tui::components::{BoardWidget, CELL_HEIGHT, CELL_WIDTH};
use tictactoe_tui::ui::{self, AppLayout};
use tictactoe_tui::{App, UiConfig};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(app: &App) -> Buffer {
    render_sized(app, WIDTH, HEIGHT)
}

fn render_sized(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui::draw(f, app)).expect("draw");
    terminal.backend().buffer().clone()
}

fn lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
    lines(buffer).iter().any(|line| line.contains(needle))
}

fn row_of(buffer: &Buffer, needle: &str) -> Option<usize> {
    lines(buffer).iter().position(|line| line.contains(needle))
}

fn layout() -> AppLayout {
    AppLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT), true)
}

fn cell_center(pos: Position) -> (u16, u16) {
    let cell = BoardWidget::cell_areas(layout().board)[pos.to_index()];
    (cell.x + CELL_WIDTH / 2, cell.y + CELL_HEIGHT / 2)
}

#[test]
fn test_initial_screen() {
    let app = App::new(&UiConfig::default());
    let buffer = render(&app);

    assert!(screen_contains(&buffer, "Next player: X"));
    assert!(screen_contains(&buffer, "Go to game start"));
    assert!(screen_contains(&buffer, "Reverse history"));
    assert!(!screen_contains(&buffer, "Go to move #1"));
}

#[test]
fn test_move_shows_on_board_and_in_list() {
    let mut app = App::new(&UiConfig::default());
    app.dispatch(Action::ClickCell(Position::Center));
    let buffer = render(&app);

    let (x, y) = cell_center(Position::Center);
    assert_eq!(buffer[(x, y)].symbol(), "X");
    assert!(screen_contains(&buffer, "Next player: O"));
    assert!(screen_contains(&buffer, "Go to move #1 (1, 1)"));
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::new(&UiConfig::default());
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        app.dispatch(Action::ClickCell(pos));
    }
    let buffer = render(&app);

    assert!(screen_contains(&buffer, "Winner: X"));
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        let (x, y) = cell_center(pos);
        assert_eq!(buffer[(x, y)].style().bg, Some(Color::Red), "{pos} should be highlighted");
    }
    for pos in [Position::MiddleLeft, Position::Center, Position::BottomRight] {
        let (x, y) = cell_center(pos);
        assert_ne!(buffer[(x, y)].style().bg, Some(Color::Red), "{pos} should not be highlighted");
    }
}

#[test]
fn test_reverse_flips_rendered_order() {
    let mut app = App::new(&UiConfig::default());
    app.dispatch(Action::ClickCell(Position::Center));
    app.dispatch(Action::ClickCell(Position::TopLeft));

    let ascending = render(&app);
    let start = row_of(&ascending, "Go to game start").expect("start row");
    let second = row_of(&ascending, "Go to move #2").expect("second row");
    assert!(start < second);

    app.dispatch(Action::ToggleOrder);
    let descending = render(&app);
    let start = row_of(&descending, "Go to game start").expect("start row");
    let second = row_of(&descending, "Go to move #2").expect("second row");
    assert!(second < start);

    let (x, y) = cell_center(Position::Center);
    assert_eq!(descending[(x, y)].symbol(), "X");
    assert!(screen_contains(&descending, "Next player: X"));
}

#[test]
fn test_current_entry_is_highlighted() {
    let mut app = App::new(&UiConfig::default());
    app.dispatch(Action::ClickCell(Position::Center));
    app.dispatch(Action::JumpTo(0));
    let buffer = render(&app);

    let moves = layout().moves;
    let start_row = row_of(&buffer, "Go to game start").expect("start row") as u16;
    let next_row = row_of(&buffer, "Go to move #1").expect("move row") as u16;
    assert_eq!(buffer[(moves.x, start_row)].style().bg, Some(Color::Yellow));
    assert_ne!(buffer[(moves.x, next_row)].style().bg, Some(Color::Yellow));

    let (x, y) = cell_center(Position::Center);
    assert_eq!(buffer[(x, y)].symbol(), " ");
}

const DRAWN_GAME: [Position; 9] = [
    Position::TopLeft,
    Position::TopCenter,
    Position::TopRight,
    Position::Center,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
    Position::BottomLeft,
    Position::BottomRight,
];

#[test]
fn test_draw_status() {
    let mut app = App::new(&UiConfig::default());
    for pos in DRAWN_GAME {
        app.dispatch(Action::ClickCell(pos));
    }
    let buffer = render(&app);
    assert!(screen_contains(&buffer, "Draw"));
    assert!(!screen_contains(&buffer, "Winner"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = App::new(&UiConfig::default());
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).expect("terminal");
    terminal.draw(|f| ui::draw(f, &app)).expect("draw");
}

#[test]
fn test_short_terminal_scrolls_move_list() {
    const SHORT: u16 = 20;
    let area = Rect::new(0, 0, WIDTH, SHORT);
    let moves = AppLayout::compute(area, true).moves;
    assert!(usize::from(moves.height) < DRAWN_GAME.len() + 1);

    let mut app = App::new(&UiConfig::default());
    for pos in DRAWN_GAME {
        app.dispatch(Action::ClickCell(pos));
    }
    app.dispatch(Action::ToggleOrder);

    let buffer = render_sized(&app, WIDTH, SHORT);
    let latest = row_of(&buffer, "Go to move #9").expect("viewed entry stays visible") as u16;
    assert_eq!(buffer[(moves.x, latest)].style().bg, Some(Color::Yellow));
    assert!(!screen_contains(&buffer, "Go to game start"));

    let wheel = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: moves.x,
        row: moves.y,
        modifiers: KeyModifiers::NONE,
    });
    for _ in 0..DRAWN_GAME.len() {
        app.handle_event(&wheel, area);
    }
    let buffer = render_sized(&app, WIDTH, SHORT);
    let start = row_of(&buffer, "Go to game start").expect("start entry scrolled into view") as u16;
    assert_eq!(start, moves.bottom() - 1);

    app.dispatch(Action::JumpTo(0));
    let buffer = render_sized(&app, WIDTH, SHORT);
    let start = row_of(&buffer, "Go to game start").expect("viewed start entry") as u16;
    assert_eq!(buffer[(moves.x, start)].style().bg, Some(Color::Yellow));
    assert!(screen_contains(&buffer, "Next player: X"));
}
