//! Translating terminal events into game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use rolling_tictactoe::{BoardGeometry, Command, Position};

/// What a terminal event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A game command.
    Command(Command),
    /// Move the keyboard cursor to a new cell.
    MoveCursor(Position),
    /// Place at the cursor.
    PlaceAtCursor,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Right => cursor.step(0, 1),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Up => cursor.step(-1, 0),
        _ => cursor,
    }
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Command(Command::Quit))
        }
        KeyCode::Esc => Some(Action::Command(Command::Quit)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(move_cursor(cursor, code)))
        }
        KeyCode::Char(c) => Command::from_key(c).map(Action::Command),
        _ => None,
    }
}

/// Maps any terminal event to an action. Clicks outside the board and
/// unrecognized keys yield `None`.
pub fn event_action(event: &Event, cursor: Position, geometry: &BoardGeometry) -> Option<Action> {
    match event {
        Event::Key(key) => key_action(*key, cursor),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => geometry
            .position_at(mouse.column, mouse.row)
            .map(|pos| Action::Command(Command::Place(pos))),
        _ => None,
    }
}
