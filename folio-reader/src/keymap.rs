//! Raw terminal events decoded into reader actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use folio_core::Direction;
use folio_input::InputEvent;

/// What the reader should do with one raw terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a navigation request to the input adapter.
    Nav(InputEvent),
    /// Redraw the current page (terminal resized).
    Redraw,
    /// Leave the reader.
    Quit,
}

/// Decode a raw terminal event, if it maps to a reader action.
pub fn decode(raw: &Event, columns: u16) -> Option<Action> {
    match raw {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => decode_mouse(mouse, columns),
        Event::Resize(_, _) => Some(Action::Redraw),
        _ => None,
    }
}

fn decode_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Nav(InputEvent::Step(Direction::Prev))),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            Some(Action::Nav(InputEvent::Step(Direction::Next)))
        }
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Nav(InputEvent::Select(0))),
        // The paginator clamps this onto the real last page.
        KeyCode::End | KeyCode::Char('G') => Some(Action::Nav(InputEvent::Select(usize::MAX))),
        KeyCode::Char(digit @ '1'..='9') => {
            Some(Action::Nav(InputEvent::Select(digit as usize - '1' as usize)))
        }
        KeyCode::Char('p') => Some(Action::Nav(InputEvent::Print)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Left half of the screen pages back, right half pages forward.
fn decode_mouse(mouse: &MouseEvent, columns: u16) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    let direction = if mouse.column < columns / 2 {
        Direction::Prev
    } else {
        Direction::Next
    };

    Some(Action::Nav(InputEvent::Step(direction)))
}
