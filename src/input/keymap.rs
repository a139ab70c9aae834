//! Keyboard mapping for the terminal frontend.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::engine::{CalcAction, CalcInput, Operator};

/// Map a key event to a calculator input.
///
/// Returns `None` for keys the calculator does not know. Quit handling
/// happens in the event loop before classification; it is an application
/// concern, not a calculator action.
pub fn classify_key(key: &KeyEvent) -> Option<CalcInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let action = match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => {
            return Some(CalcInput::Digit(ch));
        }
        KeyCode::Char('+') => CalcAction::Operator(Operator::Add),
        KeyCode::Char('-') => CalcAction::Operator(Operator::Subtract),
        KeyCode::Char('*') => CalcAction::Operator(Operator::Multiply),
        KeyCode::Char('/') => CalcAction::Operator(Operator::Divide),
        KeyCode::Char('^') => CalcAction::Operator(Operator::Power),
        KeyCode::Char('=') | KeyCode::Enter => CalcAction::Calculate,
        KeyCode::Char('s') => CalcAction::Sqrt,
        KeyCode::Backspace => CalcAction::Backspace,
        KeyCode::Esc => CalcAction::Clear,
        _ => return None,
    };
    Some(CalcInput::Action(action))
}
