//! Terminal rendering of the calculator state.
//!
//! Rendering is synchronous and always follows a state transition in the
//! same event-handling pass. The view only reads the state; it never feeds
//! anything back into the reducer.

use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::config::Config;
use crate::engine::CalcState;
use crate::ui::keypad::{self, LAYOUT};

/// Placeholder shown when the trace line is empty, so the layout never jumps.
const TRACE_PLACEHOLDER: &str = "\u{a0}";

/// Width of the rendered panel: four keypad columns minus the trailing gap.
const PANEL_WIDTH: usize = 23;

/// The trace line to draw: the stored trace, or the placeholder.
fn trace_line(state: &CalcState) -> &str {
    if state.trace.is_empty() {
        TRACE_PLACEHOLDER
    } else {
        &state.trace
    }
}

/// The display text clipped to the configured width.
fn clipped_display(state: &CalcState, max_chars: usize) -> String {
    state.display.chars().take(max_chars).collect()
}

/// Draw the whole calculator: trace, display, keypad, and the hint line.
pub fn render(out: &mut impl Write, state: &CalcState, config: &Config) -> Result<()> {
    queue!(out, Clear(ClearType::All))?;

    queue!(
        out,
        MoveTo(keypad::ORIGIN_X, 1),
        SetForegroundColor(Color::DarkGrey),
        Print(format!("{:>width$}", trace_line(state), width = PANEL_WIDTH)),
        ResetColor,
    )?;

    let display = clipped_display(state, config.display_width);
    queue!(out, MoveTo(keypad::ORIGIN_X, 2), SetAttribute(Attribute::Bold))?;
    if state.is_error() {
        queue!(out, SetForegroundColor(Color::Red))?;
    }
    queue!(
        out,
        Print(format!("{:>width$}", display, width = PANEL_WIDTH)),
        SetAttribute(Attribute::Reset),
        ResetColor,
    )?;

    for (row, buttons) in LAYOUT.iter().enumerate() {
        for (col, button) in buttons.iter().enumerate() {
            let x = keypad::ORIGIN_X + col as u16 * keypad::CELL_WIDTH;
            let y = keypad::ORIGIN_Y + row as u16;
            queue!(out, MoveTo(x, y), Print(format!("[ {} ]", button.label)))?;
        }
    }

    if config.show_keymap_hint {
        queue!(
            out,
            MoveTo(keypad::ORIGIN_X, keypad::ORIGIN_Y + LAYOUT.len() as u16 + 1),
            SetForegroundColor(Color::DarkGrey),
            Print("keys: 0-9 . + - * / ^  enter/= calc  s sqrt  esc clear  q quit"),
            ResetColor,
        )?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{CalcAction, CalcState, handle_action, handle_digit};

    #[test]
    fn test_trace_placeholder_when_empty() {
        let state = CalcState::initial();
        assert_eq!(trace_line(&state), TRACE_PLACEHOLDER);
    }

    #[test]
    fn test_trace_line_passthrough() {
        let mut state = CalcState::initial();
        state.trace = "5 +".to_string();
        assert_eq!(trace_line(&state), "5 +");
    }

    #[test]
    fn test_display_clipped_to_width() {
        let mut state = CalcState::initial();
        for _ in 0..20 {
            state = handle_digit(&state, '9');
        }
        assert_eq!(clipped_display(&state, 14).chars().count(), 14);
        assert_eq!(clipped_display(&state, 14), "9".repeat(14));
    }

    #[test]
    fn test_short_display_not_padded_by_clip() {
        let state = CalcState::initial();
        assert_eq!(clipped_display(&state, 14), "0");
    }

    #[test]
    fn test_render_writes_error_marker() {
        let state = handle_action(&CalcState::error(), CalcAction::Backspace);
        let mut buffer = Vec::new();
        render(&mut buffer, &state, &Config::default()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Error"));
    }
}
