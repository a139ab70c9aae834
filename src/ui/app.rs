//! Event loop wiring input classification, the reducer, and rendering.
//!
//! Strictly single-threaded and synchronous: each event is handled to
//! completion, ending with a re-render, before the next one is read.

use std::io;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tracing::debug;

use crate::config::Config;
use crate::engine::{CalcInput, CalcState, reduce};
use crate::input::{classify_button, classify_key};
use crate::ui::keypad;
use crate::ui::view;

/// The interactive calculator application.
pub struct App {
    state: CalcState,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            state: CalcState::initial(),
            config,
        }
    }

    /// Run until the user quits. The terminal is restored on every exit path.
    pub fn run(mut self) -> Result<()> {
        let _guard = TerminalGuard::enter()?;
        let mut out = io::stdout();
        view::render(&mut out, &self.state, &self.config)?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if is_quit(&key) {
                        break;
                    }
                    if let Some(input) = classify_key(&key) {
                        self.step(input);
                        view::render(&mut out, &self.state, &self.config)?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(input) = classify_click(&mouse) {
                        self.step(input);
                        view::render(&mut out, &self.state, &self.config)?;
                    }
                }
                Event::Resize(..) => view::render(&mut out, &self.state, &self.config)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply one classified input and replace the state wholesale.
    fn step(&mut self, input: CalcInput) {
        let next = reduce(&self.state, input);
        debug!(?input, display = %next.display, "transition");
        self.state = next;
    }
}

/// Keys that quit the application rather than reach the calculator.
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Map a left click to the button under the cursor, then classify it the
/// same way a DOM button press is classified.
fn classify_click(mouse: &MouseEvent) -> Option<CalcInput> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let button = keypad::hit_test(mouse.column, mouse.row)?;
    classify_button(button.action, button.value)
}

/// Raw-mode and alternate-screen guard; drops back to a sane terminal even
/// when the loop exits through `?`.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
