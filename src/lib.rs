//! Keypad calculator: a pure state-transition engine with a terminal frontend.
//!
//! The [`engine`] module is a synchronous reducer over an immutable
//! [`engine::CalcState`]; [`input`] classifies raw key and button events into
//! engine messages, and [`ui`] projects the state onto the terminal.

pub mod config;
pub mod engine;
pub mod input;
pub mod ui;
