//! The calculator engine: state, reducer, formatting, and expression trace.
//!
//! Everything in this module is pure and synchronous. Frontends feed
//! classified input in and project the resulting state out; no transition
//! suspends, blocks, or touches the outside world.

mod error;
mod format;
mod reducer;
mod state;
mod trace;

pub use error::CalcError;
pub use format::{format_number, parse_display};
pub use reducer::{CalcAction, CalcInput, handle_action, handle_digit, reduce};
pub use state::{CalcState, ERROR_MARKER, Operator};
