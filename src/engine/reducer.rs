//! The calculator state machine.
//!
//! Every accepted input event flows through [`reduce`], which consumes the
//! current state and returns its replacement. Evaluation failures collapse
//! into the uniform error state; nothing here performs I/O.

use std::str::FromStr;

use tracing::debug;

use crate::engine::error::CalcError;
use crate::engine::format::{format_number, parse_display};
use crate::engine::state::{CalcState, Operator};
use crate::engine::trace;

/// A named, non-digit calculator action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcAction {
    Clear,
    Sqrt,
    Operator(Operator),
    Calculate,
    Backspace,
}

impl FromStr for CalcAction {
    type Err = ();

    /// Parse the action names carried by keypad buttons.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let action = match name {
            "clear" => Self::Clear,
            "sqrt" => Self::Sqrt,
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "power" => Self::Operator(Operator::Power),
            "calculate" => Self::Calculate,
            "backspace" => Self::Backspace,
            _ => return Err(()),
        };
        Ok(action)
    }
}

/// A classified input event: a digit/decimal character or a named action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcInput {
    Digit(char),
    Action(CalcAction),
}

/// Apply one classified input to the state.
pub fn reduce(state: &CalcState, input: CalcInput) -> CalcState {
    match input {
        CalcInput::Digit(ch) => handle_digit(state, ch),
        CalcInput::Action(action) => handle_action(state, action),
    }
}

/// Digit and decimal-point entry.
///
/// On the error state this behaves exactly as on the initial state: fresh
/// digit entry is one of the two ways out of an error.
pub fn handle_digit(state: &CalcState, ch: char) -> CalcState {
    let mut next = if state.is_error() {
        CalcState::initial()
    } else {
        state.clone()
    };

    if next.waiting_for_operand {
        // The display must stay a parseable literal, so a leading decimal
        // point enters as "0." rather than a bare ".".
        next.display = if ch == '.' { "0.".to_string() } else { ch.to_string() };
        next.waiting_for_operand = false;
        return next;
    }

    if ch == '.' && next.display.contains('.') {
        return next;
    }

    if next.display == "0" && ch != '.' {
        next.display = ch.to_string();
    } else {
        next.display.push(ch);
    }
    next
}

/// Named actions: the core transition table.
pub fn handle_action(state: &CalcState, action: CalcAction) -> CalcState {
    match action {
        CalcAction::Clear => CalcState::initial(),
        CalcAction::Sqrt => apply_sqrt(state).unwrap_or_else(error_state),
        CalcAction::Operator(op) => apply_operator(state, op).unwrap_or_else(error_state),
        CalcAction::Calculate => apply_calculate(state).unwrap_or_else(error_state),
        CalcAction::Backspace => handle_backspace(state),
    }
}

fn error_state(err: CalcError) -> CalcState {
    debug!(%err, "evaluation failed, entering error state");
    CalcState::error()
}

/// Immediate unary square root of the display value, no operand queueing.
fn apply_sqrt(state: &CalcState) -> Result<CalcState, CalcError> {
    let operand = parse_display(&state.display)?;
    if operand < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(CalcState {
        display: format_number(operand.sqrt()),
        trace: trace::square_root(operand),
        ..CalcState::initial()
    })
}

/// An operator press: either start a pending operation, or evaluate the one
/// already pending and chain into the new operator.
fn apply_operator(state: &CalcState, op: Operator) -> Result<CalcState, CalcError> {
    if let (Some(first), Some(pending)) = (state.first_operand, state.operator)
        && !state.waiting_for_operand
    {
        // A second operand has been entered: evaluate eagerly, then adopt
        // the new operator with the result as its first operand.
        let second = parse_display(&state.display)?;
        let value = pending.apply(first, second)?;
        return Ok(CalcState {
            display: format_number(value),
            first_operand: Some(value),
            operator: Some(op),
            waiting_for_operand: true,
            trace: trace::pending(value, op),
            ..CalcState::initial()
        });
    }

    // First press, or an operator replacing one pressed moments before.
    let first = parse_display(&state.display)?;
    Ok(CalcState {
        display: state.display.clone(),
        first_operand: Some(first),
        operator: Some(op),
        waiting_for_operand: true,
        trace: trace::pending(first, op),
        ..CalcState::initial()
    })
}

/// The `=` key: complete the pending operation, or repeat the last one.
fn apply_calculate(state: &CalcState) -> Result<CalcState, CalcError> {
    // Repeat-equals: no pending operation, but a completed one to re-apply
    // against the current display value.
    if state.first_operand.is_none()
        && let (Some(op), Some(second)) = (state.last_operator, state.last_operand)
    {
        let first = parse_display(&state.display)?;
        let value = op.apply(first, second)?;
        return Ok(CalcState {
            display: format_number(value),
            last_operator: Some(op),
            last_operand: Some(second),
            trace: trace::completed(first, op, second),
            ..CalcState::initial()
        });
    }

    if let (Some(first), Some(op)) = (state.first_operand, state.operator) {
        let second = parse_display(&state.display)?;
        let value = op.apply(first, second)?;
        return Ok(CalcState {
            display: format_number(value),
            last_operator: Some(op),
            last_operand: Some(second),
            trace: trace::completed(first, op, second),
            ..CalcState::initial()
        });
    }

    Ok(state.clone())
}

/// Strip the trailing display character. Inert while waiting for the second
/// operand and on the error state, which only `clear` or a digit may exit.
fn handle_backspace(state: &CalcState) -> CalcState {
    if state.waiting_for_operand || state.is_error() {
        return state.clone();
    }
    let mut next = state.clone();
    next.display.pop();
    // A bare minus is no more displayable than an empty string.
    if next.display.is_empty() || next.display == "-" {
        next.display = "0".to_string();
    }
    next
}
