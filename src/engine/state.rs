//! Calculator state and binary operators.

use crate::engine::error::CalcError;

/// Text shown on the primary display when an evaluation fails.
pub const ERROR_MARKER: &str = "Error";

/// A binary operator selected from the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Symbol used in the expression trace.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division rejects a zero divisor. Power follows IEEE semantics with no
    /// domain restriction of its own, so a NaN or infinite result is reported
    /// as an error rather than returned.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Power => a.powf(b),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

/// Snapshot of the calculator between two input events.
///
/// Transitions never mutate a state in place: the reducer consumes the
/// current value and produces a fresh replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct CalcState {
    /// Primary display text: a decimal literal, or [`ERROR_MARKER`].
    pub display: String,
    /// Operand captured when an operator was chosen.
    pub first_operand: Option<f64>,
    /// Pending binary operator.
    pub operator: Option<Operator>,
    /// True right after an operator press; the next digit replaces the
    /// display instead of appending to it.
    pub waiting_for_operand: bool,
    /// Operator of the most recent completed computation (repeat-equals).
    pub last_operator: Option<Operator>,
    /// Second operand of the most recent completed computation.
    pub last_operand: Option<f64>,
    /// Expression trace shown on the secondary display.
    pub trace: String,
}

impl CalcState {
    /// The state the calculator starts in, and that `clear` returns to.
    pub fn initial() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            waiting_for_operand: false,
            last_operator: None,
            last_operand: None,
            trace: String::new(),
        }
    }

    /// The uniform error state: marker on the display, everything else reset.
    pub fn error() -> Self {
        Self {
            display: ERROR_MARKER.to_string(),
            ..Self::initial()
        }
    }

    /// Check whether the display holds the error marker.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::initial()
    }
}
