//! Evaluation failures surfaced on the display.

use thiserror::Error;

/// Everything that can go wrong while evaluating a calculator operation.
///
/// All variants are recovered locally by the reducer: the display shows the
/// error marker and every other field resets. Nothing propagates past the
/// engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative number")]
    NegativeSquareRoot,
    #[error("display text does not parse as a number")]
    InvalidNumericParse,
    #[error("result is not a finite number")]
    NonFiniteResult,
}
