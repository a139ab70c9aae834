//! Secondary-display derivation.
//!
//! The trace line is computed by the reducer at the moment of a transition
//! and stored on the state; it is never rebuilt from the state afterwards.
//! It exists for visual feedback only and never feeds back into control flow.

use crate::engine::format::format_number;
use crate::engine::state::Operator;

/// Trace for a pending operator, e.g. `"5 +"`.
pub fn pending(first: f64, op: Operator) -> String {
    format!("{} {}", format_number(first), op.symbol())
}

/// Trace for a completed computation, e.g. `"5 + 3 ="`.
pub fn completed(first: f64, op: Operator, second: f64) -> String {
    format!(
        "{} {} {} =",
        format_number(first),
        op.symbol(),
        format_number(second)
    )
}

/// Trace for an immediate square root, e.g. `"√(9)"`.
pub fn square_root(operand: f64) -> String {
    format!("√({})", format_number(operand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_trace() {
        assert_eq!(pending(5.0, Operator::Add), "5 +");
        assert_eq!(pending(0.5, Operator::Multiply), "0.5 ×");
    }

    #[test]
    fn test_completed_trace() {
        assert_eq!(completed(5.0, Operator::Add, 3.0), "5 + 3 =");
        assert_eq!(completed(8.0, Operator::Subtract, 2.0), "8 − 2 =");
    }

    #[test]
    fn test_square_root_trace() {
        assert_eq!(square_root(9.0), "√(9)");
        assert_eq!(square_root(2.25), "√(2.25)");
    }

    #[test]
    fn test_operands_use_display_formatting() {
        // Trace operands go through the same rounding as the display.
        assert_eq!(completed(0.1, Operator::Add, 0.2), "0.1 + 0.2 =");
    }
}
