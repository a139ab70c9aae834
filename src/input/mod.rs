//! Input classification: raw UI events to calculator messages.
//!
//! Two sources feed the reducer: keypad buttons carrying an `(action, value)`
//! pair and keyboard keys. Classification is total and side-effect-free;
//! unrecognized input maps to `None`, and no classifier touches state.

mod keymap;

pub use keymap::classify_key;

use crate::engine::{CalcAction, CalcInput};

/// Classify a keypad button press carrying `(action, value)` data.
///
/// Digits arrive as `action = "digit"` with the character in `value`; named
/// actions arrive by name with no value. Anything else is ignored.
pub fn classify_button(action: &str, value: Option<&str>) -> Option<CalcInput> {
    if action == "digit" {
        let mut chars = value?.chars();
        let ch = chars.next()?;
        if chars.next().is_some() || !(ch.is_ascii_digit() || ch == '.') {
            return None;
        }
        return Some(CalcInput::Digit(ch));
    }
    action.parse::<CalcAction>().ok().map(CalcInput::Action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    #[test]
    fn test_digit_buttons() {
        assert_eq!(classify_button("digit", Some("7")), Some(CalcInput::Digit('7')));
        assert_eq!(classify_button("digit", Some("0")), Some(CalcInput::Digit('0')));
        assert_eq!(classify_button("digit", Some(".")), Some(CalcInput::Digit('.')));
    }

    #[test]
    fn test_action_buttons() {
        assert_eq!(
            classify_button("add", None),
            Some(CalcInput::Action(CalcAction::Operator(Operator::Add)))
        );
        assert_eq!(
            classify_button("power", None),
            Some(CalcInput::Action(CalcAction::Operator(Operator::Power)))
        );
        assert_eq!(
            classify_button("calculate", None),
            Some(CalcInput::Action(CalcAction::Calculate))
        );
        assert_eq!(
            classify_button("sqrt", None),
            Some(CalcInput::Action(CalcAction::Sqrt))
        );
        assert_eq!(
            classify_button("backspace", None),
            Some(CalcInput::Action(CalcAction::Backspace))
        );
        assert_eq!(
            classify_button("clear", None),
            Some(CalcInput::Action(CalcAction::Clear))
        );
    }

    #[test]
    fn test_malformed_buttons_ignored() {
        assert_eq!(classify_button("digit", None), None);
        assert_eq!(classify_button("digit", Some("")), None);
        assert_eq!(classify_button("digit", Some("12")), None);
        assert_eq!(classify_button("digit", Some("x")), None);
        assert_eq!(classify_button("frobnicate", None), None);
        assert_eq!(classify_button("", None), None);
    }
}
