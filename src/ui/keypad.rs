//! Keypad layout and mouse hit-testing.
//!
//! Buttons carry a DOM-style `(action, value)` pair, so a click flows
//! through the button classifier exactly like a widget button press would.

/// One keypad button.
#[derive(Debug)]
pub struct Button {
    /// Label drawn inside the cell.
    pub label: &'static str,
    /// Action name handed to the button classifier.
    pub action: &'static str,
    /// Digit value for `action = "digit"` buttons.
    pub value: Option<&'static str>,
}

const fn digit(label: &'static str) -> Button {
    Button {
        label,
        action: "digit",
        value: Some(label),
    }
}

const fn named(label: &'static str, action: &'static str) -> Button {
    Button {
        label,
        action,
        value: None,
    }
}

/// Button grid, top row first.
pub static LAYOUT: [[Button; 4]; 5] = [
    [
        named("C", "clear"),
        named("√", "sqrt"),
        named("^", "power"),
        named("÷", "divide"),
    ],
    [digit("7"), digit("8"), digit("9"), named("×", "multiply")],
    [digit("4"), digit("5"), digit("6"), named("−", "subtract")],
    [digit("1"), digit("2"), digit("3"), named("+", "add")],
    [
        digit("0"),
        digit("."),
        named("⌫", "backspace"),
        named("=", "calculate"),
    ],
];

/// Terminal column of the leftmost cell.
pub const ORIGIN_X: u16 = 1;
/// Terminal row of the topmost cell.
pub const ORIGIN_Y: u16 = 4;
/// Horizontal pitch of a cell, including the gap to its neighbour.
pub const CELL_WIDTH: u16 = 6;
/// Width of the drawn `[ x ]` part of a cell.
pub const LABEL_WIDTH: u16 = 5;

/// Resolve a terminal cell to the button under it, if any.
pub fn hit_test(column: u16, row: u16) -> Option<&'static Button> {
    let dx = column.checked_sub(ORIGIN_X)?;
    let dy = row.checked_sub(ORIGIN_Y)?;
    if dx % CELL_WIDTH >= LABEL_WIDTH {
        return None;
    }
    LAYOUT.get(dy as usize)?.get((dx / CELL_WIDTH) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::classify_button;

    #[test]
    fn test_every_button_classifies() {
        for row in &LAYOUT {
            for button in row {
                assert!(
                    classify_button(button.action, button.value).is_some(),
                    "button {:?} did not classify",
                    button.label
                );
            }
        }
    }

    #[test]
    fn test_hit_test_finds_buttons() {
        // Top-left cell interior.
        assert_eq!(hit_test(ORIGIN_X, ORIGIN_Y).map(|b| b.action), Some("clear"));
        assert_eq!(
            hit_test(ORIGIN_X + 2, ORIGIN_Y).map(|b| b.action),
            Some("clear")
        );
        // Second column of the bottom row.
        assert_eq!(
            hit_test(ORIGIN_X + CELL_WIDTH, ORIGIN_Y + 4).map(|b| b.action),
            Some("digit")
        );
        // Rightmost column.
        assert_eq!(
            hit_test(ORIGIN_X + 3 * CELL_WIDTH, ORIGIN_Y + 1).map(|b| b.action),
            Some("multiply")
        );
    }

    #[test]
    fn test_hit_test_misses() {
        // Above and left of the keypad.
        assert!(hit_test(0, 0).is_none());
        assert!(hit_test(ORIGIN_X, ORIGIN_Y - 1).is_none());
        // The gap between two cells.
        assert!(hit_test(ORIGIN_X + LABEL_WIDTH, ORIGIN_Y).is_none());
        // Below the last row.
        assert!(hit_test(ORIGIN_X, ORIGIN_Y + 5).is_none());
        // Right of the last column.
        assert!(hit_test(ORIGIN_X + 4 * CELL_WIDTH, ORIGIN_Y).is_none());
    }
}
