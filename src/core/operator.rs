//! Binary operators understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four binary arithmetic operators.
///
/// Operators are displayed with the symbols a user sees on the keypad
/// (`+`, `-`, `×`, `÷`), and those symbols are what ends up in expression
/// text and history lines.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Operator;
///
/// assert_eq!(Operator::Multiply.symbol(), '×');
/// assert_eq!(Operator::from_symbol('÷'), Some(Operator::Divide));
/// assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad symbol for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Look up an operator by its keypad symbol.
    ///
    /// Only the display symbols are accepted here; keyboard aliases such as
    /// `*` and `/` are handled by [`crate::input::InputEvent::from_key`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator without rounding or zero checks.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// True when applying this operator to `right` would divide by zero.
    pub fn divides_by_zero(&self, right: f64) -> bool {
        matches!(self, Self::Divide) && right == 0.0
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    #[test]
    fn symbol_lookup_is_inverse_of_symbol() {
        for op in ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn keyboard_aliases_are_not_symbols() {
        assert_eq!(Operator::from_symbol('*'), None);
        assert_eq!(Operator::from_symbol('/'), None);
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn apply_computes_each_operator() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn only_divide_by_zero_is_flagged() {
        assert!(Operator::Divide.divides_by_zero(0.0));
        assert!(Operator::Divide.divides_by_zero(-0.0));
        assert!(!Operator::Divide.divides_by_zero(2.0));
        assert!(!Operator::Multiply.divides_by_zero(0.0));
    }

    #[test]
    fn display_uses_keypad_symbol() {
        assert_eq!(Operator::Divide.to_string(), "÷");
        assert_eq!(format!("5 {} 3", Operator::Subtract), "5 - 3");
    }

    #[test]
    fn operator_serializes_correctly() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        let deserialized: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Operator::Multiply);
    }
}
