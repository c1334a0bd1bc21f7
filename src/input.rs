//! Discrete input events accepted by the engine.
//!
//! A presentation layer turns clicks and key presses into [`InputEvent`]s and
//! forwards them one at a time to [`crate::engine::CalculatorEngine::apply`].

use crate::core::Operator;
use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One user action.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit `0`-`9` or the decimal point `.`
    Digit(char),
    /// A binary operator key
    Operator(Operator),
    Equals,
    /// Clear the entry in progress (CE)
    Clear,
    /// Reset everything except history (C)
    ClearAll,
    Backspace,
    Percent,
    Reciprocal,
    Square,
    Sqrt,
    Negate,
    ClearHistory,
}

impl InputEvent {
    /// Map a keyboard key name to an event.
    ///
    /// Digits, `.`, `+`, `-`, `*`, `/`, `=`, `Enter`, `Backspace` and
    /// `Escape` are recognised; every other key is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calcflow::core::Operator;
    /// use calcflow::input::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_key("7"), Some(InputEvent::Digit('7')));
    /// assert_eq!(
    ///     InputEvent::from_key("*"),
    ///     Some(InputEvent::Operator(Operator::Multiply))
    /// );
    /// assert_eq!(InputEvent::from_key("Escape"), Some(InputEvent::ClearAll));
    /// assert_eq!(InputEvent::from_key("F1"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | "=" => Some(Self::Equals),
            "Backspace" => Some(Self::Backspace),
            "Escape" => Some(Self::ClearAll),
            "+" => Some(Self::Operator(Operator::Add)),
            "-" => Some(Self::Operator(Operator::Subtract)),
            "*" => Some(Self::Operator(Operator::Multiply)),
            "/" => Some(Self::Operator(Operator::Divide)),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if is_digit_key(c) => Some(Self::Digit(c)),
                    _ => None,
                }
            }
        }
    }

    /// Short label for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::ClearAll => "ClearAll",
            Self::Backspace => "Backspace",
            Self::Percent => "Percent",
            Self::Reciprocal => "Reciprocal",
            Self::Square => "Square",
            Self::Sqrt => "Sqrt",
            Self::Negate => "Negate",
            Self::ClearHistory => "ClearHistory",
        }
    }
}

/// True for the characters a `Digit` event may carry.
pub fn is_digit_key(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Parses the keypad vocabulary: digits, operator symbols (display symbols
/// and keyboard aliases), `=`, `C`, `CE`, `<-`, `%`, `1/x`, `sqr`, `sqrt`,
/// `+/-` and `clear-history`.
impl FromStr for InputEvent {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(InputError::Empty);
        }

        let event = match token {
            "C" | "AC" => Self::ClearAll,
            "CE" => Self::Clear,
            "<-" | "⌫" => Self::Backspace,
            "%" => Self::Percent,
            "1/x" => Self::Reciprocal,
            "sqr" | "x²" => Self::Square,
            "sqrt" | "√" => Self::Sqrt,
            "+/-" | "±" => Self::Negate,
            "clear-history" => Self::ClearHistory,
            "×" => Self::Operator(Operator::Multiply),
            "÷" => Self::Operator(Operator::Divide),
            other => {
                Self::from_key(other).ok_or_else(|| InputError::UnknownInput(other.to_string()))?
            }
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_digits_map_to_digit_events() {
        for key in ["0", "5", "9", "."] {
            let c = key.chars().next().unwrap();
            assert_eq!(InputEvent::from_key(key), Some(InputEvent::Digit(c)));
        }
    }

    #[test]
    fn keyboard_operator_aliases() {
        assert_eq!(
            InputEvent::from_key("/"),
            Some(InputEvent::Operator(Operator::Divide))
        );
        assert_eq!(
            InputEvent::from_key("-"),
            Some(InputEvent::Operator(Operator::Subtract))
        );
    }

    #[test]
    fn keyboard_control_keys() {
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("="), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key("Backspace"), Some(InputEvent::Backspace));
    }

    #[test]
    fn unrecognised_keys_are_ignored() {
        assert_eq!(InputEvent::from_key("a"), None);
        assert_eq!(InputEvent::from_key("12"), None);
        assert_eq!(InputEvent::from_key(""), None);
        assert_eq!(InputEvent::from_key("Tab"), None);
    }

    #[test]
    fn parses_keypad_vocabulary() {
        assert_eq!("sqrt".parse::<InputEvent>(), Ok(InputEvent::Sqrt));
        assert_eq!("1/x".parse::<InputEvent>(), Ok(InputEvent::Reciprocal));
        assert_eq!("CE".parse::<InputEvent>(), Ok(InputEvent::Clear));
        assert_eq!("C".parse::<InputEvent>(), Ok(InputEvent::ClearAll));
        assert_eq!("±".parse::<InputEvent>(), Ok(InputEvent::Negate));
        assert_eq!(" ÷ ".parse::<InputEvent>(), Ok(InputEvent::Operator(Operator::Divide)));
        assert_eq!("3".parse::<InputEvent>(), Ok(InputEvent::Digit('3')));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(
            "sin".parse::<InputEvent>(),
            Err(InputError::UnknownInput("sin".to_string()))
        );
        assert_eq!("  ".parse::<InputEvent>(), Err(InputError::Empty));
    }
}
