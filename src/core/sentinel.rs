//! Error sentinels shown in place of an operand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An arithmetic error, displayed as text instead of a number.
///
/// Errors never propagate out of the engine. Entering one replaces the
/// current operand with [`ErrorSentinel::message`] and the next digit or
/// backspace recovers from it.
///
/// # Example
///
/// ```rust
/// use calcflow::core::ErrorSentinel;
///
/// assert_eq!(ErrorSentinel::DivideByZero.message(), "Cannot divide by zero");
/// assert_eq!(
///     ErrorSentinel::from_text("Invalid input"),
///     Some(ErrorSentinel::InvalidInput)
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ErrorSentinel {
    /// Binary `÷` by zero, or the reciprocal of zero
    DivideByZero,
    /// Square root of a negative number
    InvalidInput,
}

impl ErrorSentinel {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DivideByZero => "Cannot divide by zero",
            Self::InvalidInput => "Invalid input",
        }
    }

    /// Recognise operand text that is one of the sentinels.
    pub fn from_text(text: &str) -> Option<Self> {
        [Self::DivideByZero, Self::InvalidInput]
            .into_iter()
            .find(|sentinel| sentinel.message() == text)
    }
}

impl fmt::Display for ErrorSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
