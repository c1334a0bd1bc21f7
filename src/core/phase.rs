//! Meta-state of the calculator.
//!
//! The engine's fields fully determine which phase it is in; `Phase` is a
//! read-only summary used for logging and by adapters that style the display
//! differently while a result or an error is shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the calculator's meta-states the engine is in.
///
/// - `Entry`: the user is typing the current operand
/// - `Evaluated`: a result is on display and the next digit starts fresh
/// - `Error`: an error sentinel is on display
///
/// # Example
///
/// ```rust
/// use calcflow::core::Phase;
///
/// assert_eq!(Phase::Evaluated.name(), "Evaluated");
/// assert!(Phase::Error.is_error());
/// assert!(Phase::Error.shows_result());
/// assert!(!Phase::Entry.shows_result());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    Entry,
    Evaluated,
    Error,
}

impl Phase {
    /// Name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Evaluated => "Evaluated",
            Self::Error => "Error",
        }
    }

    /// True while an error sentinel is displayed.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// True when the display holds an outcome rather than user input.
    ///
    /// Errors count as outcomes: typing a digit replaces them.
    pub fn shows_result(&self) -> bool {
        matches!(self, Self::Evaluated | Self::Error)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_name_returns_correct_value() {
        assert_eq!(Phase::Entry.name(), "Entry");
        assert_eq!(Phase::Evaluated.name(), "Evaluated");
        assert_eq!(Phase::Error.name(), "Error");
    }

    #[test]
    fn is_error_identifies_error_phase() {
        assert!(!Phase::Entry.is_error());
        assert!(!Phase::Evaluated.is_error());
        assert!(Phase::Error.is_error());
    }

    #[test]
    fn phase_serializes_correctly() {
        let json = serde_json::to_string(&Phase::Evaluated).unwrap();
        let deserialized: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Phase::Evaluated);
    }
}
