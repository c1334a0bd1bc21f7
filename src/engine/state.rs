//! The engine's complete, serializable state.

use crate::core::{CalculationHistory, ErrorSentinel, Operator, Phase};
use serde::{Deserialize, Serialize};

/// Everything the calculator remembers between inputs.
///
/// Operands are kept as display text; `previous_value` holds the numeric
/// left operand separately so that an expression label like `"√(4)"` never
/// has to be re-parsed.
///
/// Invariants maintained by the engine:
/// - `current_operand` is a numeric literal or an [`ErrorSentinel`] message
/// - `pending_operation` is set only while a right operand is awaited
/// - `previous_value` is `None` whenever `pending_operation` is `None`
///
/// The state serializes with serde, so an adapter can snapshot a session in
/// memory and rebuild it with [`crate::engine::CalculatorEngine::from_state`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Number being entered or just computed
    pub current_operand: String,
    /// Expression accumulated so far; ends with `=` once finalized
    pub previous_operand: String,
    /// Binary operator awaiting its right operand
    pub pending_operation: Option<Operator>,
    /// Numeric value of the left operand
    pub previous_value: Option<f64>,
    /// A result is on display and the next digit starts a fresh operand
    pub just_evaluated: bool,
    /// Right operand of the last binary computation, for repeated equals
    pub last_operand: Option<f64>,
    /// Operator of the last binary computation, for repeated equals
    pub last_operation: Option<Operator>,
    /// Completed calculations, newest first
    pub history: CalculationHistory,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::with_history(CalculationHistory::new())
    }
}

impl EngineState {
    /// Initial state carrying an existing history.
    pub fn with_history(history: CalculationHistory) -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            previous_value: None,
            just_evaluated: false,
            last_operand: None,
            last_operation: None,
            history,
        }
    }

    /// The sentinel on display, if any.
    pub fn error(&self) -> Option<ErrorSentinel> {
        ErrorSentinel::from_text(&self.current_operand)
    }

    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if self.just_evaluated {
            Phase::Evaluated
        } else {
            Phase::Entry
        }
    }

    /// True when `previous_operand` is a completed expression ending in `=`.
    pub fn is_finalized(&self) -> bool {
        self.previous_operand.ends_with('=')
    }

    /// The finalized expression without its trailing `=`.
    pub fn finalized_expression(&self) -> Option<String> {
        self.previous_operand
            .strip_suffix('=')
            .map(|expr| expr.trim().to_string())
    }

    /// The pending operator, when it still has a live left expression to
    /// apply to.
    pub fn live_operation(&self) -> Option<Operator> {
        self.pending_operation
            .filter(|_| !self.previous_operand.is_empty() && !self.is_finalized())
    }

    /// Text for the label above the current operand.
    pub fn previous_label(&self) -> String {
        match self.pending_operation {
            Some(op) => format!("{} {op}", self.previous_operand),
            None => self.previous_operand.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_matches_initial_display() {
        let state = EngineState::default();
        assert_eq!(state.current_operand, "0");
        assert_eq!(state.previous_operand, "");
        assert_eq!(state.pending_operation, None);
        assert_eq!(state.previous_value, None);
        assert!(!state.just_evaluated);
        assert!(state.history.is_empty());
        assert_eq!(state.phase(), Phase::Entry);
    }

    #[test]
    fn phase_reflects_fields() {
        let mut state = EngineState {
            just_evaluated: true,
            ..EngineState::default()
        };
        assert_eq!(state.phase(), Phase::Evaluated);

        state.current_operand = ErrorSentinel::InvalidInput.message().to_string();
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(state.error(), Some(ErrorSentinel::InvalidInput));
    }

    #[test]
    fn finalized_expression_strips_trailing_equals() {
        let state = EngineState {
            previous_operand: "√(4) =".to_string(),
            ..EngineState::default()
        };
        assert!(state.is_finalized());
        assert_eq!(state.finalized_expression().as_deref(), Some("√(4)"));
    }

    #[test]
    fn live_operation_requires_unfinalized_left_side() {
        let mut state = EngineState {
            previous_operand: "10".to_string(),
            pending_operation: Some(Operator::Add),
            previous_value: Some(10.0),
            ..EngineState::default()
        };
        assert_eq!(state.live_operation(), Some(Operator::Add));

        state.previous_operand = "5 + 3 =".to_string();
        assert_eq!(state.live_operation(), None);

        state.previous_operand.clear();
        assert_eq!(state.live_operation(), None);
    }

    #[test]
    fn previous_label_appends_pending_operator() {
        let mut state = EngineState {
            previous_operand: "12".to_string(),
            pending_operation: Some(Operator::Divide),
            ..EngineState::default()
        };
        assert_eq!(state.previous_label(), "12 ÷");

        state.pending_operation = None;
        assert_eq!(state.previous_label(), "12");
    }

    #[test]
    fn state_serializes_correctly() {
        let mut state = EngineState {
            current_operand: "3.5".to_string(),
            previous_operand: "7".to_string(),
            pending_operation: Some(Operator::Multiply),
            previous_value: Some(7.0),
            ..EngineState::default()
        };
        state.history.record("1 + 1 = 2");

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
