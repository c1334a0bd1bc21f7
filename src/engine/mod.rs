//! The calculator engine.
//!
//! [`CalculatorEngine`] owns one [`EngineState`] and advances it with
//! [`CalculatorEngine::apply`]. Each input is processed to completion before
//! the call returns; there is no background work and no shared state.
//!
//! The transitions are split by concern:
//! - `entry`: typing, clearing, backspace and sign changes
//! - `binary`: operator selection and `=`, including repeated equals
//! - `functions`: square, square root, reciprocal and percent

mod binary;
mod entry;
mod functions;
mod output;
mod state;

pub use functions::UnaryFunction;
pub use output::DisplayOutput;
pub use state::EngineState;

use crate::config::EngineConfig;
use crate::core::{format_number, round_result, CalculationHistory, ErrorSentinel, Phase};
use crate::input::InputEvent;
use tracing::{debug, warn};

/// Interactive calculator state machine.
///
/// # Example
///
/// ```rust
/// use calcflow::core::Operator;
/// use calcflow::engine::CalculatorEngine;
/// use calcflow::input::InputEvent;
///
/// let mut engine = CalculatorEngine::new();
/// engine.apply(InputEvent::Digit('5'));
/// engine.apply(InputEvent::Operator(Operator::Add));
/// engine.apply(InputEvent::Digit('3'));
///
/// let output = engine.apply(InputEvent::Equals);
/// assert_eq!(output.current_operand, "8");
/// assert_eq!(output.previous_label, "5 + 3 =");
/// assert_eq!(output.history, vec!["5 + 3 = 8"]);
///
/// // Pressing equals again repeats "+ 3"
/// let output = engine.apply(InputEvent::Equals);
/// assert_eq!(output.current_operand, "11");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    state: EngineState,
    decimal_places: u32,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        let history = CalculationHistory::with_capacity(config.history_capacity);
        Self::from_state(EngineState::with_history(history), config)
    }

    /// Resume from a previously taken snapshot.
    pub fn from_state(state: EngineState, config: &EngineConfig) -> Self {
        Self {
            state,
            decimal_places: config.decimal_places,
        }
    }

    /// Process one input and report what to display.
    pub fn apply(&mut self, event: InputEvent) -> DisplayOutput {
        match event {
            InputEvent::Digit(digit) => self.digit(digit),
            InputEvent::Operator(op) => self.choose_operation(op),
            InputEvent::Equals => self.compute(),
            InputEvent::Clear => self.clear(),
            InputEvent::ClearAll => self.clear_all(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::Percent => self.percent(),
            InputEvent::Reciprocal => self.apply_unary(UnaryFunction::Reciprocal),
            InputEvent::Square => self.apply_unary(UnaryFunction::Square),
            InputEvent::Sqrt => self.apply_unary(UnaryFunction::Sqrt),
            InputEvent::Negate => self.negate(),
            InputEvent::ClearHistory => self.state.history.clear(),
        }

        debug!(
            event = event.name(),
            phase = %self.phase(),
            current = %self.state.current_operand,
            previous = %self.state.previous_operand,
            "applied input"
        );
        self.output()
    }

    /// Feed a sequence of inputs, returning the output after the last one.
    pub fn apply_all<I>(&mut self, events: I) -> DisplayOutput
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.apply(event);
        }
        self.output()
    }

    /// Current display strings and history.
    pub fn output(&self) -> DisplayOutput {
        DisplayOutput::from(&self.state)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn into_state(self) -> EngineState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &CalculationHistory {
        &self.state.history
    }

    fn round(&self, value: f64) -> f64 {
        round_result(value, self.decimal_places)
    }

    /// Round a result for display, or enter the invalid-input state when
    /// it is undefined (`Infinity - Infinity`, `Infinity × 0`).
    fn settle(&mut self, value: f64, expression: &str) -> Option<String> {
        let value = self.round(value);
        if value.is_nan() {
            let sentinel = ErrorSentinel::InvalidInput;
            self.enter_error(sentinel, format!("{expression} = {sentinel}"));
            return None;
        }
        Some(format_number(value))
    }

    /// Replace the operand with an error sentinel and abandon the expression.
    fn enter_error(&mut self, sentinel: ErrorSentinel, history_line: String) {
        warn!(error = %sentinel, expression = %history_line, "calculation failed");
        self.state.current_operand = sentinel.message().to_string();
        self.state.previous_operand.clear();
        self.state.pending_operation = None;
        self.state.previous_value = None;
        self.state.just_evaluated = true;
        self.state.history.record(history_line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    #[test]
    fn new_engine_shows_zero() {
        let engine = CalculatorEngine::new();
        let output = engine.output();

        assert_eq!(output.current_operand, "0");
        assert_eq!(output.previous_label, "");
        assert!(output.history.is_empty());
        assert_eq!(output.phase, Phase::Entry);
    }

    #[test]
    fn output_label_includes_pending_operator() {
        let mut engine = CalculatorEngine::new();
        engine.apply(InputEvent::Digit('9'));
        let output = engine.apply(InputEvent::Operator(Operator::Multiply));

        assert_eq!(output.current_operand, "0");
        assert_eq!(output.previous_label, "9 ×");
    }

    #[test]
    fn configured_capacity_bounds_history() {
        let config = EngineConfig {
            history_capacity: 2,
            ..EngineConfig::default()
        };
        let mut engine = CalculatorEngine::with_config(&config);
        for _ in 0..3 {
            engine.apply(InputEvent::Digit('4'));
            engine.apply(InputEvent::Sqrt);
        }

        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn configured_precision_rounds_results() {
        let config = EngineConfig {
            decimal_places: 2,
            ..EngineConfig::default()
        };
        let mut engine = CalculatorEngine::with_config(&config);
        let output = engine.apply_all([
            InputEvent::Digit('2'),
            InputEvent::Operator(Operator::Divide),
            InputEvent::Digit('3'),
            InputEvent::Equals,
        ]);

        assert_eq!(output.current_operand, "0.67");
    }

    #[test]
    fn snapshot_resumes_session() {
        let mut engine = CalculatorEngine::new();
        engine.apply_all([
            InputEvent::Digit('1'),
            InputEvent::Digit('2'),
            InputEvent::Operator(Operator::Subtract),
            InputEvent::Digit('5'),
        ]);

        let snapshot = engine.state().clone();
        let mut resumed = CalculatorEngine::from_state(snapshot, &EngineConfig::default());
        let output = resumed.apply(InputEvent::Equals);

        assert_eq!(output.current_operand, "7");
        assert_eq!(output.history, vec!["12 - 5 = 7"]);
    }

    #[test]
    fn clear_history_empties_only_history() {
        let mut engine = CalculatorEngine::new();
        engine.apply_all([InputEvent::Digit('9'), InputEvent::Sqrt]);
        let output = engine.apply(InputEvent::ClearHistory);

        assert!(output.history.is_empty());
        assert_eq!(output.current_operand, "3");
        assert_eq!(output.previous_label, "√(9) =");
    }

    #[test]
    fn enter_error_abandons_expression() {
        let mut engine = CalculatorEngine::new();
        engine.apply_all([
            InputEvent::Digit('8'),
            InputEvent::Operator(Operator::Add),
        ]);
        engine.enter_error(ErrorSentinel::InvalidInput, "√(-1) = Invalid input".to_string());

        let state = engine.state();
        assert_eq!(state.current_operand, "Invalid input");
        assert_eq!(state.previous_operand, "");
        assert_eq!(state.pending_operation, None);
        assert_eq!(state.previous_value, None);
        assert!(state.just_evaluated);
        assert_eq!(engine.phase(), Phase::Error);
    }
}
