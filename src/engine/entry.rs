//! Operand entry: digits, clearing, backspace and sign changes.

use super::{CalculatorEngine, EngineState};
use crate::core::{format_number, parse_number};
use crate::input::is_digit_key;
use tracing::trace;

impl CalculatorEngine {
    pub(super) fn digit(&mut self, digit: char) {
        if !is_digit_key(digit) {
            trace!(%digit, "ignoring non-digit character");
            return;
        }

        let state = &mut self.state;
        if state.just_evaluated {
            state.current_operand = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            state.just_evaluated = false;
            return;
        }

        if state.is_error() {
            state.current_operand = "0".to_string();
            state.previous_operand.clear();
        }

        if digit == '.' && state.current_operand.contains('.') {
            return;
        }

        if state.current_operand == "0" && digit != '.' {
            state.current_operand = digit.to_string();
        } else {
            state.current_operand.push(digit);
        }
    }

    /// CE: discard the entry in progress, keep the pending expression.
    pub(super) fn clear(&mut self) {
        self.state.current_operand = "0".to_string();
        self.state.just_evaluated = false;
    }

    /// C: back to the initial state, history survives.
    pub(super) fn clear_all(&mut self) {
        let history = std::mem::take(&mut self.state.history);
        self.state = EngineState::with_history(history);
    }

    pub(super) fn backspace(&mut self) {
        let state = &mut self.state;
        let overflowed = parse_number(&state.current_operand).is_some_and(f64::is_infinite);
        if state.is_error() || overflowed {
            state.current_operand = "0".to_string();
            return;
        }

        if state.current_operand == "0" {
            return;
        }

        state.current_operand.pop();
        if state.current_operand.is_empty() || state.current_operand == "-" {
            state.current_operand = "0".to_string();
        }
    }

    pub(super) fn negate(&mut self) {
        match parse_number(&self.state.current_operand) {
            Some(value) => self.state.current_operand = format_number(-value),
            None => {
                trace!(current = %self.state.current_operand, "negate ignored");
            }
        }
    }
}
