//! Binary operations: choosing an operator and evaluating with `=`.

use super::CalculatorEngine;
use crate::core::{format_number, parse_number, ErrorSentinel, Operator};
use tracing::trace;

impl CalculatorEngine {
    pub(super) fn choose_operation(&mut self, op: Operator) {
        if self.state.current_operand.is_empty() {
            return;
        }

        if self.state.pending_operation.is_some() {
            // Operator pressed twice without a new operand: swap it
            if self.state.current_operand == "0" {
                self.state.pending_operation = Some(op);
                return;
            }
            self.compute();
        }

        let state = &mut self.state;
        state.pending_operation = Some(op);
        state.previous_operand = match state.finalized_expression() {
            Some(expression) => expression,
            None => state.current_operand.clone(),
        };
        state.previous_value = parse_number(&state.current_operand);
        state.current_operand = "0".to_string();
        state.last_operand = None;
        state.last_operation = None;
    }

    /// Evaluate the pending operation, or repeat the last one when `=` is
    /// pressed again on a result.
    pub(super) fn compute(&mut self) {
        if self.state.just_evaluated {
            if let (Some(op), Some(right)) = (self.state.last_operation, self.state.last_operand) {
                self.repeat_last_operation(op, right);
                return;
            }
        }

        let left = self
            .state
            .previous_value
            .or_else(|| parse_number(&self.state.previous_operand));
        let right = parse_number(&self.state.current_operand);
        let (Some(left), Some(right), Some(op)) = (left, right, self.state.pending_operation)
        else {
            trace!(
                previous = %self.state.previous_operand,
                current = %self.state.current_operand,
                "equals ignored without a complete operation"
            );
            return;
        };

        let expression = format!(
            "{} {op} {}",
            self.state.previous_operand,
            format_number(right)
        );
        if op.divides_by_zero(right) {
            let sentinel = ErrorSentinel::DivideByZero;
            self.enter_error(sentinel, format!("{expression} = {sentinel}"));
            return;
        }

        let Some(result) = self.settle(op.apply(left, right), &expression) else {
            return;
        };
        let state = &mut self.state;
        state.history.record(format!("{expression} = {result}"));
        state.previous_operand = format!("{expression} =");
        state.current_operand = result;
        state.last_operand = Some(right);
        state.last_operation = Some(op);
        state.pending_operation = None;
        state.previous_value = None;
        state.just_evaluated = true;
    }

    /// Apply `op right` again with the displayed result as the left operand.
    fn repeat_last_operation(&mut self, op: Operator, right: f64) {
        let Some(left) = parse_number(&self.state.current_operand) else {
            trace!(current = %self.state.current_operand, "repeat ignored");
            return;
        };

        let expression = format!("{} {op} {}", format_number(left), format_number(right));
        if op.divides_by_zero(right) {
            let sentinel = ErrorSentinel::DivideByZero;
            self.enter_error(sentinel, format!("{expression} = {sentinel}"));
            return;
        }

        let Some(result) = self.settle(op.apply(left, right), &expression) else {
            return;
        };
        let state = &mut self.state;
        state.history.record(format!("{expression} = {result}"));
        state.previous_operand = format!("{expression} =");
        state.current_operand = result;
    }
}
