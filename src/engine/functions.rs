//! In-place functions of the current operand: square, square root,
//! reciprocal and percent.
//!
//! Square, square root and reciprocal share one routine. Depending on what
//! precedes them, the function result is either folded into a pending binary
//! operation, wrapped around a finalized expression, or shown on its own.

use super::CalculatorEngine;
use crate::core::{format_number, parse_number, ErrorSentinel, Operator};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A function applied to the current operand.
///
/// # Example
///
/// ```rust
/// use calcflow::core::ErrorSentinel;
/// use calcflow::engine::UnaryFunction;
///
/// assert_eq!(UnaryFunction::Square.expression("4"), "sqr(4)");
/// assert_eq!(UnaryFunction::Sqrt.evaluate(9.0), 3.0);
/// assert_eq!(
///     UnaryFunction::Reciprocal.rejects(0.0),
///     Some(ErrorSentinel::DivideByZero)
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    Square,
    Sqrt,
    Reciprocal,
}

impl UnaryFunction {
    /// Prefix written before the parenthesised argument.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Square => "sqr",
            Self::Sqrt => "√",
            Self::Reciprocal => "1/",
        }
    }

    /// Expression text for this function applied to `argument`.
    pub fn expression(&self, argument: &str) -> String {
        format!("{}({argument})", self.symbol())
    }

    /// The error this function raises for `x`, if `x` is outside its domain.
    pub fn rejects(&self, x: f64) -> Option<ErrorSentinel> {
        match self {
            Self::Square => None,
            Self::Sqrt => (x < 0.0).then_some(ErrorSentinel::InvalidInput),
            Self::Reciprocal => (x == 0.0).then_some(ErrorSentinel::DivideByZero),
        }
    }

    /// Unrounded value of the function at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Square => x * x,
            Self::Sqrt => x.sqrt(),
            Self::Reciprocal => 1.0 / x,
        }
    }
}

impl CalculatorEngine {
    pub(super) fn apply_unary(&mut self, function: UnaryFunction) {
        let Some(x) = parse_number(&self.state.current_operand) else {
            trace!(
                function = function.symbol(),
                current = %self.state.current_operand,
                "function ignored"
            );
            return;
        };

        if let Some(sentinel) = function.rejects(x) {
            let expression = function.expression(&format_number(x));
            self.enter_error(sentinel, format!("{expression} = {sentinel}"));
            return;
        }

        let value = self.round(function.evaluate(x));
        let operand_expression = function.expression(&self.state.current_operand);

        if let Some(op) = self.state.live_operation() {
            self.fold_into_pending(op, operand_expression, value);
            return;
        }

        let expression = match self.state.finalized_expression() {
            Some(inner) => function.expression(&inner),
            None => operand_expression,
        };
        let result = format_number(value);
        let state = &mut self.state;
        state.history.record(format!("{expression} = {result}"));
        state.previous_operand = format!("{expression} =");
        state.current_operand = result;
        state.pending_operation = None;
        state.previous_value = None;
        state.just_evaluated = true;
    }

    /// Use a function result as the right operand of the pending operation,
    /// completing it with a single history line.
    fn fold_into_pending(&mut self, op: Operator, operand_expression: String, value: f64) {
        let Some(left) = self
            .state
            .previous_value
            .or_else(|| parse_number(&self.state.previous_operand))
        else {
            trace!(previous = %self.state.previous_operand, "fold ignored");
            return;
        };

        let expression = format!(
            "{} {op} {operand_expression}",
            self.state.previous_operand
        );
        if op.divides_by_zero(value) {
            let sentinel = ErrorSentinel::DivideByZero;
            self.enter_error(sentinel, format!("{expression} = {sentinel}"));
            return;
        }

        let Some(result) = self.settle(op.apply(left, value), &expression) else {
            return;
        };
        let state = &mut self.state;
        state.history.record(format!("{expression} = {result}"));
        state.previous_operand = expression;
        state.current_operand = result;
        state.pending_operation = None;
        state.previous_value = None;
        state.just_evaluated = true;
    }

    /// Percent of the left operand inside an expression, otherwise divide by
    /// one hundred.
    pub(super) fn percent(&mut self) {
        let Some(x) = parse_number(&self.state.current_operand) else {
            trace!(current = %self.state.current_operand, "percent ignored");
            return;
        };

        if self.state.live_operation().is_some() {
            let Some(left) = self
                .state
                .previous_value
                .or_else(|| parse_number(&self.state.previous_operand))
            else {
                trace!(previous = %self.state.previous_operand, "percent ignored");
                return;
            };

            // Only the operand changes; the pending operation proceeds with it
            let expression = format!("{}% of {}", format_number(x), format_number(left));
            let Some(result) = self.settle(left * x / 100.0, &expression) else {
                return;
            };
            self.state.history.record(format!("{expression} = {result}"));
            self.state.current_operand = result;
        } else {
            let inner = self
                .state
                .finalized_expression()
                .unwrap_or_else(|| self.state.current_operand.clone());
            let expression = format!("percent({inner})");
            let result = format_number(self.round(x / 100.0));

            let state = &mut self.state;
            state.history.record(format!("{expression} = {result}"));
            state.previous_operand = format!("{expression} =");
            state.current_operand = result;
        }

        self.state.just_evaluated = true;
    }
}
