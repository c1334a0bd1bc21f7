//! Pure building blocks of the calculator.
//!
//! Nothing in this module holds engine state:
//! - `Operator`: the four binary operators and their keypad symbols
//! - Number text parsing, display formatting and result rounding
//! - `CalculationHistory`: the bounded most-recent-first history
//! - `ErrorSentinel` and `Phase`: error kinds and meta-states

mod history;
mod number;
mod operator;
mod phase;
mod sentinel;

pub use history::{CalculationHistory, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use number::{format_number, parse_number, round_result, DEFAULT_DECIMAL_PLACES};
pub use operator::Operator;
pub use phase::Phase;
pub use sentinel::ErrorSentinel;
