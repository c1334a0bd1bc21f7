//! Calcflow: an interactive calculator as a pure state machine
//!
//! The engine accepts discrete user inputs (digits, operators, functions and
//! control commands) one at a time and keeps a running textual expression, the
//! operand being entered and a bounded history of completed calculations.
//! Rendering and input wiring are left to the caller, which forwards
//! [`InputEvent`]s and reads back a [`DisplayOutput`] after each one.
//!
//! # Core Concepts
//!
//! - **Operands as text**: the display string is the source of truth and is
//!   parsed on demand; results are rounded to 10 decimal places
//! - **Chained equals**: pressing `=` again repeats the last operation
//! - **In-place functions**: `sqr`, `√`, `1/x` and `%` fold into a pending
//!   operation or wrap a finished expression
//! - **Error sentinels**: failures show as text and are recovered from by
//!   typing
//!
//! # Example
//!
//! ```rust
//! use calcflow::{CalculatorEngine, InputEvent, Operator};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.apply(InputEvent::Digit('1'));
//! engine.apply(InputEvent::Digit('0'));
//! engine.apply(InputEvent::Operator(Operator::Add));
//! engine.apply(InputEvent::Digit('4'));
//!
//! let output = engine.apply(InputEvent::Square);
//! assert_eq!(output.current_operand, "26");
//! assert_eq!(output.history, vec!["10 + sqr(4) = 26"]);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod input;

// Re-export commonly used types
pub use config::EngineConfig;
pub use crate::core::{CalculationHistory, ErrorSentinel, Operator, Phase};
pub use engine::{CalculatorEngine, DisplayOutput, EngineState};
pub use error::{ConfigError, InputError};
pub use input::InputEvent;
