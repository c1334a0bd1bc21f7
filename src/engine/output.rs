//! What the presentation layer reads after every input.

use crate::core::Phase;
use crate::engine::state::EngineState;
use serde::{Deserialize, Serialize};

/// Display strings and history produced by each call to
/// [`crate::engine::CalculatorEngine::apply`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayOutput {
    /// Main display: the operand or an error sentinel
    pub current_operand: String,
    /// Smaller label above it: the expression so far and any pending operator
    pub previous_label: String,
    /// Completed calculations, newest first
    pub history: Vec<String>,
    /// Meta-state behind the display
    pub phase: Phase,
}

impl From<&EngineState> for DisplayOutput {
    fn from(state: &EngineState) -> Self {
        Self {
            current_operand: state.current_operand.clone(),
            previous_label: state.previous_label(),
            history: state.history.lines(),
            phase: state.phase(),
        }
    }
}
