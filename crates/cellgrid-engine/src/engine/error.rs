//! Evaluation conditions raised by the engine.

use thiserror::Error;

/// The two ways a cell's content can fail to evaluate.
///
/// Both carry the offending raw text so a presentation layer can render a
/// message without reaching back into the grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid formula: {0}")]
    InvalidFormula(String),
}

impl EvalError {
    /// The raw cell text that triggered the condition.
    pub fn text(&self) -> &str {
        match self {
            EvalError::InvalidValue(text) | EvalError::InvalidFormula(text) => text,
        }
    }
}

pub type EvalResult<T> = std::result::Result<T, EvalError>;
