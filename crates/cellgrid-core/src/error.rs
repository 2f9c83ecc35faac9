//! Error types for Cellgrid core.

use std::path::PathBuf;

use cellgrid_engine::engine::EvalError;
use thiserror::Error;

/// Errors surfaced by the sheet and its configuration.
#[derive(Error, Debug)]
pub enum CellgridError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Cell out of bounds: row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },

    #[error("No cell selected")]
    NoSelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", .path.display())]
    ConfigTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl CellgridError {
    /// The evaluation condition behind this error, if any.
    pub fn as_eval(&self) -> Option<&EvalError> {
        match self {
            CellgridError::Eval(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CellgridError>;
