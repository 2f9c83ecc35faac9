//! cellgrid-core - UI-agnostic sheet model, display adapter and configuration.

pub mod config;
pub mod document;
pub mod error;

pub use config::{Config, load_config};
pub use document::{MessageSink, Sheet, TableAdapter};
pub use error::{CellgridError, Result};

pub use cellgrid_engine::engine::{CellRef, EmptyCellPolicy, EvalError};
