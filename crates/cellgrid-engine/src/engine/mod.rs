//! Spreadsheet engine API.
//!
//! - [`Cell`], [`CellContent`], [`Grid`] - Cell storage and grid recalculation
//! - [`CellRef`], [`parse_reference`] - Cell addresses and formula reference parsing
//! - [`parse_value`] - Literal value validation
//! - [`ResolutionChain`] - Cycle detection while following references
//! - [`format_number`] - Canonical decimal text for resolved values

mod cell;
mod cell_ref;
mod cycle;
mod error;
mod format;
mod grid;
mod options;
mod value;

pub use cell::{Cell, CellContent};
pub use cell_ref::{COLS, CellRef, FORMULA_SENTINEL, ROWS, parse_reference};
pub use cycle::ResolutionChain;
pub use error::{EvalError, EvalResult};
pub use format::format_number;
pub use grid::Grid;
pub use options::{EmptyCellPolicy, EvalOptions};
pub use value::parse_value;
