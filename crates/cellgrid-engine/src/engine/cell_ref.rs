//! Cell reference parsing and formatting.
//!
//! Cells are addressed the way the grid prints its headers: a single column
//! letter `A`..`K` followed by the row label `0`..`9`. A formula is the `=`
//! sentinel followed by exactly one such address.
//!
//! # Examples
//!
//! ```ignore
//! let cell = CellRef::from_label("B3").unwrap();
//! assert_eq!(cell.col, 1);
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::error::{EvalError, EvalResult};

/// Number of rows in every grid.
pub const ROWS: usize = 10;
/// Number of columns in every grid.
pub const COLS: usize = 11;

/// Marks raw cell content as a formula.
pub const FORMULA_SENTINEL: char = '=';

const COLUMN_LABELS: [&str; COLS] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"];

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Whether both coordinates fall inside the grid.
    pub fn in_bounds(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Row-major position of this cell, or None when out of bounds.
    pub(crate) fn index(&self) -> Option<usize> {
        self.in_bounds().then_some(self.row * COLS + self.col)
    }

    /// Parse a bare address such as `"C7"`.
    /// Returns None unless the column letter and row label both exist in the grid.
    pub fn from_label(label: &str) -> Option<CellRef> {
        let caps = label_re().captures(label)?;
        let col = column_index(&caps["letter"])?;
        let row = row_index(&caps["number"])?;
        Some(CellRef::new(col, row))
    }

    /// Convert a column index to its header letter (0 -> A, 10 -> K).
    pub fn col_to_letter(col: usize) -> Option<&'static str> {
        COLUMN_LABELS.get(col).copied()
    }
}

/// Parse formula text (`=` followed by one address) into its target cell.
///
/// Syntax and bounds are checked together: any deviation, whichever check
/// notices it first, is reported as [`EvalError::InvalidFormula`] carrying the
/// whole formula text.
pub fn parse_reference(formula: &str) -> EvalResult<CellRef> {
    formula
        .strip_prefix(FORMULA_SENTINEL)
        .and_then(CellRef::from_label)
        .ok_or_else(|| EvalError::InvalidFormula(formula.to_string()))
}

fn label_re() -> &'static Regex {
    static LABEL_RE: OnceLock<Regex> = OnceLock::new();
    LABEL_RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Z])(?<number>[0-9]{1,2})$")
            .expect("cell label regex must compile")
    })
}

fn column_index(letter: &str) -> Option<usize> {
    COLUMN_LABELS.iter().position(|label| *label == letter)
}

/// Row labels are matched literally, so `"01"` is not row 1.
fn row_index(number: &str) -> Option<usize> {
    let row = number.parse::<usize>().ok()?;
    (row < ROWS && row.to_string() == number).then_some(row)
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CellRef::col_to_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "#{}{}", self.col, self.row),
        }
    }
}
