//! Cell data structures.
//!
//! - [`CellContent`] - How a cell's raw text is interpreted (empty, literal, formula)
//! - [`Cell`] - Raw text plus the value cached by the last successful recalculation

use serde::{Deserialize, Serialize};

use super::cell_ref::{FORMULA_SENTINEL, parse_reference};
use super::cycle::ResolutionChain;
use super::error::{EvalError, EvalResult};
use super::options::{EmptyCellPolicy, EvalOptions};
use super::value::parse_value;
use super::{CellRef, Grid};

/// Interpretation of a cell's raw text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellContent<'a> {
    Empty,
    Literal(&'a str),
    Formula(&'a str),
}

/// One link of a resolution chain.
enum Step {
    Value(f64),
    Follow(CellRef),
}

/// A cell in the grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    raw: String,
    /// Value from the last successful recalculation (not serialized).
    #[serde(skip)]
    cached_value: Option<f64>,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    /// Store user input verbatim. Validation happens on resolution.
    pub fn from_input(input: &str) -> Cell {
        Cell {
            raw: input.to_string(),
            cached_value: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn cached_value(&self) -> Option<f64> {
        self.cached_value
    }

    pub(crate) fn set_cached_value(&mut self, value: Option<f64>) {
        self.cached_value = value;
    }

    pub fn content(&self) -> CellContent<'_> {
        if self.raw.is_empty() {
            CellContent::Empty
        } else if self.raw.starts_with(FORMULA_SENTINEL) {
            CellContent::Formula(&self.raw)
        } else {
            CellContent::Literal(&self.raw)
        }
    }

    /// `referenced` is true when a formula led here; only then does the empty
    /// cell policy apply. An empty cell on its own always reads as zero.
    fn step(&self, options: EvalOptions, referenced: bool) -> EvalResult<Step> {
        match self.content() {
            CellContent::Empty if !referenced => Ok(Step::Value(0.0)),
            CellContent::Empty => match options.empty_cells {
                EmptyCellPolicy::Zero => Ok(Step::Value(0.0)),
                EmptyCellPolicy::Reject => Err(EvalError::InvalidValue(String::new())),
            },
            CellContent::Literal(text) => parse_value(text).map(Step::Value),
            CellContent::Formula(text) => parse_reference(text).map(Step::Follow),
        }
    }

    /// Compute the value this cell's raw content stands for.
    ///
    /// `at` is this cell's own position in `grid`. Formulas are followed
    /// through the grid until a literal or empty cell is reached; cached values
    /// are ignored. A formula that leads back onto the chain raises
    /// `InvalidFormula` with that formula's text.
    pub fn resolve(&self, at: CellRef, grid: &Grid) -> EvalResult<f64> {
        let options = grid.options();
        let mut chain = ResolutionChain::new(at);
        let mut cell = self;
        let mut referenced = false;

        loop {
            let target = match cell.step(options, referenced)? {
                Step::Value(value) => return Ok(value),
                Step::Follow(target) => target,
            };

            if !chain.enter(target) {
                tracing::debug!(
                    path = ?chain.path().iter().map(ToString::to_string).collect::<Vec<_>>(),
                    "reference cycle"
                );
                return Err(EvalError::InvalidFormula(cell.raw.clone()));
            }
            cell = grid
                .get(target)
                .ok_or_else(|| EvalError::InvalidFormula(cell.raw.clone()))?;
            referenced = true;
        }
    }
}
