//! Fixed-size grid storage and recalculation.

use super::cell::Cell;
use super::cell_ref::{COLS, CellRef, ROWS};
use super::error::EvalResult;
use super::options::EvalOptions;

/// A 10 x 11 grid of cells, stored row-major.
///
/// Every mutation marks the grid dirty. [`Grid::recalculate`] resolves all
/// cells from their raw text and either caches every value or none of them.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    options: EvalOptions,
    clean: bool,
}

impl Grid {
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Grid {
            cells: vec![Cell::new_empty(); ROWS * COLS],
            options,
            clean: false,
        }
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    pub fn set_options(&mut self, options: EvalOptions) {
        self.options = options;
        self.clean = false;
    }

    /// Header letter for a column index.
    pub fn column_label(&self, col: usize) -> Option<&'static str> {
        CellRef::col_to_letter(col)
    }

    pub fn get(&self, at: CellRef) -> Option<&Cell> {
        self.cells.get(at.index()?)
    }

    /// Replace a cell's raw text, returning the previous text.
    /// Returns None (and changes nothing) when `at` is outside the grid.
    pub fn set_raw(&mut self, at: CellRef, raw: &str) -> Option<String> {
        let cell = self.cells.get_mut(at.index()?)?;
        let previous = std::mem::replace(cell, Cell::from_input(raw));
        self.clean = false;
        Some(previous.raw().to_string())
    }

    /// Value cached by the last successful recalculation.
    pub fn cached_value(&self, at: CellRef) -> Option<f64> {
        self.get(at)?.cached_value()
    }

    /// Whether the cache reflects the current contents.
    pub fn is_clean(&self) -> bool {
        self.clean
    }

    /// All cells in row-major order with their positions.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (CellRef::new(i % COLS, i / COLS), cell))
    }

    /// Resolve every cell from its raw text.
    ///
    /// Fail-fast: the first cell that fails aborts the pass, every cached
    /// value is cleared and the error is returned.
    pub fn recalculate(&mut self) -> EvalResult<()> {
        let resolved: EvalResult<Vec<f64>> = self
            .iter()
            .map(|(at, cell)| {
                cell.resolve(at, self).inspect_err(|err| {
                    tracing::debug!(cell = %at, error = %err, "recalculation aborted");
                })
            })
            .collect();

        match resolved {
            Ok(values) => {
                for (cell, value) in self.cells.iter_mut().zip(values) {
                    cell.set_cached_value(Some(value));
                }
                self.clean = true;
                tracing::trace!(cells = self.cells.len(), "recalculation complete");
                Ok(())
            }
            Err(err) => {
                for cell in &mut self.cells {
                    cell.set_cached_value(None);
                }
                self.clean = false;
                Err(err)
            }
        }
    }

    /// Recalculate only if something changed since the last successful pass.
    pub fn ensure_calculated(&mut self) -> EvalResult<()> {
        if self.clean {
            return Ok(());
        }
        self.recalculate()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
