use super::Sheet;
use crate::error::{CellgridError, Result};
use cellgrid_engine::engine::{CellRef, EvalOptions, Grid, format_number};

impl Sheet {
    fn checked(&self, row: usize, col: usize) -> Result<CellRef> {
        let cell_ref = CellRef::new(col, row);
        if cell_ref.in_bounds() {
            Ok(cell_ref)
        } else {
            Err(CellgridError::OutOfBounds { row, col })
        }
    }

    /// Store `text` as the raw content of a cell and recalculate the sheet.
    ///
    /// The text is kept even when recalculation fails; until it is corrected
    /// every read reports the same condition.
    pub fn set_content(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let cell_ref = self.checked(row, col)?;
        self.grid.set_raw(cell_ref, text);
        tracing::debug!(cell = %cell_ref, content = text, "set content");
        self.grid.recalculate()?;
        Ok(())
    }

    /// Empty a cell and recalculate.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<()> {
        self.set_content(row, col, "")
    }

    /// Canonical decimal text of a cell's value.
    pub fn get_value(&mut self, row: usize, col: usize) -> Result<String> {
        let cell_ref = self.checked(row, col)?;
        self.grid.ensure_calculated()?;
        self.grid
            .cached_value(cell_ref)
            .map(format_number)
            .ok_or(CellgridError::OutOfBounds { row, col })
    }

    /// Raw text stored in a cell, as typed.
    pub fn content(&self, row: usize, col: usize) -> Result<&str> {
        let cell_ref = self.checked(row, col)?;
        self.grid
            .get(cell_ref)
            .map(|cell| cell.raw())
            .ok_or(CellgridError::OutOfBounds { row, col })
    }

    /// Replace the whole sheet's contents in one step.
    ///
    /// Cells not listed become empty. Coordinates are checked before anything
    /// changes; the sheet is recalculated once afterwards.
    pub fn load_contents<I, S>(&mut self, contents: I) -> Result<()>
    where
        I: IntoIterator<Item = (CellRef, S)>,
        S: AsRef<str>,
    {
        let mut grid = Grid::with_options(self.grid.options());
        for (cell_ref, text) in contents {
            if grid.set_raw(cell_ref, text.as_ref()).is_none() {
                return Err(CellgridError::OutOfBounds {
                    row: cell_ref.row,
                    col: cell_ref.col,
                });
            }
        }
        self.grid = grid;
        tracing::debug!("replaced sheet contents");
        self.grid.recalculate()?;
        Ok(())
    }

    /// Display text of every cell, row by row.
    pub fn values(&mut self) -> Result<Vec<Vec<String>>> {
        self.grid.ensure_calculated()?;
        let mut rows = vec![Vec::with_capacity(self.grid.cols()); self.grid.rows()];
        for (cell_ref, cell) in self.grid.iter() {
            rows[cell_ref.row].push(cell.cached_value().map(format_number).unwrap_or_default());
        }
        Ok(rows)
    }

    /// Change how empty cells resolve. Takes effect on the next read.
    pub fn set_options(&mut self, options: EvalOptions) {
        self.grid.set_options(options);
    }

    pub fn column_label(&self, col: usize) -> Option<&'static str> {
        self.grid.column_label(col)
    }

    pub fn row_count(&self) -> usize {
        self.grid.rows()
    }

    pub fn column_count(&self) -> usize {
        self.grid.cols()
    }

    /// Point the `selected_*` shortcuts at a cell.
    pub fn select(&mut self, row: usize, col: usize) -> Result<CellRef> {
        let cell_ref = self.checked(row, col)?;
        self.selection = Some(cell_ref);
        Ok(cell_ref)
    }

    pub fn selected(&self) -> Option<CellRef> {
        self.selection
    }

    pub fn set_selected_content(&mut self, text: &str) -> Result<()> {
        let cell_ref = self.selection.ok_or(CellgridError::NoSelection)?;
        self.set_content(cell_ref.row, cell_ref.col, text)
    }

    pub fn selected_value(&mut self) -> Result<String> {
        let cell_ref = self.selection.ok_or(CellgridError::NoSelection)?;
        self.get_value(cell_ref.row, cell_ref.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgrid_engine::engine::{EmptyCellPolicy, EvalError};
    use pretty_assertions::assert_eq;

    fn eval_err(result: Result<impl std::fmt::Debug>) -> EvalError {
        match result {
            Err(CellgridError::Eval(err)) => err,
            other => panic!("expected evaluation error, got {:?}", other),
        }
    }

    #[test]
    fn set_value_and_get_value() {
        let mut sheet = Sheet::new();
        sheet.set_content(1, 1, "1.0").unwrap();
        assert_eq!(sheet.get_value(1, 1).unwrap(), "1.0");
        sheet.set_content(0, 0, "2.99").unwrap();
        assert_eq!(sheet.get_value(0, 0).unwrap(), "2.99");
        sheet.set_content(9, 10, "100").unwrap();
        assert_eq!(sheet.get_value(9, 10).unwrap(), "100.0");
    }

    #[test]
    fn set_value_invalid_value() {
        let mut sheet = Sheet::new();
        assert_eq!(
            eval_err(sheet.set_content(1, 1, "A")),
            EvalError::InvalidValue("A".to_string())
        );
        assert_eq!(
            eval_err(sheet.set_content(1, 1, "00000")),
            EvalError::InvalidValue("00000".to_string())
        );
    }

    #[test]
    fn set_value_invalid_formula() {
        let mut sheet = Sheet::new();
        for (formula, row, col) in [("=M1", 1, 1), ("=AA", 1, 1), ("=P100", 5, 3), ("=A1A2", 0, 0)] {
            assert_eq!(
                eval_err(sheet.set_content(row, col, formula)),
                EvalError::InvalidFormula(formula.to_string())
            );
            sheet.clear(row, col).unwrap();
        }
    }

    #[test]
    fn invalid_cell_blocks_every_read_until_fixed() {
        let mut sheet = Sheet::new();
        sheet.set_content(0, 0, "5").unwrap();
        assert!(sheet.set_content(3, 3, "=A1A2").is_err());

        assert_eq!(
            eval_err(sheet.get_value(0, 0)),
            EvalError::InvalidFormula("=A1A2".to_string())
        );
        assert_eq!(sheet.content(3, 3).unwrap(), "=A1A2");

        sheet.set_content(3, 3, "=A0").unwrap();
        assert_eq!(sheet.get_value(3, 3).unwrap(), "5.0");
    }

    #[test]
    fn get_value_is_idempotent() {
        let mut sheet = Sheet::new();
        sheet.set_content(2, 2, "42").unwrap();
        let first = sheet.get_value(2, 2).unwrap();
        let second = sheet.get_value(2, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn formula_chain_and_cycle() {
        let mut sheet = Sheet::new();
        sheet.set_content(0, 1, "=C2").unwrap();
        sheet.set_content(2, 2, "3.5").unwrap();
        assert_eq!(sheet.get_value(0, 1).unwrap(), "3.5");

        sheet.set_content(2, 2, "=B0").unwrap_err();
        assert!(matches!(
            eval_err(sheet.get_value(0, 1)),
            EvalError::InvalidFormula(_)
        ));
    }

    #[test]
    fn empty_cell_reads_as_zero() {
        let mut sheet = Sheet::new();
        assert_eq!(sheet.get_value(4, 4).unwrap(), "0.0");
        sheet.set_content(0, 0, "=E4").unwrap();
        assert_eq!(sheet.get_value(0, 0).unwrap(), "0.0");
    }

    #[test]
    fn reject_policy_flags_referenced_empty_cell() {
        let mut sheet = Sheet::with_options(EvalOptions {
            empty_cells: EmptyCellPolicy::Reject,
        });
        assert_eq!(sheet.get_value(4, 4).unwrap(), "0.0");
        assert_eq!(
            eval_err(sheet.set_content(0, 0, "=E4")),
            EvalError::InvalidValue(String::new())
        );
        sheet.set_options(EvalOptions::default());
        assert_eq!(sheet.get_value(0, 0).unwrap(), "0.0");
    }

    #[test]
    fn out_of_bounds_coordinates() {
        let mut sheet = Sheet::new();
        assert!(matches!(
            sheet.set_content(10, 0, "1"),
            Err(CellgridError::OutOfBounds { row: 10, col: 0 })
        ));
        assert!(matches!(
            sheet.get_value(0, 11),
            Err(CellgridError::OutOfBounds { row: 0, col: 11 })
        ));
        assert!(sheet.select(9, 11).is_err());
    }

    #[test]
    fn metadata() {
        let sheet = Sheet::new();
        assert_eq!(sheet.column_label(0), Some("A"));
        assert_eq!(sheet.column_label(1), Some("B"));
        assert_eq!(sheet.column_label(10), Some("K"));
        assert_eq!(sheet.column_label(11), None);
        assert_eq!(sheet.row_count(), 10);
        assert_eq!(sheet.column_count(), 11);
    }

    #[test]
    fn selection_shortcuts() {
        let mut sheet = Sheet::new();
        assert!(matches!(
            sheet.selected_value(),
            Err(CellgridError::NoSelection)
        ));

        let selected = sheet.select(9, 10).unwrap();
        assert_eq!(selected, CellRef::new(10, 9));
        assert_eq!(sheet.selected(), Some(selected));

        sheet.set_selected_content("999").unwrap();
        assert_eq!(sheet.selected_value().unwrap(), "999.0");
        assert_eq!(sheet.get_value(9, 10).unwrap(), "999.0");
    }

    #[test]
    fn independent_sheets_do_not_share_state() {
        let mut a = Sheet::new();
        let mut b = Sheet::new();
        a.set_content(0, 0, "1").unwrap();
        a.select(0, 0).unwrap();
        assert_eq!(b.get_value(0, 0).unwrap(), "0.0");
        assert_eq!(b.selected(), None);
    }

    #[test]
    fn load_contents_replaces_everything() {
        let mut sheet = Sheet::new();
        sheet.set_content(5, 5, "8").unwrap();

        sheet
            .load_contents([(CellRef::new(0, 0), "=B0"), (CellRef::new(1, 0), "6")])
            .unwrap();
        assert_eq!(sheet.get_value(0, 0).unwrap(), "6.0");
        assert_eq!(sheet.content(5, 5).unwrap(), "");
    }

    #[test]
    fn load_contents_checks_bounds_first() {
        let mut sheet = Sheet::new();
        sheet.set_content(5, 5, "8").unwrap();

        let result = sheet.load_contents(vec![
            (CellRef::new(0, 0), "1".to_string()),
            (CellRef::new(11, 0), "2".to_string()),
        ]);
        assert!(matches!(result, Err(CellgridError::OutOfBounds { row: 0, col: 11 })));
        assert_eq!(sheet.content(5, 5).unwrap(), "8");
        assert_eq!(sheet.content(0, 0).unwrap(), "");
    }

    #[test]
    fn values_snapshot() {
        let mut sheet = Sheet::new();
        sheet.set_content(0, 0, "1").unwrap();
        sheet.set_content(9, 10, "=A0").unwrap();

        let values = sheet.values().unwrap();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|row| row.len() == 11));
        assert_eq!(values[0][0], "1.0");
        assert_eq!(values[0][1], "0.0");
        assert_eq!(values[9][10], "1.0");
    }
}
