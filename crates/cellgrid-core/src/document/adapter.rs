//! Bridge between a [`Sheet`] and a table-style display.
//!
//! A table widget reads and writes cells without handling errors itself. The
//! adapter absorbs every condition, forwards its message to a [`MessageSink`]
//! and hands the widget something it can render.

use super::Sheet;

/// Receives human-readable messages for the user.
pub trait MessageSink {
    fn display_message(&mut self, message: &str);
}

impl MessageSink for Vec<String> {
    fn display_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

pub struct TableAdapter<'a, S: MessageSink> {
    sheet: &'a mut Sheet,
    sink: S,
}

impl<'a, S: MessageSink> TableAdapter<'a, S> {
    pub fn new(sheet: &'a mut Sheet, sink: S) -> Self {
        TableAdapter { sheet, sink }
    }

    /// Write a cell; a failure is reported to the sink instead of returned.
    pub fn set_value_at(&mut self, value: &str, row: usize, col: usize) {
        if let Err(err) = self.sheet.set_content(row, col, value) {
            self.sink.display_message(&err.to_string());
        }
    }

    /// Read a cell; a failure is reported to the sink and reads as `""`.
    pub fn get_value_at(&mut self, row: usize, col: usize) -> String {
        match self.sheet.get_value(row, col) {
            Ok(value) => value,
            Err(err) => {
                self.sink.display_message(&err.to_string());
                String::new()
            }
        }
    }

    /// Header text for a column; empty for columns outside the grid.
    pub fn column_name(&self, col: usize) -> String {
        self.sheet.column_label(col).unwrap_or_default().to_string()
    }

    pub fn row_count(&self) -> usize {
        self.sheet.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.sheet.column_count()
    }

    /// Cells are never edited in place; edits go through [`Self::set_value_at`].
    pub fn is_cell_editable(&self, _row: usize, _col: usize) -> bool {
        false
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
