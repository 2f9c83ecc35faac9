use cellgrid_engine::engine::{CellRef, EvalOptions, Grid};

use crate::config::Config;

/// UI-agnostic state for one sheet.
///
/// Callers own their sheets; nothing here is global, so independent sheets
/// (one per test, say) never observe each other.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// The fixed 10 x 11 grid
    pub(crate) grid: Grid,
    /// Cell targeted by the `selected_*` shortcuts
    pub(crate) selection: Option<CellRef>,
}

impl Sheet {
    /// Create an empty sheet with default evaluation options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Sheet {
            grid: Grid::with_options(options),
            selection: None,
        }
    }

    pub fn with_config(config: &Config) -> Self {
        Self::with_options(config.eval_options())
    }

    /// Read-only view of the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
