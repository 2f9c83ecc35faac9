use serde::{Deserialize, Serialize};

/// What a formula sees when it reaches a cell with no content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyCellPolicy {
    /// Empty cells resolve to `0.0`.
    #[default]
    Zero,
    /// Empty cells fail literal validation and raise `InvalidValue("")`.
    Reject,
}

/// Knobs that change how cells resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvalOptions {
    pub empty_cells: EmptyCellPolicy,
}
