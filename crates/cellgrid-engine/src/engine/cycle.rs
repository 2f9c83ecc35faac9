//! Reference chain tracking for cell resolution.
//!
//! A formula names exactly one other cell, so resolving a cell walks a single
//! chain of references. The chain remembers every cell it has passed through;
//! reaching one of them again means the formulas form a cycle (e.g. A1 -> B1
//! -> C1 -> A1) and resolution has to stop instead of looping forever.

use std::collections::HashSet;

use super::CellRef;

#[derive(Debug, Default)]
pub struct ResolutionChain {
    visiting: HashSet<CellRef>,
    path: Vec<CellRef>,
}

impl ResolutionChain {
    pub fn new(start: CellRef) -> Self {
        let mut chain = Self::default();
        chain.enter(start);
        chain
    }

    /// Step onto `cell`. Returns false if it is already on the chain.
    pub fn enter(&mut self, cell: CellRef) -> bool {
        self.path.push(cell);
        self.visiting.insert(cell)
    }

    /// Cells visited so far, in order. After a failed `enter` the repeated
    /// cell is the last element.
    pub fn path(&self) -> &[CellRef] {
        &self.path
    }
}
