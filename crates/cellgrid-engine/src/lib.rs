//! cellgrid_engine - Literal validation, reference parsing and recalculation.

pub mod engine;
