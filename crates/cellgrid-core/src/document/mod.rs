//! Sheet state and logic (UI-agnostic).

mod adapter;
mod ops;
mod state;

pub use adapter::{MessageSink, TableAdapter};
pub use state::Sheet;
