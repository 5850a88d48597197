//! Output formatting for analysis results.
//!
//! Two renderers: machine-consumable JSON (the boundary to the tabular
//! collaborators that own file layout and CSV writing) and colored
//! terminal summaries for interactive use.

pub mod json;
pub mod terminal;
