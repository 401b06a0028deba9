//! Prettymap CLI
//!
//! Command-line shell around the rule engine: load a CSV export, apply
//! the mapping rules, and emit UPDATE statements.

mod app;
mod args;
mod error;

pub use app::{run, USAGE};
pub use args::Args;
pub use error::{AppError, AppResult};
