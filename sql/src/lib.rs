//! Prettymap SQL
//!
//! Emit idempotent UPDATE statements for enriched rows, keyed on the
//! original campaign name and source columns.

mod statement;

pub use statement::{escape, generate, update_statement, DEFAULT_TABLE};
