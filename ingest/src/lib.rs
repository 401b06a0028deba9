//! Prettymap Ingest
//!
//! Turn uploaded CSV exports into mapping rows.
//!
//! Responsibilities:
//! - Normalize headers and auto-detect columns with preference lists
//! - Branch between source-shaped and network-shaped files
//! - Filter fully-empty rows
//! - Sort rows stably by source then campaign name

mod error;
mod headers;
mod reader;

pub use error::{IngestError, IngestResult};
pub use headers::{ColumnMap, CsvShape};
pub use reader::CsvReader;
