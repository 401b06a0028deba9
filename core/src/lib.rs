//! Prettymap Core Types
//!
//! This crate provides the foundational types used throughout the
//! prettymap system:
//! - The Row data model (original and derived campaign fields)
//! - Field selectors for addressing row columns
//! - Small string helpers shared by the rule and ingest crates

mod row;
mod text;

pub use row::*;
pub use text::*;
