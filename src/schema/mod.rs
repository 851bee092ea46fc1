//! FitFlow record schema
//!
//! This module defines the transient records the helpers operate on and the
//! adapter that parses them from JSON arrays or NDJSON.

mod records;
mod adapter;

pub use records::*;
pub use adapter::*;
