//! Table-facing data model shared with the runtime.

pub mod entities;
