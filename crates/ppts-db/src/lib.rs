//! ppts-db - Relational sink for normalized permit tables
//!
//! This crate provides the `TableSink` trait, the transactional
//! `load_tables` driver, and sinks for DuckDB and for in-memory inspection.

pub mod duckdb;
pub mod error;
pub mod memory;
pub mod sink;

pub use duckdb::DuckDbSink;
pub use error::{DbError, DbResult};
pub use memory::MemorySink;
pub use sink::{load_tables, TableSink};
