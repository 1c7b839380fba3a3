//! ppts-core - Normalization engine for planning-permit extracts
//!
//! This crate turns the flat, one-row-per-record permit extract into a set of
//! normalized tables: dimensions (record types, locations, planners), narrow
//! fact tables pivoted from wide column groups, and the parent/child record
//! relation. It has no database dependency; `ppts-db` persists the output.

pub mod config;
pub mod dates;
pub mod error;
pub mod flags;
pub mod hearing;
pub mod location;
pub mod measurement;
pub mod observe;
pub mod output;
pub mod pipeline;
pub mod pivot;
pub mod planner;
pub mod reader;
pub mod record;
pub mod record_type;
pub mod relationship;
pub mod schema;
pub mod table;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::LoadConfig;
pub use error::{CoreError, CoreResult};
pub use observe::{LogObserver, NoopObserver, Stage, StageObserver, StageTimer};
pub use output::{ColumnSpec, NamedTable, SqlType, SqlValue, TableSpec};
pub use pipeline::{prepare, LoadSummary, NormalizedDataset, TableCount};
pub use reader::{read_source, read_source_from};
pub use table::{Column, SourceTable};
