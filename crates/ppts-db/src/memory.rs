//! In-memory sink
//!
//! Holds every table as plain rows. Used by `ppts validate` to run a load
//! without touching disk, and by tests to inspect what a load wrote.

use crate::error::{DbError, DbResult};
use crate::sink::{check_shape, TableSink};
use ppts_core::{SqlValue, TableSpec};
use std::collections::BTreeMap;

type Tables = BTreeMap<String, Vec<Vec<SqlValue>>>;

#[derive(Debug, Default)]
pub struct MemorySink {
    tables: Tables,
    /// State at `begin`, restored on rollback
    snapshot: Option<Tables>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, table: &str) -> Option<&[Vec<SqlValue>]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl TableSink for MemorySink {
    fn begin(&mut self) -> DbResult<()> {
        if self.snapshot.is_some() {
            return Err(DbError::TransactionError(
                "transaction already open".to_string(),
            ));
        }
        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    fn commit(&mut self) -> DbResult<()> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| DbError::TransactionError("no open transaction".to_string()))
    }

    fn rollback(&mut self) -> DbResult<()> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or_else(|| DbError::TransactionError("no open transaction".to_string()))?;
        self.tables = snapshot;
        Ok(())
    }

    fn create_table(&mut self, spec: &TableSpec) -> DbResult<()> {
        if self.tables.contains_key(spec.name) {
            return Err(DbError::ExecutionError(format!(
                "table {} already exists",
                spec.name
            )));
        }
        self.tables.insert(spec.name.to_string(), Vec::new());
        Ok(())
    }

    fn append_rows(&mut self, spec: &TableSpec, rows: &[Vec<SqlValue>]) -> DbResult<usize> {
        check_shape(spec, rows)?;
        let table = self
            .tables
            .get_mut(spec.name)
            .ok_or_else(|| DbError::UnknownTable(spec.name.to_string()))?;
        table.extend_from_slice(rows);
        Ok(rows.len())
    }
}
