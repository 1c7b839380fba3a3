//! Table sink trait and the transactional load driver

use crate::error::{DbError, DbResult};
use ppts_core::{LoadSummary, NamedTable, SqlValue, Stage, StageObserver, StageTimer, TableSpec};

/// A relational store that accepts normalized tables.
///
/// Transaction hooks default to no-ops for sinks without transactions.
pub trait TableSink {
    fn begin(&mut self) -> DbResult<()> {
        Ok(())
    }

    fn commit(&mut self) -> DbResult<()> {
        Ok(())
    }

    fn rollback(&mut self) -> DbResult<()> {
        Ok(())
    }

    /// Create an empty table
    fn create_table(&mut self, spec: &TableSpec) -> DbResult<()>;

    /// Append rows to a created table, returning the number written
    fn append_rows(&mut self, spec: &TableSpec, rows: &[Vec<SqlValue>]) -> DbResult<usize>;
}

/// Check that every row is as wide as the table
pub(crate) fn check_shape(spec: &TableSpec, rows: &[Vec<SqlValue>]) -> DbResult<()> {
    let expected = spec.columns.len();
    match rows.iter().position(|r| r.len() != expected) {
        Some(row) => Err(DbError::RowShape {
            table: spec.name.to_string(),
            row,
            actual: rows[row].len(),
            expected,
        }),
        None => Ok(()),
    }
}

/// Create every table, then append its rows, inside one transaction.
///
/// Any failure rolls the whole load back.
pub fn load_tables(
    sink: &mut dyn TableSink,
    tables: &[NamedTable],
    observer: &dyn StageObserver,
) -> DbResult<LoadSummary> {
    let timer = StageTimer::start(observer, Stage::Load);
    sink.begin()?;

    let result = write_all(sink, tables);
    match &result {
        Ok(_) => {
            if let Err(commit_err) = sink.commit() {
                let _ = sink.rollback();
                return Err(commit_err);
            }
        }
        Err(e) => {
            log::warn!("Load failed, rolling back: {e}");
            let _ = sink.rollback();
        }
    }
    let written = result?;

    timer.finish(written);
    Ok(LoadSummary::from_tables(tables))
}

fn write_all(sink: &mut dyn TableSink, tables: &[NamedTable]) -> DbResult<usize> {
    for table in tables {
        sink.create_table(table.spec)?;
    }
    let mut written = 0;
    for table in tables {
        let rows = sink.append_rows(table.spec, &table.rows)?;
        log::debug!("Wrote {rows} rows to {}", table.name());
        written += rows;
    }
    Ok(written)
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod tests;
