//! DuckDB sink

use crate::error::{DbError, DbResult};
use crate::sink::{check_shape, TableSink};
use duckdb::types::Value;
use duckdb::Connection;
use ppts_core::{SqlType, SqlValue, TableSpec};
use std::path::{Path, PathBuf};

/// Writes tables to a DuckDB database over a single connection.
///
/// A file-backed sink builds into a staging file next to the destination.
/// [`DuckDbSink::persist`] moves it into place; until then an existing
/// destination is left untouched.
pub struct DuckDbSink {
    conn: Connection,
    staged: Option<StagedFile>,
}

/// Staging file and the destination it replaces on persist
struct StagedFile {
    build: PathBuf,
    destination: PathBuf,
}

impl DuckDbSink {
    /// Open a staging database for `path`.
    ///
    /// An existing destination is refused unless `overwrite` is set.
    pub fn open(path: &Path, overwrite: bool) -> DbResult<Self> {
        if path.exists() && !overwrite {
            return Err(DbError::DestinationExists {
                path: path.display().to_string(),
            });
        }

        let build = staging_path(path);
        remove_if_exists(&build)?;
        remove_if_exists(&wal_path(&build))?;
        log::debug!("Building {} in {}", path.display(), build.display());

        let conn = Connection::open(&build)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", build.display())))?;
        Ok(Self {
            conn,
            staged: Some(StagedFile {
                build,
                destination: path.to_path_buf(),
            }),
        })
    }

    /// Create an in-memory database
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn, staged: None })
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection and move the staging file over the destination.
    pub fn persist(self) -> DbResult<()> {
        let Self { conn, staged } = self;
        conn.close()
            .map_err(|(_, e)| DbError::ConnectionError(e.to_string()))?;
        let Some(staged) = staged else {
            return Ok(());
        };

        if staged.destination.exists() {
            log::info!("Replacing existing database {}", staged.destination.display());
        }
        let destination_wal = wal_path(&staged.destination);
        remove_if_exists(&destination_wal)?;
        let build_wal = wal_path(&staged.build);
        if build_wal.exists() {
            rename(&build_wal, &destination_wal)?;
        }
        rename(&staged.build, &staged.destination)
    }

    /// Close the connection and delete the staging file, leaving the
    /// destination as it was.
    pub fn discard(self) -> DbResult<()> {
        let Self { conn, staged } = self;
        drop(conn);
        match staged {
            Some(staged) => {
                remove_if_exists(&wal_path(&staged.build))?;
                remove_if_exists(&staged.build)
            }
            None => Ok(()),
        }
    }

    fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))
    }

    fn transaction_control(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::TransactionError(format!("{sql} failed: {e}")))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> DbError {
    DbError::IoWithPath {
        path: path.display().to_string(),
        source,
    }
}

fn remove_if_exists(path: &Path) -> DbResult<()> {
    if path.exists() {
        std::fs::remove_file(path).map_err(|e| io_error(path, e))?;
    }
    Ok(())
}

fn rename(from: &Path, to: &Path) -> DbResult<()> {
    std::fs::rename(from, to).map_err(|e| io_error(to, e))
}

/// `out/ppts.duckdb` -> `out/.ppts.duckdb.partial`
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ppts.duckdb".to_string());
    path.with_file_name(format!(".{name}.partial"))
}

fn wal_path(path: &Path) -> PathBuf {
    path.with_extension(wal_extension(path))
}

/// `db.duckdb` -> `duckdb.wal`, `db` -> `wal`
fn wal_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!("{}.wal", ext.to_string_lossy()),
        None => "wal".to_string(),
    }
}

fn sql_type(sql_type: SqlType) -> &'static str {
    match sql_type {
        SqlType::Integer => "BIGINT",
        SqlType::Real => "DOUBLE",
        SqlType::Text => "VARCHAR",
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `CREATE TABLE` statement for a table definition
pub fn create_table_sql(spec: &TableSpec) -> String {
    let columns: Vec<String> = spec
        .columns
        .iter()
        .map(|c| {
            let mut column = format!("{} {}", quote_ident(c.name), sql_type(c.sql_type));
            if c.primary_key {
                column.push_str(" PRIMARY KEY");
            }
            column
        })
        .collect();
    format!(
        "CREATE TABLE {} ({})",
        quote_ident(spec.name),
        columns.join(", ")
    )
}

fn insert_sql(spec: &TableSpec) -> String {
    let columns: Vec<String> = spec.column_names().map(quote_ident).collect();
    let placeholders = vec!["?"; spec.columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(spec.name),
        columns.join(", "),
        placeholders
    )
}

fn to_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(v) => Value::BigInt(*v),
        SqlValue::Real(v) => Value::Double(*v),
        SqlValue::Text(v) => Value::Text(v.clone()),
    }
}

impl TableSink for DuckDbSink {
    fn begin(&mut self) -> DbResult<()> {
        self.transaction_control("BEGIN TRANSACTION")
    }

    fn commit(&mut self) -> DbResult<()> {
        self.transaction_control("COMMIT")
    }

    fn rollback(&mut self) -> DbResult<()> {
        self.transaction_control("ROLLBACK")
    }

    fn create_table(&mut self, spec: &TableSpec) -> DbResult<()> {
        self.execute_batch(&create_table_sql(spec))
    }

    fn append_rows(&mut self, spec: &TableSpec, rows: &[Vec<SqlValue>]) -> DbResult<usize> {
        check_shape(spec, rows)?;
        let sql = insert_sql(spec);
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))?;
        for row in rows {
            stmt.execute(duckdb::params_from_iter(row.iter().map(to_value)))
                .map_err(|e| DbError::ExecutionError(format!("{e}: {sql}")))?;
        }
        Ok(rows.len())
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
