//! Error types for ppts-db

use thiserror::Error;

/// Sink operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Transaction control error (D003)
    #[error("[D003] Transaction failed: {0}")]
    TransactionError(String),

    /// Destination already exists and overwrite is off (D004)
    #[error("[D004] Destination '{path}' already exists (set overwrite: true to replace it)")]
    DestinationExists { path: String },

    /// Rows appended to a table that was never created (D005)
    #[error("[D005] Table not created: {0}")]
    UnknownTable(String),

    /// Row width does not match the table definition (D006)
    #[error("[D006] Row {row} of {table} has {actual} values, expected {expected}")]
    RowShape {
        table: String,
        row: usize,
        actual: usize,
        expected: usize,
    },

    /// IO error with file path context (D007)
    #[error("[D007] Failed to replace '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<duckdb::Error> for DbError {
    fn from(err: duckdb::Error) -> Self {
        DbError::ExecutionError(err.to_string())
    }
}
