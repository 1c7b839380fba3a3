//! Error types for ppts-core

use thiserror::Error;

/// Core error type for the normalization engine.
///
/// Every variant is fatal: the pipeline stops before any output table is
/// produced. Recoverable data problems (dangling child keys, malformed dates,
/// missing measurements) are absorbed into the data and never reach here.
#[derive(Error, Debug)]
pub enum CoreError {
    /// P001: Expected source columns are absent
    #[error("[P001] Source schema drift, missing columns: {}", missing.join(", "))]
    SchemaDrift { missing: Vec<String> },

    /// P012: A known source column appears more than once in the header
    #[error("[P012] Source columns appear more than once: {}", columns.join(", "))]
    DuplicateColumn { columns: Vec<String> },

    /// P002: A raw category value yields no three-letter code
    #[error("[P002] Could not determine record type acronym for '{value}'")]
    UnresolvableCategory { value: String },

    /// P003: A numeric source column holds a non-numeric value
    #[error("[P003] Invalid number in column {column} at row {row}: '{value}'")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// P004: A raw category value was not enumerated in the code table
    #[error("[P004] Record type category '{value}' has no resolved code")]
    UnknownCategory { value: String },

    /// P005: A stage asked for a column the source table does not carry
    #[error("[P005] Unknown source column: {name}")]
    UnknownColumn { name: String },

    /// P006: Column was read with the wrong kind
    #[error("[P006] Column {name} is not a {expected} column")]
    ColumnKindMismatch { name: String, expected: String },

    /// P007: Derived column length does not match the row count
    #[error("[P007] Column {name} has {actual} values, expected {expected}")]
    ColumnLength {
        name: String,
        actual: usize,
        expected: usize,
    },

    /// P008: CSV read error with file context
    #[error("[P008] Failed to read source '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    /// P009: Invalid configuration value
    #[error("[P009] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// P010: IO error with file path context
    #[error("[P010] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// P011: YAML parse error
    #[error("[P011] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
