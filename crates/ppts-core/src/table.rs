//! In-memory source table
//!
//! The extract is held column-wise: each named column is a vector of
//! nullable values typed by its declared [`ColumnKind`]. Rows are never
//! added or removed once the table is built; stages only replace or append
//! whole derived columns.

use crate::error::{CoreError, CoreResult};
use crate::schema::ColumnKind;
use std::collections::HashMap;

/// One typed, nullable column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<Option<String>>),
    Number(Vec<Option<f64>>),
}

impl Column {
    /// An all-missing column of the given kind
    pub fn missing(kind: ColumnKind, len: usize) -> Self {
        match kind {
            ColumnKind::Text => Column::Text(vec![None; len]),
            ColumnKind::Number => Column::Number(vec![None; len]),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Text(_) => ColumnKind::Text,
            Column::Number(_) => ColumnKind::Number,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Text(values) => values.len(),
            Column::Number(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value at `row` is present
    pub fn is_present(&self, row: usize) -> bool {
        match self {
            Column::Text(values) => values.get(row).is_some_and(Option::is_some),
            Column::Number(values) => values.get(row).is_some_and(Option::is_some),
        }
    }
}

/// The flat permit extract
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Column>,
    row_count: usize,
}

impl SourceTable {
    /// Create an empty table with a fixed number of rows and no columns
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            ..Default::default()
        }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn column(&self, name: &str) -> CoreResult<&Column> {
        self.index
            .get(name)
            .map(|&i| &self.columns[i])
            .ok_or_else(|| CoreError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Borrow a text column
    pub fn text(&self, name: &str) -> CoreResult<&[Option<String>]> {
        match self.column(name)? {
            Column::Text(values) => Ok(values),
            Column::Number(_) => Err(kind_mismatch(name, ColumnKind::Text)),
        }
    }

    /// Borrow a numeric column
    pub fn number(&self, name: &str) -> CoreResult<&[Option<f64>]> {
        match self.column(name)? {
            Column::Number(values) => Ok(values),
            Column::Text(_) => Err(kind_mismatch(name, ColumnKind::Number)),
        }
    }

    /// Add a column, or replace the column of the same name
    pub fn set_column(&mut self, name: impl Into<String>, column: Column) -> CoreResult<()> {
        let name = name.into();
        if column.len() != self.row_count {
            return Err(CoreError::ColumnLength {
                name,
                actual: column.len(),
                expected: self.row_count,
            });
        }
        match self.index.get(&name) {
            Some(&i) => self.columns[i] = column,
            None => {
                self.index.insert(name.clone(), self.columns.len());
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }
}

fn kind_mismatch(name: &str, expected: ColumnKind) -> CoreError {
    CoreError::ColumnKindMismatch {
        name: name.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
