//! Generic wide-to-narrow pivot
//!
//! A pivot walks a list of column groups (one group per output category) and
//! emits a hit for every row where the group satisfies a predicate. Hits come
//! out group-major, then in row order; the flag, measurement, and hearing
//! pivots all build their fact rows from these hits.

use crate::error::CoreResult;
use crate::schema::{measurement_column, Measure};
use crate::table::{Column, SourceTable};

/// The source columns behind one output category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup {
    pub category: String,
    pub columns: Vec<String>,
}

impl ColumnGroup {
    /// A group of one column, labelled with the column name
    pub fn single(column: &str) -> Self {
        Self {
            category: column.to_string(),
            columns: vec![column.to_string()],
        }
    }

    /// `{prefix}_{category}_{measure}` for each measure, labelled `category`
    pub fn measurement(prefix: &str, category: &str, measures: &[Measure]) -> Self {
        Self {
            category: category.to_string(),
            columns: measures
                .iter()
                .map(|m| measurement_column(prefix, category, *m))
                .collect(),
        }
    }
}

/// Row filter applied to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    /// Some text column of the group equals the sentinel
    Equals(&'a str),
    /// Some column of the group holds a value
    AnyPresent,
}

impl Predicate<'_> {
    fn matches(&self, columns: &[&Column], row: usize) -> bool {
        match self {
            Predicate::Equals(sentinel) => columns.iter().any(|c| match c {
                Column::Text(values) => values[row].as_deref() == Some(*sentinel),
                Column::Number(_) => false,
            }),
            Predicate::AnyPresent => columns.iter().any(|c| c.is_present(row)),
        }
    }
}

/// A row that matched a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotHit<'g> {
    pub record_id: usize,
    pub group: &'g ColumnGroup,
}

/// Find every (row, group) pair satisfying `predicate`
pub fn pivot<'g>(
    table: &SourceTable,
    groups: &'g [ColumnGroup],
    predicate: Predicate<'_>,
) -> CoreResult<Vec<PivotHit<'g>>> {
    let mut hits = Vec::new();
    for group in groups {
        let columns = group
            .columns
            .iter()
            .map(|name| table.column(name))
            .collect::<CoreResult<Vec<_>>>()?;
        hits.extend(
            (0..table.row_count())
                .filter(|&row| predicate.matches(&columns, row))
                .map(|record_id| PivotHit { record_id, group }),
        );
    }
    Ok(hits)
}

#[cfg(test)]
#[path = "pivot_test.rs"]
mod tests;
