//! Shared test utilities for ppts-core and downstream crates

use crate::observe::{Stage, StageObserver};
use crate::schema::{source_columns, ColumnKind};
use crate::table::{Column, SourceTable};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

/// Builds a source table carrying the full schema, all cells missing except
/// the ones a test sets.
#[derive(Debug, Clone)]
pub struct SourceTableBuilder {
    rows: usize,
    columns: HashMap<String, Column>,
}

impl SourceTableBuilder {
    pub fn new(rows: usize) -> Self {
        let columns = source_columns()
            .into_iter()
            .map(|c| (c.name, Column::missing(c.kind, rows)))
            .collect();
        Self { rows, columns }
    }

    /// Set a text cell. Panics if `column` is not a text column of the schema.
    pub fn text(mut self, column: &str, row: usize, value: &str) -> Self {
        match self.columns.get_mut(column) {
            Some(Column::Text(values)) => values[row] = Some(value.to_string()),
            _ => panic!("{column} is not a text column of the source schema"),
        }
        self
    }

    /// Set a numeric cell. Panics if `column` is not a numeric column of the schema.
    pub fn number(mut self, column: &str, row: usize, value: f64) -> Self {
        match self.columns.get_mut(column) {
            Some(Column::Number(values)) => values[row] = Some(value),
            _ => panic!("{column} is not a numeric column of the source schema"),
        }
        self
    }

    /// Set the same text column on consecutive rows starting at row 0
    pub fn texts(mut self, column: &str, values: &[&str]) -> Self {
        for (row, value) in values.iter().enumerate() {
            self = self.text(column, row, value);
        }
        self
    }

    pub fn build(&self) -> SourceTable {
        let mut table = SourceTable::new(self.rows);
        for spec in source_columns() {
            let column = self.columns[&spec.name].clone();
            table.set_column(spec.name, column).unwrap();
        }
        table
    }

    /// Render the table as CSV with the schema's header, missing cells empty
    pub fn to_csv(&self) -> String {
        let specs = source_columns();
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(specs.iter().map(|c| c.name.as_str()))
            .unwrap();
        for row in 0..self.rows {
            let cells: Vec<String> = specs
                .iter()
                .map(|spec| match (&self.columns[&spec.name], spec.kind) {
                    (Column::Text(values), ColumnKind::Text) => {
                        values[row].clone().unwrap_or_default()
                    }
                    (Column::Number(values), ColumnKind::Number) => {
                        values[row].map(|v| v.to_string()).unwrap_or_default()
                    }
                    _ => unreachable!("builder columns follow the schema kinds"),
                })
                .collect();
            writer.write_record(&cells).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }
}

/// Observer that records every stage event for assertions
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: RefCell<Vec<(Stage, Option<usize>)>>,
}

impl RecordingObserver {
    /// Stages that finished, in order
    pub fn finished(&self) -> Vec<Stage> {
        self.events
            .borrow()
            .iter()
            .filter_map(|(stage, rows)| rows.map(|_| *stage))
            .collect()
    }
}

impl StageObserver for RecordingObserver {
    fn stage_started(&self, stage: Stage) {
        self.events.borrow_mut().push((stage, None));
    }

    fn stage_finished(&self, stage: Stage, _elapsed: Duration, rows: usize) {
        self.events.borrow_mut().push((stage, Some(rows)));
    }
}
