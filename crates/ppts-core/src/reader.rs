//! CSV ingestion of the permit extract
//!
//! The header is checked against [`source_columns`] before any row is read;
//! every missing column is reported at once. Cells are typed by the declared
//! column kind: empty cells and the usual missing-value markers become
//! `None`, numeric cells must parse as a finite `f64`.

use crate::config::LoadConfig;
use crate::error::{CoreError, CoreResult};
use crate::schema::source_columns;
use crate::table::{Column, SourceTable};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

/// Cell contents treated as missing in any column
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

/// Read the extract at `path`
pub fn read_source(path: &Path, config: &LoadConfig) -> CoreResult<SourceTable> {
    let file = std::fs::File::open(path).map_err(|e| CoreError::IoWithPath {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Reading source extract {}", path.display());
    read_source_from(file, config.delimiter_byte()?).map_err(|e| match e {
        CoreError::Csv { source, .. } => CoreError::Csv {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Read an extract from any reader
pub fn read_source_from<R: Read>(input: R, delimiter: u8) -> CoreResult<SourceTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?.clone();
    let expected = source_columns();
    let known: HashSet<&str> = expected.iter().map(|c| c.name.as_str()).collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut duplicated: Vec<String> = Vec::new();
    for (i, header) in headers.iter().enumerate() {
        if positions.insert(header, i).is_some()
            && known.contains(header)
            && !duplicated.iter().any(|d| d == header)
        {
            duplicated.push(header.to_string());
        }
    }

    let missing: Vec<String> = expected
        .iter()
        .filter(|c| !positions.contains_key(c.name.as_str()))
        .map(|c| c.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::SchemaDrift { missing });
    }
    if !duplicated.is_empty() {
        return Err(CoreError::DuplicateColumn {
            columns: duplicated,
        });
    }
    let ignored = headers.iter().filter(|h| !known.contains(h)).count();
    if ignored > 0 {
        log::debug!("Ignoring {ignored} source columns outside the known schema");
    }

    let slots: Vec<usize> = expected.iter().map(|c| positions[c.name.as_str()]).collect();
    let mut columns: Vec<Column> = expected.iter().map(|c| Column::missing(c.kind, 0)).collect();

    let mut record = csv::StringRecord::new();
    let mut row = 0usize;
    while reader.read_record(&mut record).map_err(csv_error)? {
        for ((column, spec), &slot) in columns.iter_mut().zip(&expected).zip(&slots) {
            let cell = record.get(slot).unwrap_or("");
            match column {
                Column::Text(values) => values.push(parse_text(cell)),
                Column::Number(values) => values.push(parse_number(cell).ok_or_else(|| {
                    CoreError::InvalidNumber {
                        column: spec.name.clone(),
                        row,
                        value: cell.to_string(),
                    }
                })?),
            }
        }
        row += 1;
    }

    let mut table = SourceTable::new(row);
    for (spec, column) in expected.into_iter().zip(columns) {
        debug_assert_eq!(column.kind(), spec.kind);
        table.set_column(spec.name, column)?;
    }
    log::debug!("Read {row} source rows");
    Ok(table)
}

fn parse_text(cell: &str) -> Option<String> {
    if is_missing(cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

/// `Some(None)` for a missing cell, `None` when the cell is not a finite
/// number.
fn parse_number(cell: &str) -> Option<Option<f64>> {
    let trimmed = cell.trim();
    if is_missing(trimmed) {
        return Some(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => Some(None),
        Ok(value) if value.is_finite() => Some(Some(value)),
        _ => None,
    }
}

fn csv_error(source: csv::Error) -> CoreError {
    CoreError::Csv {
        path: "<input>".to_string(),
        source,
    }
}

#[cfg(test)]
#[path = "reader_test.rs"]
mod tests;
