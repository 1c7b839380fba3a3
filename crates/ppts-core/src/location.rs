//! Location dimension
//!
//! Geometry strings are opaque equality keys. Each distinct geometry gets a
//! surrogate id in first-seen order; its shape measures come from the first
//! row with that geometry and its address from the first row that has one.

use crate::error::CoreResult;
use crate::schema;
use crate::table::SourceTable;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the `location` dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub location_id: usize,
    pub geometry: String,
    pub address: Option<String>,
    pub shape_length: Option<f64>,
    pub shape_area: Option<f64>,
}

/// Output of [`dedupe_locations`]
#[derive(Debug, Clone, PartialEq)]
pub struct LocationDedup {
    pub locations: Vec<Location>,
    /// Location reference per source row; `None` when the row has no geometry
    pub refs: Vec<Option<usize>>,
}

pub fn dedupe_locations(table: &SourceTable) -> CoreResult<LocationDedup> {
    let geometries = table.text(schema::GEOMETRY)?;
    let addresses = table.text(schema::ADDRESS)?;
    let lengths = table.number(schema::SHAPE_LENGTH)?;
    let areas = table.number(schema::SHAPE_AREA)?;

    let mut id_of: HashMap<&str, usize> = HashMap::new();
    let mut members: Vec<(&str, Vec<usize>)> = Vec::new();
    let mut refs = Vec::with_capacity(geometries.len());

    for (row, geometry) in geometries.iter().enumerate() {
        let Some(geometry) = geometry.as_deref() else {
            refs.push(None);
            continue;
        };
        let id = *id_of.entry(geometry).or_insert_with(|| {
            members.push((geometry, Vec::new()));
            members.len() - 1
        });
        members[id].1.push(row);
        refs.push(Some(id));
    }

    let locations = members
        .into_iter()
        .enumerate()
        .map(|(location_id, (geometry, rows))| {
            let first = rows[0];
            Location {
                location_id,
                geometry: geometry.to_string(),
                address: rows.iter().find_map(|&row| addresses[row].clone()),
                shape_length: lengths[first],
                shape_area: areas[first],
            }
        })
        .collect();

    Ok(LocationDedup { locations, refs })
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
