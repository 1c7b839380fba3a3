//! The combined `record` table
//!
//! One row per source row, keyed by row position. It joins the business
//! fields of the extract with the references produced by the earlier stages,
//! so the category column must already hold codes and the location/planner
//! references must already be resolved when it is built.

use crate::dates::{DateParts, RecordDates};
use crate::error::{CoreError, CoreResult};
use crate::schema;
use crate::table::SourceTable;
use serde::Serialize;

/// One row of `record`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    pub record_id: usize,
    pub record_type: Option<String>,
    pub planner_id: Option<usize>,
    pub location_id: Option<usize>,
    /// Business key from the extract
    pub record_strid: Option<String>,
    pub object_id: Option<f64>,
    pub template_id: Option<String>,
    pub record_name: Option<String>,
    pub description: Option<String>,
    pub record_status: Option<String>,
    pub construct_cost: Option<f64>,
    pub related_building_permit: Option<String>,
    pub acalink: Option<String>,
    pub aalink: Option<String>,
    pub opened: DateParts,
    pub closed: DateParts,
}

/// Per-row outputs of the earlier stages
#[derive(Debug, Clone, Copy)]
pub struct RecordRefs<'a> {
    pub locations: &'a [Option<usize>],
    pub planners: &'a [Option<usize>],
    pub dates: &'a [RecordDates],
}

fn check_len(name: &str, actual: usize, expected: usize) -> CoreResult<()> {
    if actual != expected {
        return Err(CoreError::ColumnLength {
            name: name.to_string(),
            actual,
            expected,
        });
    }
    Ok(())
}

/// Assemble the record table. When `fill_construct_cost` is set, a missing
/// construct cost is written as 0.
pub fn build_records(
    table: &SourceTable,
    refs: &RecordRefs<'_>,
    fill_construct_cost: bool,
) -> CoreResult<Vec<RecordRow>> {
    let rows = table.row_count();
    check_len("location_id", refs.locations.len(), rows)?;
    check_len("planner_id", refs.planners.len(), rows)?;
    check_len("dates", refs.dates.len(), rows)?;

    let record_type = table.text(schema::RECORD_TYPE_CATEGORY)?;
    let record_strid = table.text(schema::RECORD_ID)?;
    let object_id = table.number(schema::OBJECT_ID)?;
    let template_id = table.text(schema::TEMPLATE_ID)?;
    let record_name = table.text(schema::RECORD_NAME)?;
    let description = table.text(schema::DESCRIPTION)?;
    let record_status = table.text(schema::RECORD_STATUS)?;
    let construct_cost = table.number(schema::CONSTRUCT_COST)?;
    let related = table.text(schema::RELATED_BUILDING_PERMIT)?;
    let acalink = table.text(schema::ACA_LINK)?;
    let aalink = table.text(schema::AA_LINK)?;

    let records = (0..rows)
        .map(|row| RecordRow {
            record_id: row,
            record_type: record_type[row].clone(),
            planner_id: refs.planners[row],
            location_id: refs.locations[row],
            record_strid: record_strid[row].clone(),
            object_id: object_id[row],
            template_id: template_id[row].clone(),
            record_name: record_name[row].clone(),
            description: description[row].clone(),
            record_status: record_status[row].clone(),
            construct_cost: match construct_cost[row] {
                None if fill_construct_cost => Some(0.0),
                cost => cost,
            },
            related_building_permit: related[row].clone(),
            acalink: acalink[row].clone(),
            aalink: aalink[row].clone(),
            opened: refs.dates[row].opened,
            closed: refs.dates[row].closed,
        })
        .collect();
    Ok(records)
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
