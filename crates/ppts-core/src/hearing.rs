//! Hearing event pivot (`hearing_date`)

use crate::error::CoreResult;
use crate::flags::CHECKED;
use crate::pivot::{pivot, ColumnGroup, Predicate};
use crate::schema::HEARING_COLUMNS;
use crate::table::SourceTable;
use serde::Serialize;

/// One row of `hearing_date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HearingDate {
    pub hearing_id: usize,
    pub record_id: usize,
    pub hearing_type: String,
    /// The cell value of the hearing column
    pub date: String,
}

/// Emit a row per (hearing column, record) where the column is `CHECKED`.
///
/// The extract only marks that a hearing happened, so `date` carries the
/// cell value itself.
pub fn pivot_hearing_dates(table: &SourceTable) -> CoreResult<Vec<HearingDate>> {
    let groups: Vec<ColumnGroup> = HEARING_COLUMNS.iter().map(|c| ColumnGroup::single(c)).collect();
    let hits = pivot(table, &groups, Predicate::Equals(CHECKED))?;

    let mut out = Vec::with_capacity(hits.len());
    for hit in hits {
        let values = table.text(&hit.group.columns[0])?;
        out.push(HearingDate {
            hearing_id: out.len(),
            record_id: hit.record_id,
            hearing_type: hit.group.category.clone(),
            date: values[hit.record_id].clone().unwrap_or_default(),
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "hearing_test.rs"]
mod tests;
