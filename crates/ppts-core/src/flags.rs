//! Project description flags (`prj_desc` and `prj_desc_detail`)

use crate::error::CoreResult;
use crate::pivot::{pivot, ColumnGroup, Predicate};
use crate::schema::{DEMOLITION, PRJ_DESC_DETAILS, PRJ_DESC_FLAGS};
use crate::table::SourceTable;
use serde::Serialize;

/// Value of a ticked checkbox column
pub const CHECKED: &str = "CHECKED";

/// Value the demolition column uses in place of a ticked checkbox
pub const DEMOLITION_YES: &str = "Yes";

/// One row of `prj_desc`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescription {
    pub desc_id: usize,
    pub record_id: usize,
    pub desc_type: String,
}

/// One row of `prj_desc_detail`, keyed by the description row it annotates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptionDetail {
    pub desc_id: usize,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlagPivot {
    pub descriptions: Vec<ProjectDescription>,
    pub details: Vec<ProjectDescriptionDetail>,
}

impl FlagPivot {
    fn push(&mut self, record_id: usize, desc_type: &str) -> usize {
        let desc_id = self.descriptions.len();
        self.descriptions.push(ProjectDescription {
            desc_id,
            record_id,
            desc_type: desc_type.to_string(),
        });
        desc_id
    }
}

/// Pivot the checkbox and detail columns into description rows.
///
/// Emission order: every checkbox column matching `CHECKED`, then the
/// demolition column matching `Yes`, then each detail column wherever it
/// holds a value.
pub fn pivot_flags(table: &SourceTable) -> CoreResult<FlagPivot> {
    let mut out = FlagPivot::default();

    let checkboxes: Vec<ColumnGroup> = PRJ_DESC_FLAGS.iter().map(|c| ColumnGroup::single(c)).collect();
    for hit in pivot(table, &checkboxes, Predicate::Equals(CHECKED))? {
        out.push(hit.record_id, &hit.group.category);
    }

    let demolition = [ColumnGroup::single(DEMOLITION)];
    for hit in pivot(table, &demolition, Predicate::Equals(DEMOLITION_YES))? {
        out.push(hit.record_id, &hit.group.category);
    }

    for column in PRJ_DESC_DETAILS {
        let values = table.text(column)?;
        let group = [ColumnGroup::single(column)];
        for hit in pivot(table, &group, Predicate::AnyPresent)? {
            let desc_id = out.push(hit.record_id, column);
            if let Some(detail) = &values[hit.record_id] {
                out.details.push(ProjectDescriptionDetail {
                    desc_id,
                    detail: detail.clone(),
                });
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod tests;
