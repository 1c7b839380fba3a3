//! Parent/child record relationships
//!
//! The `children` column lists child business keys separated by commas. Each
//! key is resolved to the row position of the record carrying it; keys that
//! match no record are dropped.

use crate::error::CoreResult;
use crate::schema;
use crate::table::SourceTable;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// One row of `record_rel`, both ends expressed as record surrogate ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordRelationship {
    pub parent_id: usize,
    pub child_id: usize,
}

/// Resolve every parent/child pair, in row order then child-list order
pub fn resolve_relationships(table: &SourceTable) -> CoreResult<Vec<RecordRelationship>> {
    let record_ids = table.text(schema::RECORD_ID)?;
    let children = table.text(schema::CHILDREN)?;

    let mut position: HashMap<&str, usize> = HashMap::with_capacity(record_ids.len());
    for (row, key) in record_ids.iter().enumerate() {
        if let Some(key) = key.as_deref() {
            match position.entry(key) {
                Entry::Occupied(_) => {
                    log::warn!("Duplicate record_id '{key}' at row {row}; keeping first occurrence");
                }
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
            }
        }
    }

    let mut relationships = Vec::new();
    let mut dangling = 0usize;
    for (parent_id, list) in children.iter().enumerate() {
        let Some(list) = list.as_deref() else {
            continue;
        };
        for key in list.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            match position.get(key) {
                Some(&child_id) => relationships.push(RecordRelationship {
                    parent_id,
                    child_id,
                }),
                None => dangling += 1,
            }
        }
    }

    if dangling > 0 {
        log::debug!("Dropped {dangling} child references to unknown records");
    }
    Ok(relationships)
}

#[cfg(test)]
#[path = "relationship_test.rs"]
mod tests;
