//! Planner dimension
//!
//! Same first-seen-wins strategy as locations; rows without a planner key
//! are left out of the dimension and get no planner reference.

use crate::error::CoreResult;
use crate::schema;
use crate::table::SourceTable;
use serde::Serialize;
use std::collections::HashMap;

/// One row of the `planner` dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planner {
    pub planner_id: usize,
    /// Business key from the source system
    pub planner_strid: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Output of [`dedupe_planners`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerDedup {
    pub planners: Vec<Planner>,
    pub refs: Vec<Option<usize>>,
}

pub fn dedupe_planners(table: &SourceTable) -> CoreResult<PlannerDedup> {
    let keys = table.text(schema::PLANNER_ID)?;
    let names = table.text(schema::PLANNER_NAME)?;
    let emails = table.text(schema::PLANNER_EMAIL)?;
    let phones = table.text(schema::PLANNER_PHONE)?;

    let mut id_of: HashMap<&str, usize> = HashMap::new();
    let mut planners: Vec<Planner> = Vec::new();

    let refs = keys
        .iter()
        .enumerate()
        .map(|(row, key)| {
            let key = key.as_deref()?;
            let id = *id_of.entry(key).or_insert_with(|| {
                planners.push(Planner {
                    planner_id: planners.len(),
                    planner_strid: key.to_string(),
                    name: names[row].clone(),
                    email: emails[row].clone(),
                    phone: phones[row].clone(),
                });
                planners.len() - 1
            });
            Some(id)
        })
        .collect();

    Ok(PlannerDedup { planners, refs })
}

#[cfg(test)]
#[path = "planner_test.rs"]
mod tests;
