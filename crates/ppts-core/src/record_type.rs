//! Record type resolution
//!
//! Every distinct raw `record_type_category` value is assigned a three-letter
//! code. Values that already are three characters (and the literal
//! `"Other"`) are their own code; anything else must carry a parenthesized
//! acronym in the display name of at least one row with that value.

use crate::error::{CoreError, CoreResult};
use crate::schema;
use crate::table::SourceTable;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Raw category kept verbatim as its own code
const OTHER: &str = "Other";

static STANDARD_CODE_RE: OnceLock<Regex> = OnceLock::new();
static ACRONYM_RE: OnceLock<Regex> = OnceLock::new();

fn standard_code_regex() -> &'static Regex {
    STANDARD_CODE_RE.get_or_init(|| Regex::new(r"^(...)$").expect("valid regex"))
}

fn acronym_regex() -> &'static Regex {
    ACRONYM_RE.get_or_init(|| Regex::new(r"^.* \((...)\)").expect("valid regex"))
}

/// One row of the `record_type` dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordType {
    /// Three-letter code, primary key
    pub code: String,
    /// Raw category value the row was built from
    pub raw_value: String,
    pub name: Option<String>,
    pub subcategory: Option<String>,
    pub category: Option<String>,
    pub group: Option<String>,
    pub module: Option<String>,
}

/// Output of [`resolve_record_types`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTypeResolution {
    /// The code table, in first-seen order of raw values
    pub types: Vec<RecordType>,
    /// The category column rewritten to codes, one entry per source row
    pub codes: Vec<Option<String>>,
}

/// Extract the acronym from a display name such as
/// `"Conditional Use Authorization (CUA)"`
pub fn extract_acronym(display_name: &str) -> Option<&str> {
    acronym_regex()
        .captures(display_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

fn is_standard_code(raw: &str) -> bool {
    raw == OTHER || standard_code_regex().is_match(raw)
}

/// Build the code table and the rewritten category column
pub fn resolve_record_types(table: &SourceTable) -> CoreResult<RecordTypeResolution> {
    let raw = table.text(schema::RECORD_TYPE_CATEGORY)?;
    let names = table.text(schema::RECORD_TYPE_NAME)?;
    let categories = table.text(schema::RECORD_TYPE_TYPE)?;
    let subcategories = table.text(schema::RECORD_TYPE_SUBTYPE)?;
    let groups = table.text(schema::RECORD_TYPE_GROUP)?;
    let modules = table.text(schema::MODULE)?;

    // Distinct raw values in first-seen order, each with every row bearing it
    let mut order: Vec<&str> = Vec::new();
    let mut rows_by_value: HashMap<&str, Vec<usize>> = HashMap::new();
    for (row, value) in raw.iter().enumerate() {
        let Some(value) = value.as_deref() else {
            continue;
        };
        rows_by_value
            .entry(value)
            .or_insert_with(|| {
                order.push(value);
                Vec::new()
            })
            .push(row);
    }

    let mut types: Vec<RecordType> = Vec::new();
    let mut code_of: HashMap<&str, String> = HashMap::new();
    let mut type_by_code: HashMap<String, usize> = HashMap::new();

    for value in order {
        let rows = &rows_by_value[value];
        let first = rows[0];

        let code = if is_standard_code(value) {
            value.to_string()
        } else {
            rows.iter()
                .find_map(|&row| names[row].as_deref().and_then(extract_acronym))
                .map(str::to_string)
                .ok_or_else(|| CoreError::UnresolvableCategory {
                    value: value.to_string(),
                })?
        };

        if let Some(&existing) = type_by_code.get(&code) {
            log::debug!(
                "Record type '{}' shares code {} with '{}'",
                value,
                code,
                types[existing].raw_value
            );
        } else {
            type_by_code.insert(code.clone(), types.len());
            types.push(RecordType {
                code: code.clone(),
                raw_value: value.to_string(),
                name: names[first].clone(),
                subcategory: subcategories[first].clone(),
                category: categories[first].clone(),
                group: groups[first].clone(),
                module: modules[first].clone(),
            });
        }
        code_of.insert(value, code);
    }

    let codes = raw
        .iter()
        .map(|value| match value.as_deref() {
            None => Ok(None),
            Some(v) => code_of
                .get(v)
                .cloned()
                .map(Some)
                .ok_or_else(|| CoreError::UnknownCategory {
                    value: v.to_string(),
                }),
        })
        .collect::<CoreResult<Vec<_>>>()?;

    Ok(RecordTypeResolution { types, codes })
}

#[cfg(test)]
#[path = "record_type_test.rs"]
mod tests;
