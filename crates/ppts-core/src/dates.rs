//! Year/month/day decomposition of the opened and closed dates

use crate::error::CoreResult;
use crate::schema::{DATE_CLOSED, DATE_OPENED};
use crate::table::SourceTable;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static DATE_RE: OnceLock<Regex> = OnceLock::new();

/// `month/day/year`, anchored at the start only so a trailing time is ignored
fn date_regex() -> &'static Regex {
    DATE_RE.get_or_init(|| Regex::new(r"^(\d+)/(\d+)/(\d+)").expect("valid regex"))
}

/// Integer components of one date. All three are missing together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateParts {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
}

/// Split an `M/D/Y` string into its components.
///
/// Calendar validity is not checked, so `13/45/2019` yields month 13.
pub fn parse_date_parts(value: Option<&str>) -> DateParts {
    let Some(caps) = value.and_then(|v| date_regex().captures(v)) else {
        return DateParts::default();
    };
    let group = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<i64>().ok());
    match (group(3), group(1), group(2)) {
        (Some(year), Some(month), Some(day)) => DateParts {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        },
        _ => DateParts::default(),
    }
}

/// Decomposed opened and closed dates of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordDates {
    pub opened: DateParts,
    pub closed: DateParts,
}

/// Decompose both date columns, one entry per source row
pub fn decompose_dates(table: &SourceTable) -> CoreResult<Vec<RecordDates>> {
    let opened = table.text(DATE_OPENED)?;
    let closed = table.text(DATE_CLOSED)?;

    let dates: Vec<RecordDates> = opened
        .iter()
        .zip(closed)
        .map(|(o, c)| RecordDates {
            opened: parse_date_parts(o.as_deref()),
            closed: parse_date_parts(c.as_deref()),
        })
        .collect();

    let malformed = opened
        .iter()
        .chain(closed)
        .flatten()
        .filter(|v| !date_regex().is_match(v))
        .count();
    if malformed > 0 {
        log::debug!("{malformed} date values did not match M/D/Y and were left empty");
    }

    Ok(dates)
}

#[cfg(test)]
#[path = "dates_test.rs"]
mod tests;
