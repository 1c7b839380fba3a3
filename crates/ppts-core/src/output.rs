//! Output table definitions
//!
//! Every normalized table has a fixed, ordered column list. The engine
//! produces rows of [`SqlValue`] in that order and a sink turns the
//! [`TableSpec`] into DDL for its own dialect.

use crate::flags::{ProjectDescription, ProjectDescriptionDetail};
use crate::hearing::HearingDate;
use crate::location::Location;
use crate::measurement::{AduArea, Measurement};
use crate::planner::Planner;
use crate::record::RecordRow;
use crate::record_type::RecordType;
use crate::relationship::RecordRelationship;
use serde::Serialize;
use std::fmt;
use SqlType::{Integer, Real, Text};

/// Storage class of an output column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SqlType {
    Integer,
    Real,
    Text,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Integer => write!(f, "integer"),
            SqlType::Real => write!(f, "real"),
            SqlType::Text => write!(f, "text"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub primary_key: bool,
}

impl ColumnSpec {
    pub const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            primary_key: false,
        }
    }

    pub const fn key(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            primary_key: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [ColumnSpec],
}

impl TableSpec {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.name)
    }
}

pub static RECORD: TableSpec = TableSpec {
    name: "record",
    columns: &[
        ColumnSpec::key("record_id", Integer),
        ColumnSpec::new("record_type", Text),
        ColumnSpec::new("planner_id", Integer),
        ColumnSpec::new("location_id", Integer),
        ColumnSpec::new("record_strid", Text),
        ColumnSpec::new("object_id", Integer),
        ColumnSpec::new("template_id", Text),
        ColumnSpec::new("record_name", Text),
        ColumnSpec::new("description", Text),
        ColumnSpec::new("record_status", Text),
        ColumnSpec::new("construct_cost", Real),
        ColumnSpec::new("related_building_permit", Text),
        ColumnSpec::new("acalink", Text),
        ColumnSpec::new("aalink", Text),
        ColumnSpec::new("year_opened", Integer),
        ColumnSpec::new("month_opened", Integer),
        ColumnSpec::new("day_opened", Integer),
        ColumnSpec::new("year_closed", Integer),
        ColumnSpec::new("month_closed", Integer),
        ColumnSpec::new("day_closed", Integer),
    ],
};

pub static PLANNER: TableSpec = TableSpec {
    name: "planner",
    columns: &[
        ColumnSpec::key("planner_id", Integer),
        ColumnSpec::new("planner_strid", Text),
        ColumnSpec::new("planner_name", Text),
        ColumnSpec::new("planner_email", Text),
        ColumnSpec::new("planner_phone", Text),
    ],
};

pub static RECORD_TYPE: TableSpec = TableSpec {
    name: "record_type",
    columns: &[
        ColumnSpec::key("record_type", Text),
        ColumnSpec::new("record_type_name", Text),
        ColumnSpec::new("record_type_subcat", Text),
        ColumnSpec::new("record_type_cat", Text),
        ColumnSpec::new("record_type_group", Text),
        ColumnSpec::new("module", Text),
    ],
};

pub static LOCATION: TableSpec = TableSpec {
    name: "location",
    columns: &[
        ColumnSpec::key("location_id", Integer),
        ColumnSpec::new("the_geom", Text),
        ColumnSpec::new("address", Text),
        ColumnSpec::new("shape_length", Real),
        ColumnSpec::new("shape_area", Real),
    ],
};

pub static PRJ_DESC: TableSpec = TableSpec {
    name: "prj_desc",
    columns: &[
        ColumnSpec::key("desc_id", Integer),
        ColumnSpec::new("record_id", Integer),
        ColumnSpec::new("desc_type", Text),
    ],
};

pub static PRJ_DESC_DETAIL: TableSpec = TableSpec {
    name: "prj_desc_detail",
    columns: &[
        ColumnSpec::key("desc_id", Integer),
        ColumnSpec::new("detail", Text),
    ],
};

pub static LAND_USE: TableSpec = TableSpec {
    name: "land_use",
    columns: &[
        ColumnSpec::key("land_use_id", Integer),
        ColumnSpec::new("record_id", Integer),
        ColumnSpec::new("land_use_type", Text),
        ColumnSpec::new("land_use_exist", Real),
        ColumnSpec::new("land_use_prop", Real),
        ColumnSpec::new("land_use_net", Real),
    ],
};

pub static PRJ_FEATURE: TableSpec = TableSpec {
    name: "prj_feature",
    columns: &[
        ColumnSpec::key("feature_id", Integer),
        ColumnSpec::new("record_id", Integer),
        ColumnSpec::new("feature_type", Text),
        ColumnSpec::new("feature_exist", Integer),
        ColumnSpec::new("feature_prop", Integer),
        ColumnSpec::new("feature_net", Integer),
    ],
};

pub static DWELLING: TableSpec = TableSpec {
    name: "dwelling",
    columns: &[
        ColumnSpec::key("dwelling_id", Integer),
        ColumnSpec::new("record_id", Integer),
        ColumnSpec::new("dwelling_type", Text),
        ColumnSpec::new("dwelling_exist", Integer),
        ColumnSpec::new("dwelling_prop", Integer),
        ColumnSpec::new("dwelling_net", Integer),
    ],
};

pub static ADU_AREA: TableSpec = TableSpec {
    name: "adu_area",
    columns: &[
        ColumnSpec::key("dwelling_id", Integer),
        ColumnSpec::new("area", Real),
    ],
};

pub static RECORD_REL: TableSpec = TableSpec {
    name: "record_rel",
    columns: &[
        ColumnSpec::key("rel_id", Integer),
        ColumnSpec::new("parent_id", Integer),
        ColumnSpec::new("child_id", Integer),
    ],
};

pub static HEARING_DATE: TableSpec = TableSpec {
    name: "hearing_date",
    columns: &[
        ColumnSpec::key("hearing_id", Integer),
        ColumnSpec::new("record_id", Integer),
        ColumnSpec::new("hearing_type", Text),
        ColumnSpec::new("date", Text),
    ],
};

/// Every output table, in creation order
pub static ALL_TABLES: [&TableSpec; 12] = [
    &RECORD,
    &PLANNER,
    &RECORD_TYPE,
    &LOCATION,
    &PRJ_DESC,
    &PRJ_DESC_DETAIL,
    &LAND_USE,
    &PRJ_FEATURE,
    &DWELLING,
    &ADU_AREA,
    &RECORD_REL,
    &HEARING_DATE,
];

/// A single cell of an output row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Quantity written to an integer column. Non-finite values are null.
    pub fn rounded(value: f64) -> Self {
        if value.is_finite() {
            SqlValue::Integer(value.round() as i64)
        } else {
            SqlValue::Null
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<usize> for SqlValue {
    fn from(value: usize) -> Self {
        SqlValue::Integer(value as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

impl From<&Option<String>> for SqlValue {
    fn from(value: &Option<String>) -> Self {
        value.as_deref().into()
    }
}

/// Rows ready for a sink, paired with the table they belong to
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTable {
    pub spec: &'static TableSpec,
    pub rows: Vec<Vec<SqlValue>>,
}

impl NamedTable {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn build<T>(spec: &'static TableSpec, items: &[T], row: impl Fn(&T) -> Vec<SqlValue>) -> Self {
        Self {
            spec,
            rows: items.iter().map(row).collect(),
        }
    }

    pub fn records(rows: &[RecordRow]) -> Self {
        Self::build(&RECORD, rows, |r| {
            vec![
                r.record_id.into(),
                (&r.record_type).into(),
                r.planner_id.into(),
                r.location_id.into(),
                (&r.record_strid).into(),
                r.object_id.map(SqlValue::rounded).unwrap_or(SqlValue::Null),
                (&r.template_id).into(),
                (&r.record_name).into(),
                (&r.description).into(),
                (&r.record_status).into(),
                r.construct_cost.into(),
                (&r.related_building_permit).into(),
                (&r.acalink).into(),
                (&r.aalink).into(),
                r.opened.year.into(),
                r.opened.month.into(),
                r.opened.day.into(),
                r.closed.year.into(),
                r.closed.month.into(),
                r.closed.day.into(),
            ]
        })
    }

    pub fn planners(rows: &[Planner]) -> Self {
        Self::build(&PLANNER, rows, |p| {
            vec![
                p.planner_id.into(),
                p.planner_strid.as_str().into(),
                (&p.name).into(),
                (&p.email).into(),
                (&p.phone).into(),
            ]
        })
    }

    pub fn record_types(rows: &[RecordType]) -> Self {
        Self::build(&RECORD_TYPE, rows, |t| {
            vec![
                t.code.as_str().into(),
                (&t.name).into(),
                (&t.subcategory).into(),
                (&t.category).into(),
                (&t.group).into(),
                (&t.module).into(),
            ]
        })
    }

    pub fn locations(rows: &[Location]) -> Self {
        Self::build(&LOCATION, rows, |l| {
            vec![
                l.location_id.into(),
                l.geometry.as_str().into(),
                (&l.address).into(),
                l.shape_length.into(),
                l.shape_area.into(),
            ]
        })
    }

    pub fn descriptions(rows: &[ProjectDescription]) -> Self {
        Self::build(&PRJ_DESC, rows, |d| {
            vec![
                d.desc_id.into(),
                d.record_id.into(),
                d.desc_type.as_str().into(),
            ]
        })
    }

    pub fn description_details(rows: &[ProjectDescriptionDetail]) -> Self {
        Self::build(&PRJ_DESC_DETAIL, rows, |d| {
            vec![d.desc_id.into(), d.detail.as_str().into()]
        })
    }

    pub fn land_uses(rows: &[Measurement]) -> Self {
        Self::build(&LAND_USE, rows, |m| {
            vec![
                m.id.into(),
                m.record_id.into(),
                m.category.as_str().into(),
                m.exist.into(),
                m.prop.into(),
                m.net.into(),
            ]
        })
    }

    pub fn project_features(rows: &[Measurement]) -> Self {
        Self::build(&PRJ_FEATURE, rows, counted_measurement)
    }

    pub fn dwellings(rows: &[Measurement]) -> Self {
        Self::build(&DWELLING, rows, counted_measurement)
    }

    pub fn adu_areas(rows: &[AduArea]) -> Self {
        Self::build(&ADU_AREA, rows, |a| {
            vec![a.dwelling_id.into(), a.area.into()]
        })
    }

    pub fn relationships(rows: &[RecordRelationship]) -> Self {
        Self {
            spec: &RECORD_REL,
            rows: rows
                .iter()
                .enumerate()
                .map(|(rel_id, r)| {
                    vec![
                        SqlValue::from(rel_id),
                        SqlValue::from(r.parent_id),
                        SqlValue::from(r.child_id),
                    ]
                })
                .collect(),
        }
    }

    pub fn hearing_dates(rows: &[HearingDate]) -> Self {
        Self::build(&HEARING_DATE, rows, |h| {
            vec![
                h.hearing_id.into(),
                h.record_id.into(),
                h.hearing_type.as_str().into(),
                h.date.as_str().into(),
            ]
        })
    }
}

/// Measurement row for a table whose quantities are integer counts
fn counted_measurement(m: &Measurement) -> Vec<SqlValue> {
    vec![
        m.id.into(),
        m.record_id.into(),
        m.category.as_str().into(),
        SqlValue::rounded(m.exist),
        SqlValue::rounded(m.prop),
        SqlValue::rounded(m.net),
    ]
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
