//! EXIST/PROP/NET measurement pivots
//!
//! Land use, project features, and dwelling units share one layout: for
//! each category there are `{prefix}_{category}_EXIST`, `_PROP`, and `_NET`
//! columns. A fact row is emitted per (category, record) when any of the
//! three holds a value; missing values are written as zero.

use crate::error::CoreResult;
use crate::pivot::{pivot, ColumnGroup, Predicate};
use crate::schema::{
    measurement_column, Measure, ADU_CATEGORIES, DWELLING_CATEGORIES, DWELLING_PREFIX,
    LAND_USE_CATEGORIES, LAND_USE_PREFIX, PRJ_FEATURE_CATEGORIES, PRJ_FEATURE_DERIVED_PROP,
    PRJ_FEATURE_OTHER, PRJ_FEATURE_OTHER_NAME, PRJ_FEATURE_PREFIX,
};
use crate::table::{Column, SourceTable};
use serde::Serialize;

/// Label of an "other" project feature without a name
const UNKNOWN_FEATURE: &str = "unknown";

/// A fixed prefix plus the categories pivoted under it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementFamily {
    pub prefix: &'static str,
    pub categories: &'static [&'static str],
}

pub const LAND_USE: MeasurementFamily = MeasurementFamily {
    prefix: LAND_USE_PREFIX,
    categories: LAND_USE_CATEGORIES,
};

pub const PRJ_FEATURE: MeasurementFamily = MeasurementFamily {
    prefix: PRJ_FEATURE_PREFIX,
    categories: PRJ_FEATURE_CATEGORIES,
};

pub const DWELLING: MeasurementFamily = MeasurementFamily {
    prefix: DWELLING_PREFIX,
    categories: DWELLING_CATEGORIES,
};

/// One row of `land_use`, `prj_feature`, or `dwelling`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Surrogate id, the row's position in its table
    pub id: usize,
    pub record_id: usize,
    pub category: String,
    pub exist: f64,
    pub prop: f64,
    pub net: f64,
}

/// One row of `adu_area`, keyed by the dwelling row it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AduArea {
    pub dwelling_id: usize,
    pub area: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DwellingPivot {
    pub dwellings: Vec<Measurement>,
    pub adu_areas: Vec<AduArea>,
}

/// The EXIST/PROP/NET columns of one category
struct Triplet<'t> {
    exist: &'t [Option<f64>],
    prop: &'t [Option<f64>],
    net: &'t [Option<f64>],
}

impl<'t> Triplet<'t> {
    fn of(table: &'t SourceTable, prefix: &str, category: &str) -> CoreResult<Self> {
        Ok(Self {
            exist: table.number(&measurement_column(prefix, category, Measure::Exist))?,
            prop: table.number(&measurement_column(prefix, category, Measure::Prop))?,
            net: table.number(&measurement_column(prefix, category, Measure::Net))?,
        })
    }

    fn emit(&self, out: &mut Vec<Measurement>, record_id: usize, category: String) -> usize {
        let id = out.len();
        out.push(Measurement {
            id,
            record_id,
            category,
            exist: self.exist[record_id].unwrap_or(0.0),
            prop: self.prop[record_id].unwrap_or(0.0),
            net: self.net[record_id].unwrap_or(0.0),
        });
        id
    }
}

/// Pivot every category of `family`, appending to `out`
fn pivot_family_into(
    table: &SourceTable,
    family: &MeasurementFamily,
    out: &mut Vec<Measurement>,
) -> CoreResult<()> {
    for category in family.categories {
        let group = [ColumnGroup::measurement(family.prefix, category, &Measure::TRIPLET)];
        let triplet = Triplet::of(table, family.prefix, category)?;
        for hit in pivot(table, &group, Predicate::AnyPresent)? {
            triplet.emit(out, hit.record_id, category.to_string());
        }
    }
    Ok(())
}

/// Pivot one measurement family
pub fn pivot_measurements(
    table: &SourceTable,
    family: &MeasurementFamily,
) -> CoreResult<Vec<Measurement>> {
    let mut out = Vec::new();
    pivot_family_into(table, family, &mut out)?;
    Ok(out)
}

/// The `land_use` table
pub fn pivot_land_use(table: &SourceTable) -> CoreResult<Vec<Measurement>> {
    pivot_measurements(table, &LAND_USE)
}

/// The `prj_feature` table, including the free-text "other" feature
pub fn pivot_project_features(table: &SourceTable) -> CoreResult<Vec<Measurement>> {
    let mut out = pivot_measurements(table, &PRJ_FEATURE)?;

    let names = table.text(PRJ_FEATURE_OTHER_NAME)?;
    let other = [ColumnGroup::measurement(
        PRJ_FEATURE_PREFIX,
        PRJ_FEATURE_OTHER,
        &Measure::TRIPLET,
    )];
    let triplet = Triplet::of(table, PRJ_FEATURE_PREFIX, PRJ_FEATURE_OTHER)?;
    for hit in pivot(table, &other, Predicate::AnyPresent)? {
        let name = names[hit.record_id].as_deref().unwrap_or(UNKNOWN_FEATURE);
        triplet.emit(&mut out, hit.record_id, format!("OTHER: {name}"));
    }
    Ok(out)
}

/// The `dwelling` table and its `adu_area` companion.
///
/// ADU categories also count their AREA column when deciding whether a row
/// exists, and add an area row whenever AREA holds a value.
pub fn pivot_dwellings(table: &SourceTable) -> CoreResult<DwellingPivot> {
    let mut out = DwellingPivot::default();
    pivot_family_into(table, &DWELLING, &mut out.dwellings)?;

    let with_area = [Measure::Exist, Measure::Prop, Measure::Net, Measure::Area];
    for category in ADU_CATEGORIES {
        let group = [ColumnGroup::measurement(DWELLING_PREFIX, category, &with_area)];
        let triplet = Triplet::of(table, DWELLING_PREFIX, category)?;
        let areas = table.number(&measurement_column(DWELLING_PREFIX, category, Measure::Area))?;
        for hit in pivot(table, &group, Predicate::AnyPresent)? {
            let dwelling_id = triplet.emit(&mut out.dwellings, hit.record_id, category.to_string());
            if let Some(area) = areas[hit.record_id] {
                out.adu_areas.push(AduArea { dwelling_id, area });
            }
        }
    }
    Ok(out)
}

/// Proposed value derived from existing and net values
pub fn proposed_value(exist: Option<f64>, net: Option<f64>) -> Option<f64> {
    match (exist, net) {
        (exist, None) => exist,
        (None, net) => net,
        (Some(exist), Some(net)) => Some(exist + net),
    }
}

/// Overwrite the PROP column of the derived project features (stories,
/// loading) with the value computed from EXIST and NET.
pub fn derive_proposed(table: &mut SourceTable) -> CoreResult<()> {
    for category in PRJ_FEATURE_DERIVED_PROP {
        let exist = table.number(&measurement_column(PRJ_FEATURE_PREFIX, category, Measure::Exist))?;
        let net = table.number(&measurement_column(PRJ_FEATURE_PREFIX, category, Measure::Net))?;
        let prop: Vec<Option<f64>> = exist
            .iter()
            .zip(net)
            .map(|(e, n)| proposed_value(*e, *n))
            .collect();
        table.set_column(
            measurement_column(PRJ_FEATURE_PREFIX, category, Measure::Prop),
            Column::Number(prop),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "measurement_test.rs"]
mod tests;
