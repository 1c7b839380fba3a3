//! Pipeline orchestration
//!
//! Runs every normalization stage over one source table in a fixed order.
//! Category codes are written back into the source table before anything
//! reads them, and derived project-feature values are written before the
//! feature pivot. Any error aborts before a single output table exists.

use crate::config::LoadConfig;
use crate::dates::decompose_dates;
use crate::error::CoreResult;
use crate::flags::{pivot_flags, FlagPivot};
use crate::hearing::{pivot_hearing_dates, HearingDate};
use crate::location::{dedupe_locations, Location};
use crate::measurement::{
    derive_proposed, pivot_dwellings, pivot_land_use, pivot_project_features, DwellingPivot,
    Measurement,
};
use crate::observe::{Stage, StageObserver, StageTimer};
use crate::output::NamedTable;
use crate::planner::{dedupe_planners, Planner};
use crate::record::{build_records, RecordRefs, RecordRow};
use crate::record_type::{resolve_record_types, RecordType};
use crate::relationship::{resolve_relationships, RecordRelationship};
use crate::schema::RECORD_TYPE_CATEGORY;
use crate::table::{Column, SourceTable};
use serde::Serialize;

/// Every table derived from one source table
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    pub record_types: Vec<RecordType>,
    pub relationships: Vec<RecordRelationship>,
    pub locations: Vec<Location>,
    pub planners: Vec<Planner>,
    pub flags: FlagPivot,
    pub land_uses: Vec<Measurement>,
    pub project_features: Vec<Measurement>,
    pub dwellings: DwellingPivot,
    pub hearing_dates: Vec<HearingDate>,
    pub records: Vec<RecordRow>,
}

impl NormalizedDataset {
    /// Output tables in creation order
    pub fn tables(&self) -> Vec<NamedTable> {
        vec![
            NamedTable::records(&self.records),
            NamedTable::planners(&self.planners),
            NamedTable::record_types(&self.record_types),
            NamedTable::locations(&self.locations),
            NamedTable::descriptions(&self.flags.descriptions),
            NamedTable::description_details(&self.flags.details),
            NamedTable::land_uses(&self.land_uses),
            NamedTable::project_features(&self.project_features),
            NamedTable::dwellings(&self.dwellings.dwellings),
            NamedTable::adu_areas(&self.dwellings.adu_areas),
            NamedTable::relationships(&self.relationships),
            NamedTable::hearing_dates(&self.hearing_dates),
        ]
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary::from_tables(&self.tables())
    }
}

/// Row count of one output table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: usize,
}

/// Row counts of every output table, in creation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub tables: Vec<TableCount>,
}

impl LoadSummary {
    pub fn from_tables(tables: &[NamedTable]) -> Self {
        Self {
            tables: tables
                .iter()
                .map(|t| TableCount {
                    table: t.name(),
                    rows: t.len(),
                })
                .collect(),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn rows(&self, table: &str) -> Option<usize> {
        self.tables.iter().find(|t| t.table == table).map(|t| t.rows)
    }
}

/// Normalize one source table
pub fn prepare(
    mut table: SourceTable,
    config: &LoadConfig,
    observer: &dyn StageObserver,
) -> CoreResult<NormalizedDataset> {
    log::debug!("Normalizing {} source rows", table.row_count());

    let timer = StageTimer::start(observer, Stage::RecordType);
    let resolution = resolve_record_types(&table)?;
    table.set_column(RECORD_TYPE_CATEGORY, Column::Text(resolution.codes))?;
    let record_types = resolution.types;
    timer.finish(record_types.len());

    let timer = StageTimer::start(observer, Stage::RecordRel);
    let relationships = resolve_relationships(&table)?;
    timer.finish(relationships.len());

    let timer = StageTimer::start(observer, Stage::Location);
    let locations = dedupe_locations(&table)?;
    timer.finish(locations.locations.len());

    let timer = StageTimer::start(observer, Stage::Planner);
    let planners = dedupe_planners(&table)?;
    timer.finish(planners.planners.len());

    let timer = StageTimer::start(observer, Stage::PrjDesc);
    let flags = pivot_flags(&table)?;
    timer.finish(flags.descriptions.len() + flags.details.len());

    let timer = StageTimer::start(observer, Stage::LandUse);
    let land_uses = pivot_land_use(&table)?;
    timer.finish(land_uses.len());

    let timer = StageTimer::start(observer, Stage::PrjFeature);
    derive_proposed(&mut table)?;
    let project_features = pivot_project_features(&table)?;
    timer.finish(project_features.len());

    let timer = StageTimer::start(observer, Stage::Dwelling);
    let dwellings = pivot_dwellings(&table)?;
    timer.finish(dwellings.dwellings.len() + dwellings.adu_areas.len());

    let timer = StageTimer::start(observer, Stage::Dates);
    let dates = decompose_dates(&table)?;
    timer.finish(dates.len());

    let timer = StageTimer::start(observer, Stage::HearingDate);
    let hearing_dates = pivot_hearing_dates(&table)?;
    timer.finish(hearing_dates.len());

    let timer = StageTimer::start(observer, Stage::Record);
    let refs = RecordRefs {
        locations: &locations.refs,
        planners: &planners.refs,
        dates: &dates,
    };
    let records = build_records(&table, &refs, config.fill_construct_cost)?;
    timer.finish(records.len());

    Ok(NormalizedDataset {
        record_types,
        relationships,
        locations: locations.locations,
        planners: planners.planners,
        flags,
        land_uses,
        project_features,
        dwellings,
        hearing_dates,
        records,
    })
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
