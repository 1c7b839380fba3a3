//! Stage instrumentation
//!
//! The pipeline reports progress through an injected [`StageObserver`]
//! rather than a process-wide timer. Each stage is wrapped in a
//! [`StageTimer`] that is started explicitly and finished with the number of
//! rows the stage produced.

use std::fmt;
use std::time::{Duration, Instant};

/// A unit of work in the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    RecordType,
    RecordRel,
    Location,
    Planner,
    PrjDesc,
    LandUse,
    PrjFeature,
    Dwelling,
    Dates,
    HearingDate,
    Record,
    Load,
}

impl Stage {
    /// Human-readable description used in progress output
    pub fn label(self) -> &'static str {
        match self {
            Stage::RecordType => "record_type table",
            Stage::RecordRel => "record_rel table",
            Stage::Location => "location table",
            Stage::Planner => "planner table",
            Stage::PrjDesc => "prj_desc tables",
            Stage::LandUse => "land_use table",
            Stage::PrjFeature => "prj_feature table",
            Stage::Dwelling => "dwelling tables",
            Stage::Dates => "year/month/day",
            Stage::HearingDate => "hearing date table",
            Stage::Record => "record table",
            Stage::Load => "database",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives start/finish notifications for each pipeline stage
pub trait StageObserver {
    fn stage_started(&self, stage: Stage);

    fn stage_finished(&self, stage: Stage, elapsed: Duration, rows: usize);
}

/// Reports stages through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn stage_started(&self, stage: Stage) {
        log::info!("Generating {stage}");
    }

    fn stage_finished(&self, stage: Stage, elapsed: Duration, rows: usize) {
        log::info!(
            "Finished {stage}: {rows} rows in {:.2}s",
            elapsed.as_secs_f64()
        );
    }
}

/// Discards all notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StageObserver for NoopObserver {
    fn stage_started(&self, _stage: Stage) {}

    fn stage_finished(&self, _stage: Stage, _elapsed: Duration, _rows: usize) {}
}

/// Scoped timer for one stage
///
/// Dropping a timer without calling [`finish`](Self::finish) reports nothing,
/// so a stage that fails is never reported as finished.
#[must_use = "call finish() once the stage has produced its rows"]
pub struct StageTimer<'a> {
    observer: &'a dyn StageObserver,
    stage: Stage,
    started: Instant,
}

impl<'a> StageTimer<'a> {
    pub fn start(observer: &'a dyn StageObserver, stage: Stage) -> Self {
        observer.stage_started(stage);
        Self {
            observer,
            stage,
            started: Instant::now(),
        }
    }

    pub fn finish(self, rows: usize) {
        self.observer
            .stage_finished(self.stage, self.started.elapsed(), rows);
    }
}

#[cfg(test)]
#[path = "observe_test.rs"]
mod tests;
