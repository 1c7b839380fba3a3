//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use ppts_core::{prepare, read_source, LoadConfig, LoadSummary, LogObserver, NormalizedDataset};
use std::path::Path;

use crate::cli::GlobalArgs;

/// Load `--config`, or the defaults when none is given
pub(crate) fn load_config(global: &GlobalArgs) -> Result<LoadConfig> {
    let path = global.config.as_deref().map(Path::new);
    let config = LoadConfig::load_or_default(path).context("Failed to load config")?;
    log::debug!("Using {config:?}");
    Ok(config)
}

/// Read the extract and run every normalization stage
pub(crate) fn normalize(source: &str, config: &LoadConfig) -> Result<NormalizedDataset> {
    let path = Path::new(source);
    let table = read_source(path, config)
        .with_context(|| format!("Failed to read extract {}", path.display()))?;
    log::info!("Read {} records from {}", table.row_count(), path.display());

    prepare(table, config, &LogObserver).context("Normalization failed")
}

/// Print one line per table followed by the total
pub(crate) fn print_summary(summary: &LoadSummary) {
    for table in &summary.tables {
        println!("  ✓ {} ({} rows)", table.table, table.rows);
    }
    println!();
    println!(
        "{} tables ({} total rows)",
        summary.tables.len(),
        summary.total_rows()
    );
}
