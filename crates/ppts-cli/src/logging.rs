//! Logging setup
//!
//! Library crates log through the `log` facade; the subscriber installed here
//! picks those records up through its `tracing-log` bridge. `RUST_LOG`
//! overrides the default filter.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,ppts=info,ppts_core=info,ppts_db=info";
const VERBOSE_FILTER: &str = "warn,ppts=debug,ppts_core=debug,ppts_db=debug";

pub(crate) fn init(verbose: bool) -> Result<()> {
    let default = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
