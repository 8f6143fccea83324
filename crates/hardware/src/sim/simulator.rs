//! Simulator: owns a cache hierarchy and replays traces through it.

use std::path::Path;

use tracing::info;

use crate::common::{ConfigError, SimError};
use crate::config::HierarchyConfig;
use crate::core::CacheHierarchy;
use crate::sim::trace;
use crate::stats::SimulationReport;

/// Top-level simulator for one configuration.
///
/// Each instance owns its hierarchy exclusively. Independent configurations or
/// traces may run on separate instances in parallel; a single instance is
/// strictly sequential.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// The levels being simulated.
    pub hierarchy: CacheHierarchy,
}

impl Simulator {
    /// Validates `config` and builds an empty hierarchy from it.
    pub fn new(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        let hierarchy = CacheHierarchy::from_config(config)?;
        info!(levels = hierarchy.len(), "cache hierarchy ready");
        Ok(Self { hierarchy })
    }

    /// Replays `trace` in order through the hierarchy.
    ///
    /// # Returns
    ///
    /// Number of addresses processed.
    pub fn run<I>(&mut self, trace: I) -> u64
    where
        I: IntoIterator<Item = u64>,
    {
        self.hierarchy.run(trace)
    }

    /// Current counters of every level.
    pub fn report(&self) -> SimulationReport {
        self.hierarchy.report()
    }
}

/// Runs one configuration file against one trace file.
///
/// # Arguments
///
/// * `config_path` - JSON hierarchy description.
/// * `trace_path` - Text trace, one `<access-type> <hex-address>` per line.
///
/// # Returns
///
/// The final report, or the first configuration or trace error.
pub fn simulate_files(
    config_path: impl AsRef<Path>,
    trace_path: impl AsRef<Path>,
) -> Result<SimulationReport, SimError> {
    let config = HierarchyConfig::from_path(config_path)?;
    let mut sim = Simulator::new(&config)?;
    let addrs = trace::read_trace(trace_path)?;
    let _ = sim.run(addrs);
    Ok(sim.report())
}
