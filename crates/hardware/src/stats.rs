//! Simulation statistics collection and reporting.
//!
//! This module holds the final counters of a run. It provides:
//! 1. **Per-level stats:** Hits and misses for each level, in hierarchy order.
//! 2. **Main memory:** Accesses that missed every level.
//! 3. **Output:** A JSON report (`serde`) and a human-readable summary table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final counters for one cache level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Level name from the configuration.
    pub name: String,
    /// Accesses that hit in this level.
    pub hits: u64,
    /// Accesses that reached this level and missed.
    pub misses: u64,
}

impl LevelStats {
    /// Accesses that reached this level.
    pub const fn visits(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of visits that hit; 0.0 for a level never visited.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        match self.visits() {
            0 => 0.0,
            v => self.hits as f64 / v as f64,
        }
    }
}

/// Final report of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-level counters, closest to the processor first.
    pub caches: Vec<LevelStats>,
    /// Accesses satisfied by none of the levels.
    pub main_memory_accesses: u64,
}

impl SimulationReport {
    /// Serializes the report as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Number of trace entries replayed (visits to the first level).
    pub fn accesses(&self) -> u64 {
        self.caches.first().map_or(0, LevelStats::visits)
    }

    /// Prints the summary table to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for SimulationReport {
    /// Formats the summary table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "CACHE HIERARCHY SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "accesses                 {}", self.accesses())?;
        writeln!(f, "----------------------------------------------------------")?;
        for level in &self.caches {
            writeln!(
                f,
                "  {:<8} hits {:<10} misses {:<10} ({:.2}% hit)",
                level.name,
                level.hits,
                level.misses,
                level.hit_rate() * 100.0
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        write!(f, "main_memory_accesses     {}", self.main_memory_accesses)
    }
}
