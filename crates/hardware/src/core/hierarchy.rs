//! Multi-level cache hierarchy.
//!
//! Owns the ordered levels (L1 first) and streams addresses through them. Every
//! address probes from level 0 downward and stops at the first hit, so a hit in
//! L1 never touches L2 or beyond. An address that misses everywhere is a
//! main-memory access; their total is the last level's miss count.
//!
//! Addresses must be fed strictly in trace order. Replacement state in one level
//! depends on every earlier access to it, so a run is inherently sequential.

use tracing::info;

use crate::common::ConfigError;
use crate::config::{HierarchyConfig, LevelSpec};
use crate::core::units::cache::CacheLevel;
use crate::stats::{LevelStats, SimulationReport};

/// Where a probed address was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOutcome {
    /// Hit in the level at this zero-based position.
    Level(usize),
    /// Missed in every level.
    MainMemory,
}

/// An ordered, non-empty sequence of cache levels.
#[derive(Debug, Clone)]
pub struct CacheHierarchy {
    levels: Vec<CacheLevel>,
}

impl CacheHierarchy {
    /// Builds a hierarchy from already-constructed levels.
    ///
    /// # Returns
    ///
    /// [`ConfigError::EmptyHierarchy`] if `levels` is empty.
    pub fn new(levels: Vec<CacheLevel>) -> Result<Self, ConfigError> {
        if levels.is_empty() {
            return Err(ConfigError::EmptyHierarchy);
        }
        Ok(Self { levels })
    }

    /// Builds empty levels from validated specifications, in order.
    pub fn from_specs(specs: &[LevelSpec]) -> Result<Self, ConfigError> {
        Self::new(specs.iter().map(CacheLevel::new).collect())
    }

    /// Validates a raw configuration and builds the hierarchy it describes.
    pub fn from_config(config: &HierarchyConfig) -> Result<Self, ConfigError> {
        Self::from_specs(&config.validate()?)
    }

    /// Probes `addr` from the first level until one hits.
    ///
    /// Levels after the hitting one are not visited.
    pub fn probe(&mut self, addr: u64) -> ProbeOutcome {
        for (position, level) in self.levels.iter_mut().enumerate() {
            if level.visit(addr).is_hit() {
                return ProbeOutcome::Level(position);
            }
        }
        ProbeOutcome::MainMemory
    }

    /// Probes every address of `trace` in order.
    ///
    /// # Returns
    ///
    /// Number of addresses processed.
    pub fn run<I>(&mut self, trace: I) -> u64
    where
        I: IntoIterator<Item = u64>,
    {
        let mut processed = 0u64;
        for addr in trace {
            let _ = self.probe(addr);
            processed += 1;
        }
        info!(
            accesses = processed,
            main_memory = self.main_memory_accesses(),
            "trace replay finished"
        );
        processed
    }

    /// Levels in probe order.
    pub fn levels(&self) -> &[CacheLevel] {
        &self.levels
    }

    /// Number of levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always `false`; a hierarchy has at least one level.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Accesses that missed every level: the last level's `visits - hits`.
    pub fn main_memory_accesses(&self) -> u64 {
        self.levels.last().map_or(0, CacheLevel::misses)
    }

    /// Snapshot of the per-level counters.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            caches: self
                .levels
                .iter()
                .map(|level| LevelStats {
                    name: level.name().to_owned(),
                    hits: level.hits(),
                    misses: level.misses(),
                })
                .collect(),
            main_memory_accesses: self.main_memory_accesses(),
        }
    }
}
