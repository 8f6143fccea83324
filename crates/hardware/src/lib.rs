//! Trace-driven cache hierarchy simulator library.
//!
//! This crate replays a sequence of memory addresses through one or more cache
//! levels and counts, per level, how many accesses hit and missed:
//! 1. **Core:** Direct-mapped and set-associative levels, LRU/LFU/round-robin/FIFO replacement, and the ordered hierarchy.
//! 2. **Config:** JSON level descriptors validated into exact power-of-two geometries.
//! 3. **Simulation:** Trace reader and a facade running config + trace to a report.
//! 4. **Stats:** Per-level hits/misses and main-memory accesses, as JSON or a summary table.

/// Common types (address layout, errors).
pub mod common;
/// Hierarchy configuration (raw descriptors, kinds, policies, validated levels).
pub mod config;
/// Cache levels, replacement policies, and the hierarchy.
pub mod core;
/// Trace reader and simulator facade.
pub mod sim;
/// Final statistics and report output.
pub mod stats;

/// Root configuration type; deserialize from JSON with `HierarchyConfig::from_path`.
pub use crate::config::HierarchyConfig;
/// Ordered levels; drive with `probe` or `run`.
pub use crate::core::CacheHierarchy;
/// Config + trace facade.
pub use crate::sim::Simulator;
/// Final per-level counters.
pub use crate::stats::SimulationReport;
