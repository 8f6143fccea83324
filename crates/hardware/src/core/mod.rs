//! Cache hierarchy core.
//!
//! This module contains the per-level cache implementation and the
//! orchestrator that streams addresses through the ordered levels.

/// Ordered multi-level hierarchy and probe logic.
pub mod hierarchy;

/// Functional units (cache levels and their replacement policies).
pub mod units;

pub use self::hierarchy::{CacheHierarchy, ProbeOutcome};
pub use self::units::cache::{Access, CacheLevel};
