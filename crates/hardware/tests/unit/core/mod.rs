//! Cache core tests.


/// Per-level cache units.
pub mod units;
