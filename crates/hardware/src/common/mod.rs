//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every cache level:
//! 1. **Address Layout:** Tag/index/offset decomposition with exact, integer-derived bit widths.
//! 2. **Error Handling:** Configuration, trace, and run error types.

/// Address decomposition (tag, index, offset).
pub mod addr;

/// Error types for configuration, trace input, and simulation runs.
pub mod error;

pub use addr::{AddressLayout, Decomposed, exact_log2};
pub use error::{ConfigError, SimError, TraceError};
