//! Simulation driver and trace input.
//!
//! Provides the trace-file reader and the [`Simulator`] facade that wires a
//! configuration, a trace, and the final report together.

/// Top-level simulator.
pub mod simulator;

/// Trace-file parsing.
pub mod trace;

pub use simulator::{Simulator, simulate_files};
