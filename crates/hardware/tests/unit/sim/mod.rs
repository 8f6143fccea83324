//! Simulation driver tests.

/// End-to-end runs through the `Simulator` facade.
pub mod simulator;
