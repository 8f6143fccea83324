//! Functional units.
//!
//! This module contains the cache level implementation, covering both
//! direct-mapped and set-associative organizations and their replacement
//! policies.

/// Cache level implementation with replacement policies.
pub mod cache;
