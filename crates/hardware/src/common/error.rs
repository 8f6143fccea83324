//! Error definitions for configuration, trace input, and whole-run failures.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Configuration errors:** Rejected cache descriptors, each naming the level and field at fault.
//! 2. **Trace errors:** Malformed trace lines, carrying their 1-based line number.
//! 3. **Run errors:** A single type the [`Simulator`](crate::sim::Simulator) facade surfaces to callers.
//!
//! No error here is retried; every one aborts the run.

use std::io;

use thiserror::Error;

/// A cache hierarchy description that cannot be built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The description lists no cache levels.
    #[error("cache hierarchy must contain at least one level")]
    EmptyHierarchy,

    /// The `kind` string is not `direct`, `full`, or `<N>way`.
    #[error("level `{level}`: unrecognized kind `{value}` (expected `direct`, `full`, or `<N>way`)")]
    UnknownKind {
        /// Name of the offending level.
        level: String,
        /// The rejected string.
        value: String,
    },

    /// The `replacement_policy` string is not a known policy.
    #[error(
        "level `{level}`: unrecognized replacement policy `{value}` (expected `lru`, `lfu`, `rr`, or `fifo`)"
    )]
    UnknownPolicy {
        /// Name of the offending level.
        level: String,
        /// The rejected string.
        value: String,
    },

    /// A size field is zero or not a power of two.
    #[error("level `{level}`: {field} = {value} is not a power of two")]
    NotPowerOfTwo {
        /// Name of the offending level.
        level: String,
        /// Which field was rejected.
        field: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// The block is bigger than the whole cache.
    #[error("level `{level}`: line size {line_bytes} exceeds cache size {size_bytes}")]
    LineLargerThanCache {
        /// Name of the offending level.
        level: String,
        /// Configured block size.
        line_bytes: u64,
        /// Configured total size.
        size_bytes: u64,
    },

    /// The way count is zero or does not split the blocks into a power-of-two number of sets.
    #[error("level `{level}`: {ways} ways cannot evenly partition {blocks} blocks")]
    InvalidAssociativity {
        /// Name of the offending level.
        level: String,
        /// Requested associativity.
        ways: u64,
        /// Total blocks in the level.
        blocks: u64,
    },

    /// The level holds more blocks than the simulator will allocate storage for.
    #[error("level `{level}`: {blocks} blocks exceeds the limit of {max} blocks per level")]
    TooManyBlocks {
        /// Name of the offending level.
        level: String,
        /// Total blocks in the level.
        blocks: u64,
        /// Largest accepted block count.
        max: u64,
    },

    /// The configuration file could not be read.
    #[error("failed to read cache configuration: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid JSON for the expected schema.
    #[error("failed to parse cache configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A trace file that cannot be turned into an address sequence.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be read.
    #[error("failed to read trace: {0}")]
    Io(#[from] io::Error),

    /// A non-blank line has fewer than two whitespace-separated fields.
    #[error("trace line {line}: expected `<access-type> <hex-address>`")]
    MissingField {
        /// 1-based line number.
        line: usize,
    },

    /// The address field is not a hexadecimal 64-bit value.
    #[error("trace line {line}: `{value}` is not a 64-bit hexadecimal address")]
    BadAddress {
        /// 1-based line number.
        line: usize,
        /// The rejected field.
        value: String,
    },
}

/// Any failure of a complete config-plus-trace run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Building the hierarchy failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading the trace failed.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
