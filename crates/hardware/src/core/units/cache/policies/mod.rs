//! Cache Replacement Policies.
//!
//! Implements the per-set bookkeeping that selects victim tags in set-associative caches.
//! Each set owns one of these structures, so eviction in one set can never
//! disturb the ordering or counters of another.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used, ties broken by insertion order.
//! - `RoundRobin`: Rotating per-set victim pointer.
//! - `Fifo`: First-In, First-Out (default when a level names no policy).

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Round-robin replacement policy.
pub mod round_robin;

pub use fifo::FifoSet;
pub use lfu::LfuSet;
pub use lru::LruSet;
pub use round_robin::RoundRobinSet;

use crate::config::ReplacementPolicy;

/// Trait for the resident-tag bookkeeping of a single set.
///
/// Defines the interface for lookups, fills, and inspection.
pub trait SetPolicy {
    /// Looks up `tag`, updating usage state on a hit.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag being accessed.
    ///
    /// # Returns
    ///
    /// `true` if `tag` is resident.
    fn touch(&mut self, tag: u64) -> bool;

    /// Installs `tag` after a miss, evicting a victim if the set is full.
    ///
    /// The caller guarantees `tag` is not already resident.
    ///
    /// # Returns
    ///
    /// The evicted tag, if any.
    fn fill(&mut self, tag: u64) -> Option<u64>;

    /// Reports residency without touching usage state.
    fn contains(&self, tag: u64) -> bool;

    /// Number of resident tags.
    fn len(&self) -> usize;

    /// Whether no tag is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resident tags in the policy's own order (next victim last for LRU/FIFO).
    fn residents(&self) -> Vec<u64>;
}

/// One set's bookkeeping, for whichever policy its level uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicySet {
    /// Recency stack.
    Lru(LruSet),
    /// Frequency counters.
    Lfu(LfuSet),
    /// Rotating pointer.
    RoundRobin(RoundRobinSet),
    /// Insertion queue.
    Fifo(FifoSet),
}

impl PolicySet {
    /// Creates an empty set of `ways` slots governed by `policy`.
    pub fn new(policy: ReplacementPolicy, ways: usize) -> Self {
        match policy {
            ReplacementPolicy::Lru => Self::Lru(LruSet::new(ways)),
            ReplacementPolicy::Lfu => Self::Lfu(LfuSet::new(ways)),
            ReplacementPolicy::RoundRobin => Self::RoundRobin(RoundRobinSet::new(ways)),
            ReplacementPolicy::Fifo => Self::Fifo(FifoSet::new(ways)),
        }
    }

    /// The policy this set follows.
    pub const fn policy(&self) -> ReplacementPolicy {
        match self {
            Self::Lru(_) => ReplacementPolicy::Lru,
            Self::Lfu(_) => ReplacementPolicy::Lfu,
            Self::RoundRobin(_) => ReplacementPolicy::RoundRobin,
            Self::Fifo(_) => ReplacementPolicy::Fifo,
        }
    }
}

impl SetPolicy for PolicySet {
    #[inline]
    fn touch(&mut self, tag: u64) -> bool {
        match self {
            Self::Lru(set) => set.touch(tag),
            Self::Lfu(set) => set.touch(tag),
            Self::RoundRobin(set) => set.touch(tag),
            Self::Fifo(set) => set.touch(tag),
        }
    }

    #[inline]
    fn fill(&mut self, tag: u64) -> Option<u64> {
        match self {
            Self::Lru(set) => set.fill(tag),
            Self::Lfu(set) => set.fill(tag),
            Self::RoundRobin(set) => set.fill(tag),
            Self::Fifo(set) => set.fill(tag),
        }
    }

    fn contains(&self, tag: u64) -> bool {
        match self {
            Self::Lru(set) => set.contains(tag),
            Self::Lfu(set) => set.contains(tag),
            Self::RoundRobin(set) => set.contains(tag),
            Self::Fifo(set) => set.contains(tag),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Lru(set) => set.len(),
            Self::Lfu(set) => set.len(),
            Self::RoundRobin(set) => set.len(),
            Self::Fifo(set) => set.len(),
        }
    }

    fn residents(&self) -> Vec<u64> {
        match self {
            Self::Lru(set) => set.residents(),
            Self::Lfu(set) => set.residents(),
            Self::RoundRobin(set) => set.residents(),
            Self::Fifo(set) => set.residents(),
        }
    }
}
