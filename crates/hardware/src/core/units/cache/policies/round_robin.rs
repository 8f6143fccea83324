//! Round-Robin Replacement Policy.
//!
//! This policy walks a per-set pointer over the physical ways. Until the set
//! is full, new tags take the next free way in order. Once full, the tag in
//! the way under the pointer is replaced in place and the pointer advances by
//! one, modulo the associativity. Hits never move the pointer.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(W) lookup, no state change
//!   - `fill()`: O(1)
//! - **Space Complexity:** O(W) per set plus one counter
//! - **Hardware Cost:** Minimal - single counter per set

use super::SetPolicy;

/// Round-robin state for one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRobinSet {
    /// Resident tags by way.
    slots: Vec<u64>,
    /// Next way to evict once the set is full.
    next_way: usize,
    ways: usize,
}

impl RoundRobinSet {
    /// Creates an empty round-robin set.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    pub fn new(ways: usize) -> Self {
        Self {
            slots: Vec::with_capacity(ways),
            next_way: 0,
            ways,
        }
    }

    /// Current position of the eviction pointer.
    pub const fn pointer(&self) -> usize {
        self.next_way
    }
}

impl SetPolicy for RoundRobinSet {
    fn touch(&mut self, tag: u64) -> bool {
        self.slots.contains(&tag)
    }

    fn fill(&mut self, tag: u64) -> Option<u64> {
        if self.slots.len() < self.ways {
            self.slots.push(tag);
            return None;
        }
        let way = self.next_way;
        self.next_way = (way + 1) % self.ways;
        Some(std::mem::replace(&mut self.slots[way], tag))
    }

    fn contains(&self, tag: u64) -> bool {
        self.slots.contains(&tag)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    /// Way order.
    fn residents(&self) -> Vec<u64> {
        self.slots.clone()
    }
}
