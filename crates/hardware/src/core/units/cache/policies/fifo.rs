//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the oldest tag in a set, regardless of how recently or
//! how often it was accessed. Hits leave the queue untouched.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(W) lookup, no reordering
//!   - `fill()`: O(1)
//! - **Space Complexity:** O(W) per set
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot lines)

use std::collections::VecDeque;

use super::SetPolicy;

/// FIFO state for one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoSet {
    /// Resident tags, oldest at the front.
    queue: VecDeque<u64>,
    ways: usize,
}

impl FifoSet {
    /// Creates an empty FIFO set.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    pub fn new(ways: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(ways),
            ways,
        }
    }
}

impl SetPolicy for FifoSet {
    fn touch(&mut self, tag: u64) -> bool {
        self.queue.contains(&tag)
    }

    fn fill(&mut self, tag: u64) -> Option<u64> {
        let evicted = if self.queue.len() >= self.ways {
            self.queue.pop_front()
        } else {
            None
        };
        self.queue.push_back(tag);
        evicted
    }

    fn contains(&self, tag: u64) -> bool {
        self.queue.contains(&tag)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    /// Newest first, so the next victim is last.
    fn residents(&self) -> Vec<u64> {
        self.queue.iter().rev().copied().collect()
    }
}
