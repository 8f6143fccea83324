//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the tag that has not been accessed for the longest time.
//! Each set keeps a usage stack. When a tag is accessed or installed it moves
//! to the top (Most Recently Used position). The bottom of the stack is the
//! Least Recently Used tag and the next victim.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(W) where W is the number of ways (associativity)
//!   - `fill()`: O(W)
//! - **Space Complexity:** O(W) per set
//! - **Best Case:** Accesses with good temporal locality
//! - **Worst Case:** Cyclic scans larger than the set (thrashing)

use super::SetPolicy;

/// LRU state for one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruSet {
    /// Resident tags; index 0 is MRU, last index is LRU.
    stack: Vec<u64>,
    ways: usize,
}

impl LruSet {
    /// Creates an empty LRU set.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    pub fn new(ways: usize) -> Self {
        Self {
            stack: Vec::with_capacity(ways),
            ways,
        }
    }

    /// The tag that would be evicted by the next fill of a full set.
    pub fn victim(&self) -> Option<u64> {
        self.stack.last().copied()
    }
}

impl SetPolicy for LruSet {
    /// Moves a resident `tag` to the MRU position.
    fn touch(&mut self, tag: u64) -> bool {
        let Some(pos) = self.stack.iter().position(|&t| t == tag) else {
            return false;
        };
        let hit = self.stack.remove(pos);
        self.stack.insert(0, hit);
        true
    }

    /// Pops the LRU tag when full, then pushes `tag` as MRU.
    fn fill(&mut self, tag: u64) -> Option<u64> {
        let evicted = if self.stack.len() >= self.ways {
            self.stack.pop()
        } else {
            None
        };
        self.stack.insert(0, tag);
        evicted
    }

    fn contains(&self, tag: u64) -> bool {
        self.stack.contains(&tag)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn residents(&self) -> Vec<u64> {
        self.stack.clone()
    }
}
