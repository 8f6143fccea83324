//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the tag with the smallest access count. Each resident
//! tag carries a counter that starts at 1 when installed and grows by one on
//! every hit. Ties are broken by insertion order: among equally cold tags the
//! one installed earliest goes first, so victim selection is deterministic.
//!
//! Counters belong to the set and are dropped with the tag on eviction; a tag
//! that returns later starts again from 1.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(W)
//!   - `fill()`: O(W) scan for the minimum
//! - **Space Complexity:** O(W) per set
//! - **Best Case:** Skewed access distributions with a stable hot set
//! - **Worst Case:** Phase changes (stale hot tags linger)

use super::SetPolicy;

/// A resident tag with its LFU bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    tag: u64,
    count: u64,
    /// Insertion sequence number within the set.
    seq: u64,
}

/// LFU state for one set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfuSet {
    entries: Vec<Entry>,
    next_seq: u64,
    ways: usize,
}

impl LfuSet {
    /// Creates an empty LFU set.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the set.
    pub fn new(ways: usize) -> Self {
        Self {
            entries: Vec::with_capacity(ways),
            next_seq: 0,
            ways,
        }
    }

    /// Access count of a resident tag.
    pub fn frequency(&self, tag: u64) -> Option<u64> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.count)
    }

    /// Position of the next victim: lowest count, then lowest sequence number.
    fn victim_pos(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| (e.count, e.seq))
            .map(|(pos, _)| pos)
    }
}

impl SetPolicy for LfuSet {
    fn touch(&mut self, tag: u64) -> bool {
        match self.entries.iter_mut().find(|e| e.tag == tag) {
            Some(entry) => {
                entry.count = entry.count.saturating_add(1);
                true
            }
            None => false,
        }
    }

    fn fill(&mut self, tag: u64) -> Option<u64> {
        let evicted = if self.entries.len() >= self.ways {
            self.victim_pos().map(|pos| self.entries.remove(pos).tag)
        } else {
            None
        };
        self.entries.push(Entry {
            tag,
            count: 1,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        evicted
    }

    fn contains(&self, tag: u64) -> bool {
        self.entries.iter().any(|e| e.tag == tag)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insertion order, oldest first.
    fn residents(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.tag).collect()
    }
}
