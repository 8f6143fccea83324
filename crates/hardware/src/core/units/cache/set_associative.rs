//! Set-associative tag store.
//!
//! Each index selects an independent set of up to `ways` resident tags. The
//! set's own [`PolicySet`] decides hit bookkeeping and which tag a full set
//! gives up on a miss.

use super::Access;
use super::policies::{PolicySet, SetPolicy};
use crate::common::AddressLayout;
use crate::config::ReplacementPolicy;

/// Sets for a set-associative (or fully associative) level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAssociativeCache {
    layout: AddressLayout,
    ways: usize,
    policy: ReplacementPolicy,
    sets: Vec<PolicySet>,
}

impl SetAssociativeCache {
    /// Creates `layout.num_indices()` empty sets of `ways` ways each.
    ///
    /// # Arguments
    ///
    /// * `layout` - Field widths; `index_bits` selects the set.
    /// * `ways` - Associativity.
    /// * `policy` - Victim selection rule shared by every set.
    pub fn new(layout: AddressLayout, ways: usize, policy: ReplacementPolicy) -> Self {
        Self {
            layout,
            ways,
            policy,
            sets: vec![PolicySet::new(policy, ways); layout.num_indices()],
        }
    }

    /// Address layout used to split incoming addresses.
    pub const fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Replacement policy.
    pub const fn policy(&self) -> ReplacementPolicy {
        self.policy
    }

    /// Bookkeeping of the set at `index`.
    pub fn set(&self, index: usize) -> Option<&PolicySet> {
        self.sets.get(index)
    }

    /// Looks up `addr`; on a miss installs its tag, evicting per policy when the set is full.
    pub fn access(&mut self, addr: u64) -> Access {
        let d = self.layout.decompose(addr);
        debug_assert!(d.index < self.sets.len(), "set {} out of range", d.index);

        let set = &mut self.sets[d.index];
        if set.touch(d.tag) {
            Access::Hit
        } else {
            Access::Miss {
                evicted: set.fill(d.tag),
            }
        }
    }

    /// Residency check with no side effects.
    pub fn contains(&self, addr: u64) -> bool {
        let d = self.layout.decompose(addr);
        self.sets.get(d.index).is_some_and(|set| set.contains(d.tag))
    }
}
