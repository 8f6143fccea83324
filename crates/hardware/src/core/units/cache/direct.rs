//! Direct-mapped tag store.
//!
//! Each index owns exactly one slot. A hit leaves the slot alone; a miss
//! overwrites it unconditionally, since there is no choice of victim.

use super::Access;
use crate::common::AddressLayout;

/// Tag slots for a direct-mapped level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMappedCache {
    layout: AddressLayout,
    /// One slot per index; `None` until first filled.
    slots: Vec<Option<u64>>,
}

impl DirectMappedCache {
    /// Creates an empty store with `layout.num_indices()` slots.
    pub fn new(layout: AddressLayout) -> Self {
        Self {
            layout,
            slots: vec![None; layout.num_indices()],
        }
    }

    /// Address layout used to split incoming addresses.
    pub const fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Tag currently held at `index`, if any.
    pub fn slot(&self, index: usize) -> Option<u64> {
        self.slots.get(index).copied().flatten()
    }

    /// Looks up `addr` and installs its tag on a miss.
    pub fn access(&mut self, addr: u64) -> Access {
        let d = self.layout.decompose(addr);
        debug_assert!(d.index < self.slots.len(), "index {} out of range", d.index);

        let slot = &mut self.slots[d.index];
        if *slot == Some(d.tag) {
            return Access::Hit;
        }
        Access::Miss {
            evicted: slot.replace(d.tag),
        }
    }

    /// Residency check with no side effects.
    pub fn contains(&self, addr: u64) -> bool {
        let d = self.layout.decompose(addr);
        self.slot(d.index) == Some(d.tag)
    }
}
