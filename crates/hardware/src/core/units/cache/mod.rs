//! Cache Level Simulator.
//!
//! This module implements one level of a cache hierarchy. A level is either
//! direct-mapped or set-associative; both expose the same single operation,
//! [`CacheLevel::visit`], which decides hit or miss for an address, installs
//! the block on a miss, and accumulates hit/visit counters.
//!
//! Only tag presence is tracked. There is no data, no dirty state, and no
//! timing.

/// Direct-mapped tag store.
pub mod direct;

/// Cache replacement policy implementations (LRU, LFU, Round-Robin, FIFO).
pub mod policies;

/// Set-associative tag store.
pub mod set_associative;

use tracing::{debug, trace};

use self::direct::DirectMappedCache;
use self::set_associative::SetAssociativeCache;
use crate::config::{LevelSpec, Organization};

/// Outcome of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The tag was resident.
    Hit,
    /// The tag was installed; `evicted` is the tag it displaced, if any.
    Miss {
        /// Tag removed from the slot or set to make room.
        evicted: Option<u64>,
    },
}

impl Access {
    /// Whether this access hit.
    #[inline(always)]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

/// Hit and visit counts of one level. `hits <= visits` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounters {
    /// Accesses that found their tag resident.
    pub hits: u64,
    /// All accesses that reached this level.
    pub visits: u64,
}

impl LevelCounters {
    /// Counts one access.
    #[inline]
    pub const fn record(&mut self, access: Access) {
        self.visits += 1;
        if access.is_hit() {
            self.hits += 1;
        }
    }

    /// Accesses that did not find their tag.
    #[inline]
    pub const fn misses(&self) -> u64 {
        self.visits - self.hits
    }
}

/// Tag storage of a level, one variant per organization.
#[derive(Debug, Clone)]
pub enum TagStore {
    /// One slot per index.
    DirectMapped(DirectMappedCache),
    /// A group of ways per index, with a replacement policy.
    SetAssociative(SetAssociativeCache),
}

impl TagStore {
    /// Builds empty storage for a validated level.
    pub fn new(spec: &LevelSpec) -> Self {
        match spec.organization() {
            Organization::DirectMapped => Self::DirectMapped(DirectMappedCache::new(spec.layout())),
            Organization::SetAssociative { ways, policy } => {
                Self::SetAssociative(SetAssociativeCache::new(spec.layout(), ways, policy))
            }
        }
    }

    #[inline]
    fn access(&mut self, addr: u64) -> Access {
        match self {
            Self::DirectMapped(cache) => cache.access(addr),
            Self::SetAssociative(cache) => cache.access(addr),
        }
    }

    fn contains(&self, addr: u64) -> bool {
        match self {
            Self::DirectMapped(cache) => cache.contains(addr),
            Self::SetAssociative(cache) => cache.contains(addr),
        }
    }
}

/// One level of the hierarchy: a named tag store plus its counters.
#[derive(Debug, Clone)]
pub struct CacheLevel {
    name: String,
    store: TagStore,
    counters: LevelCounters,
}

impl CacheLevel {
    /// Creates an empty level from a validated specification.
    ///
    /// # Arguments
    ///
    /// * `spec` - Normalized geometry; see [`LevelSpec::new`].
    pub fn new(spec: &LevelSpec) -> Self {
        debug!(
            level = spec.name(),
            size = spec.size_bytes(),
            line = spec.line_bytes(),
            ways = spec.ways(),
            sets = spec.num_sets(),
            offset_bits = spec.layout().offset_bits(),
            index_bits = spec.layout().index_bits(),
            "built cache level"
        );
        Self {
            name: spec.name().to_owned(),
            store: TagStore::new(spec),
            counters: LevelCounters::default(),
        }
    }

    /// Looks up `addr`, installing its block on a miss.
    ///
    /// Every call counts as one visit; a hit also counts as one hit.
    ///
    /// # Arguments
    ///
    /// * `addr` - Raw 64-bit address; the block-offset bits are ignored.
    ///
    /// # Returns
    ///
    /// [`Access::Hit`] or [`Access::Miss`] with the displaced tag.
    pub fn visit(&mut self, addr: u64) -> Access {
        let access = self.store.access(addr);
        self.counters.record(access);
        if let Access::Miss { evicted: Some(tag) } = access {
            trace!(level = %self.name, addr, evicted_tag = tag, "evicted");
        }
        access
    }

    /// Reports whether the block holding `addr` is resident, without counting a visit
    /// or touching replacement state.
    pub fn contains(&self, addr: u64) -> bool {
        self.store.contains(addr)
    }

    /// Level name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying tag storage.
    pub const fn store(&self) -> &TagStore {
        &self.store
    }

    /// Current counters.
    pub const fn counters(&self) -> LevelCounters {
        self.counters
    }

    /// Total hits so far.
    pub const fn hits(&self) -> u64 {
        self.counters.hits
    }

    /// Total visits so far.
    pub const fn visits(&self) -> u64 {
        self.counters.visits
    }

    /// Total misses so far.
    pub const fn misses(&self) -> u64 {
        self.counters.misses()
    }
}
