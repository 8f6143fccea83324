//! Configuration system for the cache hierarchy simulator.
//!
//! This module defines the configuration structures used to build a hierarchy. It provides:
//! 1. **Raw descriptors:** [`HierarchyConfig`] and [`LevelConfig`], deserialized from JSON as written.
//! 2. **Enums:** Cache kind ([`CacheKind`]) and replacement policy ([`ReplacementPolicy`]), parsed strictly.
//! 3. **Normalized levels:** [`LevelSpec`], a validated geometry that a cache level is built from.
//!
//! Strings are kept raw through deserialization so that a rejected value can be
//! reported together with the level it came from. Nothing is silently defaulted
//! except the replacement policy of a set-associative level that names none,
//! which is FIFO.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::common::{AddressLayout, ConfigError, exact_log2};

/// Largest number of blocks a single level may hold.
///
/// Tag storage is allocated up front, one entry per block, so the geometry is
/// bounded before anything is built.
pub const MAX_BLOCKS: u64 = 1 << 24;

/// A kind or policy string that matched no known name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized name `{0}`")]
pub struct UnrecognizedName(pub String);

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which resident tag to evict
/// when a new tag must be installed in a full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the tag that was touched longest ago.
    Lru,
    /// Least Frequently Used replacement policy.
    ///
    /// Evicts the tag with the fewest accesses; ties go to the earliest inserted.
    Lfu,
    /// Round-robin replacement policy.
    ///
    /// Evicts the way under a per-set rotating pointer, ignoring access history.
    RoundRobin,
    /// First In First Out replacement policy.
    ///
    /// Evicts the oldest inserted tag. Used when a set-associative level names no policy.
    #[default]
    Fifo,
}

impl ReplacementPolicy {
    /// Short configuration spelling of the policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => "lru",
            Self::Lfu => "lfu",
            Self::RoundRobin => "rr",
            Self::Fifo => "fifo",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = UnrecognizedName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            "rr" => Ok(Self::RoundRobin),
            "fifo" => Ok(Self::Fifo),
            _ => Err(UnrecognizedName(s.to_owned())),
        }
    }
}

/// Associativity as written in a level descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKind {
    /// One slot per index (`"direct"`).
    Direct,
    /// A single set holding every block (`"full"`).
    Full,
    /// `N` ways per set (`"<N>way"`, e.g. `"4way"`).
    Ways(u64),
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct => f.write_str("direct"),
            Self::Full => f.write_str("full"),
            Self::Ways(n) => write!(f, "{n}way"),
        }
    }
}

impl FromStr for CacheKind {
    type Err = UnrecognizedName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "full" => Ok(Self::Full),
            other => other
                .strip_suffix("way")
                .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|n| n.parse::<u64>().ok())
                .filter(|&n| n > 0)
                .map(Self::Ways)
                .ok_or_else(|| UnrecognizedName(s.to_owned())),
        }
    }
}

/// Physical organization of a validated level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Organization {
    /// One tag slot per index; a miss always replaces the slot.
    DirectMapped,
    /// `ways` tag slots per set, governed by `policy`.
    SetAssociative {
        /// Ways per set.
        ways: usize,
        /// Victim selection rule for a full set.
        policy: ReplacementPolicy,
    },
}

/// A validated, normalized cache level.
///
/// Only obtainable through the checked constructors, so its geometry always
/// satisfies the power-of-two invariants the address decomposition relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    name: String,
    size_bytes: u64,
    line_bytes: u64,
    organization: Organization,
    layout: AddressLayout,
}

impl LevelSpec {
    /// Validates a level from already-parsed parts.
    ///
    /// # Arguments
    ///
    /// * `name` - Level name, used in errors and the report.
    /// * `size_bytes` - Total capacity; must be a power of two.
    /// * `line_bytes` - Block size; must be a power of two no larger than `size_bytes`.
    /// * `kind` - Associativity.
    /// * `policy` - Replacement policy; `None` means FIFO for associative kinds
    ///   and is irrelevant for `Direct`.
    ///
    /// # Returns
    ///
    /// The normalized level, or the first [`ConfigError`] found.
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        line_bytes: u64,
        kind: CacheKind,
        policy: Option<ReplacementPolicy>,
    ) -> Result<Self, ConfigError> {
        let name = name.into();

        let offset_bits = exact_log2(line_bytes).ok_or_else(|| ConfigError::NotPowerOfTwo {
            level: name.clone(),
            field: "line_size",
            value: line_bytes,
        })?;
        let _ = exact_log2(size_bytes).ok_or_else(|| ConfigError::NotPowerOfTwo {
            level: name.clone(),
            field: "size",
            value: size_bytes,
        })?;
        if line_bytes > size_bytes {
            return Err(ConfigError::LineLargerThanCache {
                level: name,
                line_bytes,
                size_bytes,
            });
        }

        let blocks = size_bytes / line_bytes;
        if blocks > MAX_BLOCKS {
            return Err(ConfigError::TooManyBlocks {
                level: name,
                blocks,
                max: MAX_BLOCKS,
            });
        }
        let (organization, sets) = match kind {
            CacheKind::Direct => {
                if let Some(p) = policy {
                    debug!(level = %name, policy = %p, "replacement policy ignored on direct-mapped level");
                }
                (Organization::DirectMapped, blocks)
            }
            CacheKind::Full | CacheKind::Ways(_) => {
                let ways = match kind {
                    CacheKind::Ways(n) => n,
                    _ => blocks,
                };
                if ways == 0 || ways > blocks || blocks % ways != 0 {
                    return Err(ConfigError::InvalidAssociativity {
                        level: name,
                        ways,
                        blocks,
                    });
                }
                let organization = Organization::SetAssociative {
                    ways: ways as usize,
                    policy: policy.unwrap_or_default(),
                };
                (organization, blocks / ways)
            }
        };

        let index_bits = exact_log2(sets).ok_or_else(|| ConfigError::InvalidAssociativity {
            level: name.clone(),
            ways: blocks / sets,
            blocks,
        })?;

        Ok(Self {
            name,
            size_bytes,
            line_bytes,
            organization,
            layout: AddressLayout::from_bits(offset_bits, index_bits),
        })
    }

    /// Shorthand for a direct-mapped level.
    pub fn direct(
        name: impl Into<String>,
        size_bytes: u64,
        line_bytes: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(name, size_bytes, line_bytes, CacheKind::Direct, None)
    }

    /// Shorthand for an `ways`-way set-associative level.
    pub fn set_associative(
        name: impl Into<String>,
        size_bytes: u64,
        line_bytes: u64,
        ways: u64,
        policy: ReplacementPolicy,
    ) -> Result<Self, ConfigError> {
        Self::new(name, size_bytes, line_bytes, CacheKind::Ways(ways), Some(policy))
    }

    /// Shorthand for a fully associative (single-set) level.
    pub fn fully_associative(
        name: impl Into<String>,
        size_bytes: u64,
        line_bytes: u64,
        policy: ReplacementPolicy,
    ) -> Result<Self, ConfigError> {
        Self::new(name, size_bytes, line_bytes, CacheKind::Full, Some(policy))
    }

    /// Level name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total capacity in bytes.
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Block size in bytes.
    pub const fn line_bytes(&self) -> u64 {
        self.line_bytes
    }

    /// Direct-mapped or set-associative, with policy.
    pub const fn organization(&self) -> Organization {
        self.organization
    }

    /// Tag/index/offset field widths.
    pub const fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Total number of blocks.
    pub const fn blocks(&self) -> u64 {
        self.size_bytes / self.line_bytes
    }

    /// Ways per set; 1 for a direct-mapped level.
    pub const fn ways(&self) -> usize {
        match self.organization {
            Organization::DirectMapped => 1,
            Organization::SetAssociative { ways, .. } => ways,
        }
    }

    /// Number of slots (direct-mapped) or sets (set-associative).
    pub const fn num_sets(&self) -> usize {
        self.layout.num_indices()
    }
}

/// One cache level exactly as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    /// Level name; an empty name becomes `L<position>`.
    #[serde(default)]
    pub name: String,

    /// Total cache size in bytes
    #[serde(rename = "size")]
    pub size_bytes: u64,

    /// Cache line size in bytes
    #[serde(rename = "line_size")]
    pub line_bytes: u64,

    /// `direct`, `full`, or `<N>way`
    pub kind: String,

    /// `lru`, `lfu`, `rr`, `fifo`, or absent
    #[serde(default)]
    pub replacement_policy: Option<String>,
}

impl LevelConfig {
    /// Normalizes this descriptor.
    ///
    /// # Arguments
    ///
    /// * `position` - Zero-based position in the hierarchy, used to name unnamed levels.
    pub fn validate(&self, position: usize) -> Result<LevelSpec, ConfigError> {
        let name = if self.name.is_empty() {
            format!("L{}", position + 1)
        } else {
            self.name.clone()
        };

        let kind = self
            .kind
            .parse::<CacheKind>()
            .map_err(|UnrecognizedName(value)| ConfigError::UnknownKind {
                level: name.clone(),
                value,
            })?;

        let policy = self
            .replacement_policy
            .as_deref()
            .map(str::parse::<ReplacementPolicy>)
            .transpose()
            .map_err(|UnrecognizedName(value)| ConfigError::UnknownPolicy {
                level: name.clone(),
                value,
            })?;

        LevelSpec::new(name, self.size_bytes, self.line_bytes, kind, policy)
    }
}

/// Root configuration: the ordered cache levels, closest to the processor first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HierarchyConfig {
    /// Level descriptors in probe order.
    pub caches: Vec<LevelConfig>,
}

impl HierarchyConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Validates every level in order.
    ///
    /// # Returns
    ///
    /// The normalized levels, or the first error. An empty level list is
    /// [`ConfigError::EmptyHierarchy`].
    pub fn validate(&self) -> Result<Vec<LevelSpec>, ConfigError> {
        if self.caches.is_empty() {
            return Err(ConfigError::EmptyHierarchy);
        }
        self.caches
            .iter()
            .enumerate()
            .map(|(position, level)| level.validate(position))
            .collect()
    }
}
