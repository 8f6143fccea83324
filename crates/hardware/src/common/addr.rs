//! Address decomposition into tag, index, and offset fields.
//!
//! This module splits a raw 64-bit address the way a cache level sees it:
//! 1. **Offset:** Low-order bits selecting a byte inside a block; never used for matching.
//! 2. **Index:** Middle bits selecting a slot (direct-mapped) or a set (set-associative).
//! 3. **Tag:** Everything above the index, compared against resident tags.
//!
//! Bit widths are derived once with integer bit-scanning, so a non-power-of-two
//! size can never silently truncate to a narrower field.

/// Returns `log2(value)` when `value` is an exact, non-zero power of two.
///
/// # Arguments
///
/// * `value` - The size to scan.
///
/// # Returns
///
/// `Some(bits)` for a power of two, `None` otherwise (including zero).
#[inline]
pub const fn exact_log2(value: u64) -> Option<u32> {
    if value.is_power_of_two() {
        Some(value.trailing_zeros())
    } else {
        None
    }
}

/// A block address split into the fields a cache level matches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decomposed {
    /// High-order bits identifying the block within its slot or set.
    pub tag: u64,
    /// Slot or set selector; always `< 1 << index_bits`.
    pub index: usize,
}

/// Field widths for one cache level.
///
/// Built from a block size and a slot/set count, both exact powers of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressLayout {
    offset_bits: u32,
    index_bits: u32,
}

impl AddressLayout {
    /// Builds a layout from a block size and a number of slots or sets.
    ///
    /// # Arguments
    ///
    /// * `block_bytes` - Bytes per block; must be a power of two.
    /// * `num_indices` - Direct-mapped slots or associative sets; must be a power of two.
    ///
    /// # Returns
    ///
    /// `None` if either argument is zero or not a power of two.
    pub const fn new(block_bytes: u64, num_indices: u64) -> Option<Self> {
        let Some(offset_bits) = exact_log2(block_bytes) else {
            return None;
        };
        let Some(index_bits) = exact_log2(num_indices) else {
            return None;
        };
        Some(Self {
            offset_bits,
            index_bits,
        })
    }

    /// Builds a layout directly from field widths.
    ///
    /// Callers guarantee `index_bits < 64`, as any width derived from a
    /// validated level does.
    #[inline]
    pub(crate) const fn from_bits(offset_bits: u32, index_bits: u32) -> Self {
        Self {
            offset_bits,
            index_bits,
        }
    }

    /// Width of the block-offset field.
    #[inline(always)]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the index field. Zero for a single-set (fully associative) level.
    #[inline(always)]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Number of distinct index values (`1 << index_bits`).
    #[inline]
    pub const fn num_indices(&self) -> usize {
        1usize << self.index_bits
    }

    /// Mask applied to the shifted address to extract the index.
    #[inline(always)]
    const fn index_mask(&self) -> u64 {
        // index_bits < 64 for any layout built from a u64 size.
        (1u64 << self.index_bits) - 1
    }

    /// Splits `addr` into its tag and index.
    ///
    /// `index = (addr >> offset_bits) & ((1 << index_bits) - 1)` and
    /// `tag = addr >> (offset_bits + index_bits)`. A combined shift of 64
    /// yields a tag of zero rather than overflowing.
    #[inline]
    pub const fn decompose(&self, addr: u64) -> Decomposed {
        let index = match addr.checked_shr(self.offset_bits) {
            Some(shifted) => shifted & self.index_mask(),
            None => 0,
        };
        let tag = match addr.checked_shr(self.offset_bits + self.index_bits) {
            Some(tag) => tag,
            None => 0,
        };
        Decomposed {
            tag,
            index: index as usize,
        }
    }

    /// Byte position of `addr` inside its block.
    #[inline]
    pub const fn offset(&self, addr: u64) -> u64 {
        match 1u64.checked_shl(self.offset_bits) {
            Some(block) => addr & (block - 1),
            None => addr,
        }
    }
}
