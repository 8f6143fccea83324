//! Address Layout Unit Tests.
//!
//! Verifies bit-width derivation and tag/index extraction:
//! `index = (addr >> offset_bits) & ((1 << index_bits) - 1)` and
//! `tag = addr >> (offset_bits + index_bits)`.

use cachesim_core::common::{AddressLayout, Decomposed, exact_log2};
use rstest::rstest;

#[rstest]
#[case(1, Some(0))]
#[case(2, Some(1))]
#[case(64, Some(6))]
#[case(4096, Some(12))]
#[case(1 << 63, Some(63))]
#[case(0, None)]
#[case(3, None)]
#[case(48, None)]
#[case(u64::MAX, None)]
fn exact_log2_accepts_only_powers_of_two(#[case] value: u64, #[case] expected: Option<u32>) {
    assert_eq!(exact_log2(value), expected);
}

#[test]
fn layout_widths_from_sizes() {
    let layout = AddressLayout::new(16, 4).expect("powers of two");
    assert_eq!(layout.offset_bits(), 4);
    assert_eq!(layout.index_bits(), 2);
    assert_eq!(layout.num_indices(), 4);
}

#[rstest]
#[case(48, 4)]
#[case(16, 3)]
#[case(0, 4)]
#[case(16, 0)]
fn layout_rejects_non_power_of_two(#[case] block: u64, #[case] indices: u64) {
    assert!(AddressLayout::new(block, indices).is_none());
}

/// 16-byte blocks, 4 slots: bits 0-3 offset, bits 4-5 index, bits 6+ tag.
#[rstest]
#[case(0x00, 0, 0)]
#[case(0x0F, 0, 0)]
#[case(0x10, 0, 1)]
#[case(0x20, 0, 2)]
#[case(0x30, 0, 3)]
#[case(0x40, 1, 0)]
#[case(0x75, 1, 3)]
#[case(0x1234_5678, 0x48_D159, 3)]
fn decompose_small_layout(#[case] addr: u64, #[case] tag: u64, #[case] index: usize) {
    let layout = AddressLayout::new(16, 4).expect("powers of two");
    assert_eq!(layout.decompose(addr), Decomposed { tag, index });
}

#[test]
fn decompose_64_byte_lines_8_sets() {
    let layout = AddressLayout::new(64, 8).expect("powers of two");
    assert_eq!(
        layout.decompose(0xDEAD_BEEF),
        Decomposed {
            tag: 0x6F_56DF,
            index: 3
        }
    );
}

/// Offset bits never influence the decomposition.
#[test]
fn offset_bits_are_ignored() {
    let layout = AddressLayout::new(64, 8).expect("powers of two");
    let base = layout.decompose(0x4000);
    for off in 0..64 {
        assert_eq!(layout.decompose(0x4000 + off), base);
        assert_eq!(layout.offset(0x4000 + off), off);
    }
}

/// With a single set (`index_bits == 0`), the index is always 0.
#[test]
fn single_index_layout_always_index_zero() {
    let layout = AddressLayout::new(32, 1).expect("powers of two");
    assert_eq!(layout.index_bits(), 0);
    for addr in [0u64, 0x20, 0x1000, 0xFFFF_FFFF, u64::MAX] {
        let d = layout.decompose(addr);
        assert_eq!(d.index, 0);
        assert_eq!(d.tag, addr >> 5);
    }
}

#[test]
fn top_of_address_space() {
    let layout = AddressLayout::new(16, 4).expect("powers of two");
    assert_eq!(
        layout.decompose(u64::MAX),
        Decomposed {
            tag: u64::MAX >> 6,
            index: 3
        }
    );
}

/// A combined field width of 64 leaves no tag bits.
#[test]
fn full_width_fields_give_zero_tag() {
    let layout = AddressLayout::new(1 << 32, 1 << 32).expect("powers of two");
    assert_eq!((layout.offset_bits(), layout.index_bits()), (32, 32));
    let d = layout.decompose(u64::MAX);
    assert_eq!(d.tag, 0);
    assert_eq!(d.index, 0xFFFF_FFFF);
}
