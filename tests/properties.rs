//! Property-based tests for the explicit-offset codecs.
//!
//! # Integer Codec Invariants
//! - Round trip: reading back what was written yields the same values
//! - Byte layout: LE/BE writes match `to_le_bytes` / `to_be_bytes`
//! - Non-interference: bytes outside the written span keep their value
//!
//! # Bit Codec Invariants
//! - Round trip: `read_bits(set_bits(data))` yields the low `count` bits
//! - MSB-first packing: bit `offset + i` holds bit `count - i - 1` of data
//! - Whole-buffer flips are self-inverse
//!
//! # Checked Entry Points
//! - `try_` variants fail exactly when the span leaves the buffer, and then
//!   leave the buffer untouched

use light_minibuf::{Error, MiniBuffer};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

const BUF_LEN: usize = 64;

fn arb_storage() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), BUF_LEN)
}

fn low_bits(data: u64, count: usize) -> u64 {
    if count == 0 { 0 } else { data & (u64::MAX >> (64 - count)) }
}

macro_rules! int_round_trip {
    ($name:ident, $ty:ty, $write:ident, $read:ident, $to_bytes:ident) => {
        proptest! {
            #[test]
            fn $name(
                storage in arb_storage(),
                values in prop::collection::vec(any::<$ty>(), 0..8),
                offset in 0usize..8,
            ) {
                const SIZE: usize = size_of::<$ty>();
                let before = storage.clone();
                let mut buf = MiniBuffer::new(storage);
                buf.$write(offset, &values);

                let mut out = vec![0 as $ty; values.len()];
                buf.$read(&mut out, offset, values.len());
                prop_assert_eq!(&out, &values);

                let end = offset + values.len() * SIZE;
                let bytes = buf.as_bytes();
                for (i, value) in values.iter().enumerate() {
                    let at = offset + i * SIZE;
                    prop_assert_eq!(&bytes[at..at + SIZE], &value.$to_bytes()[..]);
                }
                prop_assert_eq!(&bytes[..offset], &before[..offset]);
                prop_assert_eq!(&bytes[end..], &before[end..]);
            }
        }
    };
}

// ============================================================================
// Integer Codec
// ============================================================================

int_round_trip!(u16_le_round_trip, u16, write_u16_le, read_u16_le, to_le_bytes);
int_round_trip!(u16_be_round_trip, u16, write_u16_be, read_u16_be, to_be_bytes);
int_round_trip!(u32_le_round_trip, u32, write_u32_le, read_u32_le, to_le_bytes);
int_round_trip!(u32_be_round_trip, u32, write_u32_be, read_u32_be, to_be_bytes);
int_round_trip!(u64_le_round_trip, u64, write_u64_le, read_u64_le, to_le_bytes);
int_round_trip!(u64_be_round_trip, u64, write_u64_be, read_u64_be, to_be_bytes);

proptest! {
    #[test]
    fn u32_endian_cross_check(value in any::<u32>()) {
        let mut buf = MiniBuffer::new([0u8; 4]);
        buf.write_u32_le(0, &[value]);
        prop_assert_eq!(
            buf.as_bytes(),
            &[value as u8, (value >> 8) as u8, (value >> 16) as u8, (value >> 24) as u8]
        );

        buf.write_u32_be(0, &[value]);
        prop_assert_eq!(
            buf.as_bytes(),
            &[(value >> 24) as u8, (value >> 16) as u8, (value >> 8) as u8, value as u8]
        );
    }

    #[test]
    fn try_write_fails_exactly_when_out_of_bounds(
        storage in arb_storage(),
        offset in 0usize..BUF_LEN + 16,
        len in 0usize..8,
    ) {
        let values = vec![0xA5A5_u16; len];
        let mut buf = MiniBuffer::new(storage.clone());
        let fits = offset + len * 2 <= BUF_LEN;
        match buf.try_write_u16_be(offset, &values) {
            Ok(()) => prop_assert!(fits),
            Err(err) => {
                prop_assert!(!fits);
                prop_assert_eq!(
                    err,
                    Error::OutOfBounds { offset, len: len * 2, capacity: BUF_LEN }
                );
                prop_assert_eq!(buf.as_bytes(), &storage[..]);
            }
        }
    }
}

// ============================================================================
// Bit Codec
// ============================================================================

proptest! {
    #[test]
    fn bits_round_trip(
        storage in arb_storage(),
        offset in 0usize..BUF_LEN * 8 - 64,
        data in any::<u64>(),
        count in 0usize..=64,
    ) {
        let mut buf = MiniBuffer::new(storage);
        buf.set_bits(offset, data, count);
        prop_assert_eq!(buf.read_bits(offset, count), low_bits(data, count));
    }

    #[test]
    fn set_bits_is_msb_first(
        offset in 0usize..64,
        data in any::<u64>(),
        count in 1usize..=64,
    ) {
        let mut buf = MiniBuffer::new([0u8; 16]);
        buf.set_bits(offset, data, count);
        for i in 0..count {
            let expected = (data >> (count - i - 1)) & 1 == 1;
            prop_assert_eq!(buf.read_bit(offset + i), expected);
        }
    }

    #[test]
    fn set_bits_leaves_other_bits_untouched(
        storage in arb_storage(),
        offset in 0usize..BUF_LEN * 8 - 64,
        data in any::<u64>(),
        count in 0usize..=64,
    ) {
        let before = MiniBuffer::new(storage.clone());
        let mut buf = MiniBuffer::new(storage);
        buf.set_bits(offset, data, count);
        for (bit_offset, (old, new)) in before.bits().zip(buf.bits()).enumerate() {
            if !(offset..offset + count).contains(&bit_offset) {
                prop_assert_eq!(old, new, "bit {} changed", bit_offset);
            }
        }
    }

    #[test]
    fn flip_all_bits_is_self_inverse(storage in arb_storage()) {
        let mut buf = MiniBuffer::new(storage.clone());
        buf.flip_all_bits();
        prop_assert_eq!(buf.count_ones(), BUF_LEN * 8 - MiniBuffer::new(&storage).count_ones());
        buf.flip_all_bits();
        prop_assert_eq!(buf.as_bytes(), &storage[..]);
    }

    #[test]
    fn whole_buffer_fill(storage in arb_storage()) {
        let mut buf = MiniBuffer::new(storage);
        buf.clear_all_bits();
        prop_assert!(buf.as_bytes().iter().all(|b| *b == 0x00));
        buf.set_all_bits();
        prop_assert!(buf.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn bit_ranges_match_single_bit_ops(
        storage in arb_storage(),
        start in 0usize..BUF_LEN * 8,
        len in 0usize..40,
        set in any::<bool>(),
    ) {
        let end = (start + len).min(BUF_LEN * 8);
        let mut by_range = MiniBuffer::new(storage.clone());
        let mut by_bit = MiniBuffer::new(storage);
        for offset in start..end {
            if set {
                by_bit.set_bit(offset);
            } else {
                by_bit.clear_bit(offset);
            }
        }
        if set {
            by_range.set_bit_range(start..end);
        } else {
            by_range.clear_bit_range(start..end);
        }
        prop_assert_eq!(by_range, by_bit);
    }
}
