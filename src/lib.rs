//! Cursor-free, offset-addressed access to bits and endian integers inside a
//! fixed-size byte buffer, written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! [`MiniBuffer`] wraps storage owned by the caller (an array, a mutable
//! slice, a `Vec<u8>`, ...) and reads or writes it at explicit offsets. It
//! never tracks a cursor and never grows, so a higher-level stateful buffer
//! can interleave its own cursor-based calls with these freely.
//!
//! # Examples
//! ```
//! use light_minibuf::MiniBuffer;
//!
//! let mut buf = MiniBuffer::new([0u8; 8]);
//! buf.write_u16_be(0, &[0x0102]);
//! buf.set_bits(16, 0b101, 3);
//! assert_eq!(buf.as_bytes()[..3], [0x01, 0x02, 0b1010_0000]);
//!
//! let mut out = [0u16; 1];
//! buf.read_u16_be(&mut out, 0, 1);
//! assert_eq!(out, [0x0102]);
//! assert_eq!(buf.read_bits(16, 3), 0b101);
//! ```
//!
//! # Bit order
//!
//! Bit offset `k` lives in byte `k / 8`, and inside that byte bit 0 is the
//! most significant bit. Multi-bit values are packed MSB-first: the first bit
//! at `offset` is the most significant bit of the value.
//!
//! # Checked and fast entry points
//!
//! Every operation that takes an offset or a range comes in two flavours:
//!
//! - the plain method (`write_u32_le`, `read_bits`, `write_bytes`, ...) checks
//!   the whole span once and panics if it leaves the buffer, before touching
//!   any byte;
//! - the `try_` method (`try_write_u32_le`, `try_read_bits`, ...) returns an
//!   [`Error`] instead.
//!
//! # Features
//!
//! - `#![no_std]` compatible, no heap allocations
//! - Single-bit access: `read_bit`, `set_bit`, `clear_bit`, `flip_bit`
//! - Multi-bit access: `read_bits`, `set_bits`, `set_bit_range`,
//!   `clear_bit_range`
//! - Whole-buffer ops: `clear_all_bits`, `set_all_bits`, `flip_all_bits`
//! - Vectorized `u16` / `u32` / `u64` codecs in little and big endian
//! - Raw byte copy: `write_bytes`, `read_bytes`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bits;
mod buffer;
mod endian;
mod error;

use core::ops::Range;

pub use buffer::{Bits, MiniBuffer};
pub use error::{Error, Result};

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use light_minibuf::byte_count;
///
/// assert_eq!(byte_count(9), 2);
/// assert_eq!(byte_count(16), 2);
/// assert_eq!(byte_count(17), 3);
/// ```
pub const fn byte_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// Mask of `width` bits starting at `start_bit`, where bit 0 is the MSB.
pub(crate) const fn ones_mask(start_bit: usize, width: usize) -> u8 {
    // shifting a u8 by 8 would overflow
    let tail = match (!0u8).checked_shr((start_bit + width) as u32) {
        Some(tail) => tail,
        None => 0,
    };
    (!0u8 >> start_bit) & !tail
}

/// Splits a bit offset into its byte index and in-byte mask.
#[inline]
pub(crate) const fn bit_idxs(offset: usize) -> (usize, u8) {
    (offset / 8, 0x80 >> (offset % 8))
}

/// Byte range `offset..offset + len`, if it fits into `capacity` bytes.
#[inline]
pub(crate) fn byte_span(offset: usize, len: usize, capacity: usize) -> Result<Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(offset..end),
        _ => Err(Error::OutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}

/// Bit range `offset..offset + len`, if it fits into `capacity` bits.
#[inline]
pub(crate) fn bit_span(offset: usize, len: usize, capacity: usize) -> Result<Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(offset..end),
        _ => Err(Error::BitOutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}

/// Unwraps the result of a checked operation, panicking with the error text.
#[inline]
#[track_caller]
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
