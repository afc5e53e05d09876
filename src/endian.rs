//! Vectorized fixed-width integer codecs.
//!
//! Each width/byte order pair gets a `write_*` that stores a whole slice of
//! values back to back and a `read_*` that decodes `count` values into a
//! caller-provided slice, plus their `try_` counterparts.

use crate::{Error, MiniBuffer, Result, byte_span, or_panic};
use core::ops::Range;

/// Byte span of `count` words of `size` bytes each, starting at `offset`.
#[inline]
fn word_span(offset: usize, count: usize, size: usize, capacity: usize) -> Result<Range<usize>> {
    // a saturated length can never fit, so overflow surfaces as out of bounds
    byte_span(offset, count.saturating_mul(size), capacity)
}

macro_rules! int_codec {
    (
        $ty:ty, $order:literal, $to_bytes:ident, $from_bytes:ident,
        $write:ident, $try_write:ident, $read:ident, $try_read:ident
    ) => {
        impl<S: AsRef<[u8]> + AsMut<[u8]>> MiniBuffer<S> {
            #[doc = concat!("Writes every `", stringify!($ty), "` of `data` in ", $order, " byte order,")]
            /// back to back starting at byte `offset`.
            ///
            /// Bytes outside the written span are left untouched.
            ///
            /// # Panics
            /// Panics if the values do not fit between `offset` and the end of
            /// the buffer. Nothing is written in that case.
            #[inline]
            #[track_caller]
            pub fn $write(&mut self, offset: usize, data: &[$ty]) {
                or_panic(self.$try_write(offset, data))
            }

            #[doc = concat!("Checked version of [`", stringify!($write), "`](Self::", stringify!($write), ").")]
            ///
            /// # Errors
            /// Returns [`Error::OutOfBounds`] if the values do not fit. The
            /// buffer is unchanged in that case.
            pub fn $try_write(&mut self, offset: usize, data: &[$ty]) -> Result<()> {
                const SIZE: usize = size_of::<$ty>();
                let span = word_span(offset, data.len(), SIZE, self.len())?;
                let bytes = &mut self.as_bytes_mut()[span];
                for (chunk, value) in bytes.chunks_exact_mut(SIZE).zip(data) {
                    chunk.copy_from_slice(&value.$to_bytes());
                }
                Ok(())
            }
        }

        impl<S: AsRef<[u8]>> MiniBuffer<S> {
            #[doc = concat!("Decodes `count` ", $order, " `", stringify!($ty), "` values starting at byte `offset`")]
            /// into `out[..count]`.
            ///
            /// Elements of `out` past `count` are left untouched.
            ///
            /// # Panics
            /// Panics if `out` is shorter than `count` or if the values do not
            /// fit between `offset` and the end of the buffer.
            #[inline]
            #[track_caller]
            pub fn $read(&self, out: &mut [$ty], offset: usize, count: usize) {
                or_panic(self.$try_read(out, offset, count))
            }

            #[doc = concat!("Checked version of [`", stringify!($read), "`](Self::", stringify!($read), ").")]
            ///
            /// # Errors
            /// Returns [`Error::OutputTooSmall`] if `out` is shorter than
            /// `count` and [`Error::OutOfBounds`] if the values do not fit. `out`
            /// is unchanged in both cases.
            pub fn $try_read(&self, out: &mut [$ty], offset: usize, count: usize) -> Result<()> {
                const SIZE: usize = size_of::<$ty>();
                if out.len() < count {
                    return Err(Error::OutputTooSmall {
                        requested: count,
                        capacity: out.len(),
                    });
                }
                let span = word_span(offset, count, SIZE, self.len())?;
                let bytes = &self.as_bytes()[span];
                for (value, chunk) in out[..count].iter_mut().zip(bytes.chunks_exact(SIZE)) {
                    let mut word = [0u8; SIZE];
                    word.copy_from_slice(chunk);
                    *value = <$ty>::$from_bytes(word);
                }
                Ok(())
            }
        }
    };
}

int_codec!(
    u16, "little-endian", to_le_bytes, from_le_bytes,
    write_u16_le, try_write_u16_le, read_u16_le, try_read_u16_le
);
int_codec!(
    u16, "big-endian", to_be_bytes, from_be_bytes,
    write_u16_be, try_write_u16_be, read_u16_be, try_read_u16_be
);
int_codec!(
    u32, "little-endian", to_le_bytes, from_le_bytes,
    write_u32_le, try_write_u32_le, read_u32_le, try_read_u32_le
);
int_codec!(
    u32, "big-endian", to_be_bytes, from_be_bytes,
    write_u32_be, try_write_u32_be, read_u32_be, try_read_u32_be
);
int_codec!(
    u64, "little-endian", to_le_bytes, from_le_bytes,
    write_u64_le, try_write_u64_le, read_u64_le, try_read_u64_le
);
int_codec!(
    u64, "big-endian", to_be_bytes, from_be_bytes,
    write_u64_be, try_write_u64_be, read_u64_be, try_read_u64_be
);
