use crate::{Error, MiniBuffer, Result, bit_idxs, bit_span, ones_mask, or_panic};
use core::ops::Range;

/// Widest bit run that fits into the `u64` used by the multi-bit ops.
const MAX_BIT_COUNT: usize = u64::BITS as usize;

impl<S: AsRef<[u8]>> MiniBuffer<S> {
    /// Returns `true` if the bit at the given offset is set.
    ///
    /// # Panics
    /// Panics if `offset >= bit_len()`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let buf = MiniBuffer::new([0b0100_0000u8]);
    /// assert!(!buf.read_bit(0));
    /// assert!(buf.read_bit(1));
    /// ```
    #[inline]
    #[track_caller]
    pub fn read_bit(&self, offset: usize) -> bool {
        or_panic(self.try_read_bit(offset))
    }

    /// Checked version of [`read_bit`](Self::read_bit).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if `offset >= bit_len()`.
    #[inline]
    pub fn try_read_bit(&self, offset: usize) -> Result<bool> {
        bit_span(offset, 1, self.bit_len())?;
        let (byte_idx, mask) = bit_idxs(offset);
        Ok(self.as_bytes()[byte_idx] & mask != 0)
    }

    /// Reads `count` bits starting at bit `offset` and packs them MSB-first.
    ///
    /// The bit at `offset` ends up as the most significant of the `count`
    /// result bits; the upper `64 - count` bits of the result are zero.
    ///
    /// # Panics
    /// Panics if `count > 64` or if `offset + count` exceeds `bit_len()`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let buf = MiniBuffer::new([0b1011_0000u8]);
    /// assert_eq!(buf.read_bits(0, 4), 0b1011);
    /// assert_eq!(buf.read_bits(2, 2), 0b11);
    /// ```
    #[inline]
    #[track_caller]
    pub fn read_bits(&self, offset: usize, count: usize) -> u64 {
        or_panic(self.try_read_bits(offset, count))
    }

    /// Checked version of [`read_bits`](Self::read_bits).
    ///
    /// # Errors
    /// Returns [`Error::BitCountTooLarge`] if `count > 64` and
    /// [`Error::BitOutOfBounds`] if the bits leave the buffer.
    pub fn try_read_bits(&self, offset: usize, count: usize) -> Result<u64> {
        if count > MAX_BIT_COUNT {
            return Err(Error::BitCountTooLarge(count));
        }
        let span = bit_span(offset, count, self.bit_len())?;
        let bytes = self.as_bytes();
        Ok(span.fold(0, |acc, bit_offset| {
            let (byte_idx, mask) = bit_idxs(bit_offset);
            acc << 1 | u64::from(bytes[byte_idx] & mask != 0)
        }))
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> MiniBuffer<S> {
    /// Sets the bit at the given offset.
    ///
    /// # Panics
    /// Panics if `offset >= bit_len()`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0u8; 2]);
    /// buf.set_bit(9);
    /// assert_eq!(buf.as_bytes(), &[0x00, 0b0100_0000]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn set_bit(&mut self, offset: usize) {
        or_panic(self.try_set_bit(offset))
    }

    /// Checked version of [`set_bit`](Self::set_bit).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if `offset >= bit_len()`.
    #[inline]
    pub fn try_set_bit(&mut self, offset: usize) -> Result<()> {
        bit_span(offset, 1, self.bit_len())?;
        let (byte_idx, mask) = bit_idxs(offset);
        self.as_bytes_mut()[byte_idx] |= mask;
        Ok(())
    }

    /// Clears the bit at the given offset.
    ///
    /// # Panics
    /// Panics if `offset >= bit_len()`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0xFFu8]);
    /// buf.clear_bit(0);
    /// assert_eq!(buf.as_bytes(), &[0b0111_1111]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn clear_bit(&mut self, offset: usize) {
        or_panic(self.try_clear_bit(offset))
    }

    /// Checked version of [`clear_bit`](Self::clear_bit).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if `offset >= bit_len()`.
    #[inline]
    pub fn try_clear_bit(&mut self, offset: usize) -> Result<()> {
        bit_span(offset, 1, self.bit_len())?;
        let (byte_idx, mask) = bit_idxs(offset);
        self.as_bytes_mut()[byte_idx] &= !mask;
        Ok(())
    }

    /// Toggles the bit at the given offset.
    ///
    /// Returns the previous value of the bit (before the toggle).
    ///
    /// # Panics
    /// Panics if `offset >= bit_len()`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0u8]);
    /// assert_eq!(buf.flip_bit(4), false); // flipped from false to true
    /// assert_eq!(buf.flip_bit(4), true);  // flipped from true to false
    /// ```
    #[inline]
    #[track_caller]
    pub fn flip_bit(&mut self, offset: usize) -> bool {
        or_panic(self.try_flip_bit(offset))
    }

    /// Checked version of [`flip_bit`](Self::flip_bit).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if `offset >= bit_len()`.
    #[inline]
    pub fn try_flip_bit(&mut self, offset: usize) -> Result<bool> {
        bit_span(offset, 1, self.bit_len())?;
        let (byte_idx, mask) = bit_idxs(offset);
        let byte = &mut self.as_bytes_mut()[byte_idx];
        let bit = *byte & mask != 0;
        *byte ^= mask;
        Ok(bit)
    }

    /// Writes the low `count` bits of `data` to consecutive bits starting at
    /// bit `offset`, most significant of the `count` bits first.
    ///
    /// Each target bit is set for a 1 and cleared for a 0; bits outside
    /// `offset..offset + count` keep their value.
    ///
    /// # Panics
    /// Panics if `count > 64` or if `offset + count` exceeds `bit_len()`.
    /// Nothing is written in that case.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0u8; 4]);
    /// buf.set_bits(0, 0b10, 2);
    /// assert_eq!(buf.as_bytes()[0], 0b1000_0000);
    /// ```
    #[inline]
    #[track_caller]
    pub fn set_bits(&mut self, offset: usize, data: u64, count: usize) {
        or_panic(self.try_set_bits(offset, data, count))
    }

    /// Checked version of [`set_bits`](Self::set_bits).
    ///
    /// # Errors
    /// Returns [`Error::BitCountTooLarge`] if `count > 64` and
    /// [`Error::BitOutOfBounds`] if the bits leave the buffer. The buffer is
    /// unchanged in both cases.
    pub fn try_set_bits(&mut self, offset: usize, data: u64, count: usize) -> Result<()> {
        if count > MAX_BIT_COUNT {
            return Err(Error::BitCountTooLarge(count));
        }
        bit_span(offset, count, self.bit_len())?;
        let bytes = self.as_bytes_mut();
        for i in 0..count {
            let (byte_idx, mask) = bit_idxs(offset + i);
            if (data >> (count - i - 1)) & 1 == 0 {
                bytes[byte_idx] &= !mask;
            } else {
                bytes[byte_idx] |= mask;
            }
        }
        Ok(())
    }

    /// Sets all bits in the given range of bit offsets.
    ///
    /// An empty or reversed range sets nothing.
    ///
    /// # Panics
    /// Panics if `range.start` or `range.end` exceeds `bit_len()`, even for
    /// an empty range.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0u8; 2]);
    /// buf.set_bit_range(2..11);
    /// assert_eq!(buf.as_bytes(), &[0b0011_1111, 0b1110_0000]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn set_bit_range(&mut self, range: Range<usize>) {
        or_panic(self.try_set_bit_range(range))
    }

    /// Checked version of [`set_bit_range`](Self::set_bit_range).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if either end of the range lies past
    /// `bit_len()`. The buffer is unchanged in that case.
    #[inline]
    pub fn try_set_bit_range(&mut self, range: Range<usize>) -> Result<()> {
        self.fill_bit_range(range, true)
    }

    /// Clears all bits in the given range of bit offsets.
    ///
    /// An empty or reversed range clears nothing.
    ///
    /// # Panics
    /// Panics if `range.start` or `range.end` exceeds `bit_len()`, even for
    /// an empty range.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0xFFu8; 2]);
    /// buf.clear_bit_range(2..11);
    /// assert_eq!(buf.as_bytes(), &[0b1100_0000, 0b0001_1111]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn clear_bit_range(&mut self, range: Range<usize>) {
        or_panic(self.try_clear_bit_range(range))
    }

    /// Checked version of [`clear_bit_range`](Self::clear_bit_range).
    ///
    /// # Errors
    /// Returns [`Error::BitOutOfBounds`] if either end of the range lies past
    /// `bit_len()`. The buffer is unchanged in that case.
    #[inline]
    pub fn try_clear_bit_range(&mut self, range: Range<usize>) -> Result<()> {
        self.fill_bit_range(range, false)
    }

    fn fill_bit_range(&mut self, range: Range<usize>, value: bool) -> Result<()> {
        let capacity = self.bit_len();
        // both ends are checked before an empty range returns early
        if range.start >= range.end {
            bit_span(range.start, 0, capacity)?;
            bit_span(range.end, 0, capacity)?;
            return Ok(());
        }
        bit_span(range.start, range.end - range.start, capacity)?;

        let (start_byte, start_bit) = (range.start / 8, range.start % 8);
        let (end_byte, end_bit) = ((range.end - 1) / 8, (range.end - 1) % 8);
        let bytes = self.as_bytes_mut();
        let apply = |byte: &mut u8, mask: u8| {
            if value {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        };

        // all within one byte
        if start_byte == end_byte {
            apply(&mut bytes[start_byte], ones_mask(start_bit, end_bit - start_bit + 1));
            return Ok(());
        }

        apply(&mut bytes[start_byte], ones_mask(start_bit, 8 - start_bit));
        bytes[start_byte + 1..end_byte].fill(if value { !0 } else { 0 });
        apply(&mut bytes[end_byte], ones_mask(0, end_bit + 1));
        Ok(())
    }
}
