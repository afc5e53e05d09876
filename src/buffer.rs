use crate::{Result, bit_idxs, byte_span, or_panic};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// Explicit-offset view over a fixed-size byte buffer.
///
/// `S` is the storage, owned by the caller: `[u8; N]`, `&mut [u8]`,
/// `Vec<u8>` or anything else that is `AsRef<[u8]>` (and `AsMut<[u8]>` for
/// writes). Its length never changes while wrapped.
///
/// No operation keeps state between calls; every offset is absolute and
/// counted from the start of the storage.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct MiniBuffer<S>(pub(crate) S);

impl<const N: usize> MiniBuffer<[u8; N]> {
    /// Creates a new stack buffer of `N` bytes with all bits unset.
    ///
    /// Callable in compile-time contexts such as const initialization.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// const EMPTY: MiniBuffer<[u8; 4]> = MiniBuffer::zeroed();
    /// assert_eq!(EMPTY.count_ones(), 0);
    /// ```
    pub const fn zeroed() -> Self {
        Self([0u8; N])
    }

    /// Creates a new stack buffer of `N` bytes with all bits set.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// const FULL: MiniBuffer<[u8; 2]> = MiniBuffer::filled();
    /// assert_eq!(FULL.count_ones(), 16);
    /// ```
    pub const fn filled() -> Self {
        Self([!0u8; N])
    }
}

impl<S> MiniBuffer<S> {
    /// Wraps `storage` without touching its contents.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut raw = [0xAAu8; 3];
    /// let buf = MiniBuffer::new(&mut raw[..]);
    /// assert_eq!(buf.as_bytes(), &[0xAA, 0xAA, 0xAA]);
    /// ```
    #[inline]
    pub const fn new(storage: S) -> Self {
        Self(storage)
    }

    /// Returns the wrapped storage.
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<[u8]>> MiniBuffer<S> {
    /// Returns the whole storage as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Length of the storage in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` if the storage holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Length of the storage in bits, always `len() * 8`.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.len() * 8
    }

    /// Borrows `len` bytes starting at byte `offset`.
    ///
    /// # Panics
    /// Panics if `offset + len` exceeds [`len`](Self::len).
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let buf = MiniBuffer::new([1u8, 2, 3, 4]);
    /// assert_eq!(buf.read_bytes(1, 2), &[2, 3]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn read_bytes(&self, offset: usize, len: usize) -> &[u8] {
        or_panic(self.try_read_bytes(offset, len))
    }

    /// Checked version of [`read_bytes`](Self::read_bytes).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the span
    /// leaves the buffer.
    #[inline]
    pub fn try_read_bytes(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let span = byte_span(offset, len, self.len())?;
        Ok(&self.as_bytes()[span])
    }

    /// Returns the number of set bits in the buffer.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let buf = MiniBuffer::new([0b1010_0000u8, 0x01]);
    /// assert_eq!(buf.count_ones(), 3);
    /// ```
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns an iterator over all bits as `bool`, in bit-offset order.
    ///
    /// The most significant bit of byte 0 comes first. The iterator yields
    /// exactly [`bit_len`](Self::bit_len) items.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let buf = MiniBuffer::new([0b1100_0000u8]);
    /// let mut bits = buf.bits();
    /// assert_eq!(bits.next(), Some(true));
    /// assert_eq!(bits.next(), Some(true));
    /// assert_eq!(bits.next(), Some(false));
    /// assert_eq!(bits.len(), 5);
    /// ```
    #[inline]
    pub fn bits(&self) -> Bits<'_> {
        Bits {
            bytes: self.as_bytes(),
            bit_idx: 0,
        }
    }
}

impl<S: AsRef<[u8]> + AsMut<[u8]>> MiniBuffer<S> {
    /// Returns the whole storage as a mutable byte slice.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.0.as_mut()
    }

    /// Copies `data` verbatim into the buffer starting at byte `offset`.
    ///
    /// Bytes outside `offset..offset + data.len()` are left untouched.
    ///
    /// # Panics
    /// Panics if `offset + data.len()` exceeds [`len`](Self::len). Nothing is
    /// written in that case.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0u8; 4]);
    /// buf.write_bytes(1, &[0xAB, 0xCD]);
    /// assert_eq!(buf.as_bytes(), &[0x00, 0xAB, 0xCD, 0x00]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn write_bytes(&mut self, offset: usize, data: &[u8]) {
        or_panic(self.try_write_bytes(offset, data))
    }

    /// Checked version of [`write_bytes`](Self::write_bytes).
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if the span
    /// leaves the buffer. The buffer is unchanged in that case.
    #[inline]
    pub fn try_write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<()> {
        let span = byte_span(offset, data.len(), self.len())?;
        self.as_bytes_mut()[span].copy_from_slice(data);
        Ok(())
    }

    /// Sets every byte to `0x00`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0x5Au8; 3]);
    /// buf.clear_all_bits();
    /// assert_eq!(buf.as_bytes(), &[0, 0, 0]);
    /// ```
    #[inline]
    pub fn clear_all_bits(&mut self) {
        self.as_bytes_mut().fill(0);
    }

    /// Sets every byte to `0xFF`.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0x5Au8; 3]);
    /// buf.set_all_bits();
    /// assert_eq!(buf.as_bytes(), &[0xFF, 0xFF, 0xFF]);
    /// ```
    #[inline]
    pub fn set_all_bits(&mut self) {
        self.as_bytes_mut().fill(!0);
    }

    /// Inverts every bit of the buffer in place.
    ///
    /// Applying it twice restores the original contents.
    ///
    /// # Examples
    /// ```
    /// use light_minibuf::MiniBuffer;
    ///
    /// let mut buf = MiniBuffer::new([0x0Fu8, 0xA5]);
    /// buf.flip_all_bits();
    /// assert_eq!(buf.as_bytes(), &[0xF0, 0x5A]);
    /// ```
    #[inline]
    pub fn flip_all_bits(&mut self) {
        for byte in self.as_bytes_mut() {
            *byte = !*byte;
        }
    }
}

impl<S: AsRef<[u8]>> AsRef<[u8]> for MiniBuffer<S> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'buf, S: AsRef<[u8]>> IntoIterator for &'buf MiniBuffer<S> {
    type Item = bool;
    type IntoIter = Bits<'buf>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits()
    }
}

impl<S: AsRef<[u8]>> Debug for MiniBuffer<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.bits().enumerate() {
            if i % 8 == 0 {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, "]")
    }
}

/// Iterator over all bits of a buffer as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from bit
/// offset 0 (the most significant bit of the first byte).
///
/// Returned by [`MiniBuffer::bits()`].
#[derive(Clone, Copy)]
pub struct Bits<'buf> {
    bytes: &'buf [u8],
    bit_idx: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_idx, mask) = bit_idxs(self.bit_idx);
        let byte = self.bytes.get(byte_idx)?;
        self.bit_idx += 1;
        Some(byte & mask != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.bytes.len() * 8).saturating_sub(self.bit_idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}
