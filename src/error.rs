//! Errors returned by the checked (`try_`) entry points.

use thiserror::Error;

/// Contract violations detected by the checked entry points of
/// [`MiniBuffer`](crate::MiniBuffer).
///
/// The plain entry points panic with the same message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A byte span reaches past the end of the buffer.
    #[error("Byte span of {len} byte(s) at offset {offset} out of bounds for buffer of {capacity} bytes")]
    OutOfBounds {
        /// First byte of the span.
        offset: usize,
        /// Length of the span in bytes.
        len: usize,
        /// Length of the buffer in bytes.
        capacity: usize,
    },

    /// A bit span reaches past the last bit of the buffer.
    #[error("Bit span of {len} bit(s) at offset {offset} out of bounds for buffer of {capacity} bits")]
    BitOutOfBounds {
        /// First bit of the span.
        offset: usize,
        /// Length of the span in bits.
        len: usize,
        /// Length of the buffer in bits.
        capacity: usize,
    },

    /// More bits were requested than fit into a `u64`.
    #[error("Bit count {0} exceeds the 64 bits of the result")]
    BitCountTooLarge(usize),

    /// The output slice of a vectorized read is shorter than the value count.
    #[error("Output of {capacity} values too small for {requested} values")]
    OutputTooSmall {
        /// Number of values to decode.
        requested: usize,
        /// Length of the output slice.
        capacity: usize,
    },
}

/// Result type alias using the crate [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
