use alloc::string::String;

use thiserror::Error;

use crate::charset::Charset;

/// Errors raised by cursor operations on a [`Buffer`](crate::Buffer) and by
/// the checked shared-prefix scan.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A position was set past the buffer's limit.
    #[error("position {position} exceeds limit {limit}")]
    PositionOutOfBounds {
        /// Requested position.
        position: usize,
        /// Current limit.
        limit: usize,
    },
    /// A limit was set past the buffer's capacity.
    #[error("limit {limit} exceeds capacity {capacity}")]
    LimitOutOfBounds {
        /// Requested limit.
        limit: usize,
        /// Fixed capacity of the buffer.
        capacity: usize,
    },
    /// A relative write did not fit between position and limit.
    #[error("buffer overflow: {requested} element(s) requested, {remaining} remaining")]
    Overflow {
        /// Number of elements the write needed.
        requested: usize,
        /// Number of elements left before the limit.
        remaining: usize,
    },
    /// A relative read found no element before the limit.
    #[error("buffer underflow")]
    Underflow,
    /// A start offset pointed past the remaining content of a buffer.
    #[error("offset {offset} out of range for {remaining} remaining element(s)")]
    OffsetOutOfRange {
        /// Offset relative to the buffer's position.
        offset: usize,
        /// Remaining elements of the buffer.
        remaining: usize,
    },
}

/// Errors reported by strict decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input holds a byte sequence that is not valid in the charset.
    #[error("malformed {charset} input: {len} byte(s) at offset {offset}")]
    Malformed {
        /// Charset that rejected the input.
        charset: Charset,
        /// Index of the first malformed byte in the decoded view.
        offset: usize,
        /// Length of the malformed sequence in bytes.
        len: usize,
    },
    /// Failure reported by a caller-supplied decoder.
    #[error("{0}")]
    Custom(&'static str),
}

/// Returned when parsing a [`Charset`] from an unknown encoding name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported charset '{name}'")]
pub struct UnsupportedCharset {
    /// The name that failed to parse.
    pub name: String,
}
