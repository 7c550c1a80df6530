//! Buffer utilities for dictionary and automaton builders.
//!
//! The crate provides a small set of stateless operations over
//! caller-owned, position/limit addressed buffers:
//!
//! - [`ensure_capacity`] checks a scratch buffer's capacity and replaces it
//!   with a fresh, empty one when it is missing or too small.
//! - [`decode_to_string`] decodes the remaining bytes of a [`ByteBuffer`]
//!   with a [`Charset`] (or any other [`Decode`] implementation).
//! - [`shared_prefix_len`] and [`common_prefix_len`] measure how many leading
//!   elements two buffers share, relative to their current positions.
//!
//! ```rust
//! use fsabuf::{ByteBuffer, Charset, common_prefix_len, decode_to_string, shared_prefix_len};
//!
//! let a = ByteBuffer::from(&b"abcd"[..]);
//! let b = ByteBuffer::from(&b"abz"[..]);
//! assert_eq!(common_prefix_len(&a, &b), 2);
//! assert_eq!(shared_prefix_len(&a, 1, &b, 1), 1);
//! assert_eq!(decode_to_string(&a, &Charset::Latin1), "abcd");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod capacity;
mod charset;
mod decode;
mod error;
mod options;
mod prefix;
mod trace;

#[cfg(test)]
mod tests;

pub use buffer::{Buffer, ByteBuffer, CharBuffer};
pub use capacity::{
    ensure_byte_capacity, ensure_capacity, ensure_capacity_in, ensure_char_capacity,
};
pub use charset::{Charset, Decode};
pub use decode::{decode_to_string, decode_to_string_with, try_decode_to_string};
pub use error::{BufferError, DecodeError, UnsupportedCharset};
pub use options::{DecodeOptions, MalformedInput};
pub use prefix::{
    checked_shared_prefix_len, common_prefix_len, shared_prefix_len, slice_prefix_len,
};
