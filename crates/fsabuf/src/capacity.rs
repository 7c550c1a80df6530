//! Capacity checks for reusable scratch buffers.
//!
//! A buffer that is too small is replaced, never grown: the replacement is
//! empty and nothing is copied from the old buffer. Callers that need the
//! old content must copy it out before asking for more room.
use crate::{
    buffer::{Buffer, ByteBuffer, CharBuffer},
    trace::trace,
};

/// Returns a buffer whose capacity is at least `capacity`.
///
/// If `buffer` is `None` or holds less than `capacity` elements, a new buffer
/// of exactly `capacity` default-valued elements is allocated (position zero,
/// limit at capacity) and the old one is dropped. Otherwise `buffer` is
/// returned as is, with its position, limit and content untouched.
///
/// ```rust
/// use fsabuf::ensure_capacity;
///
/// let scratch = ensure_capacity::<u8>(None, 16);
/// assert_eq!(scratch.capacity(), 16);
///
/// let reused = ensure_capacity(Some(scratch), 8);
/// assert_eq!(reused.capacity(), 16);
/// ```
#[must_use]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn ensure_capacity<T: Copy + Default>(buffer: Option<Buffer<T>>, capacity: usize) -> Buffer<T> {
    let previous = match buffer {
        Some(buffer) if buffer.capacity() >= capacity => return buffer,
        Some(buffer) => buffer.capacity(),
        None => 0,
    };
    trace!(previous, requested = capacity, "allocating replacement buffer");
    Buffer::allocate(capacity)
}

/// [`ensure_capacity`] for byte buffers.
#[inline]
#[must_use]
pub fn ensure_byte_capacity(buffer: Option<ByteBuffer>, capacity: usize) -> ByteBuffer {
    ensure_capacity(buffer, capacity)
}

/// [`ensure_capacity`] for character buffers.
#[inline]
#[must_use]
pub fn ensure_char_capacity(buffer: Option<CharBuffer>, capacity: usize) -> CharBuffer {
    ensure_capacity(buffer, capacity)
}

/// Applies [`ensure_capacity`] to a buffer kept in a caller-owned slot and
/// returns a reference to the (possibly replaced) buffer.
pub fn ensure_capacity_in<T: Copy + Default>(
    slot: &mut Option<Buffer<T>>,
    capacity: usize,
) -> &mut Buffer<T> {
    let buffer = ensure_capacity(slot.take(), capacity);
    slot.insert(buffer)
}
