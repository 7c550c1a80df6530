//! Shared-prefix scans between buffers.
//!
//! Start offsets are relative to each buffer's current position, not to the
//! start of its storage. The comparison bound is
//! `min(remaining(a) - a_start, remaining(b) - b_start)`, taken once before
//! scanning; both sides are then walked in lockstep.
//!
//! An offset past a buffer's remaining content leaves nothing to compare on
//! that side. [`shared_prefix_len`] treats it as an empty sequence and
//! returns zero; [`checked_shared_prefix_len`] reports it.
use crate::{buffer::Buffer, error::BufferError, trace::trace};

/// Length of the longest common prefix of two slices.
#[inline]
#[must_use]
pub fn slice_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let max = a.len().min(b.len());
    a[..max]
        .iter()
        .zip(&b[..max])
        .position(|(x, y)| x != y)
        .unwrap_or(max)
}

/// Number of leading elements shared by `a` from `a_start` and `b` from
/// `b_start`, both relative to the buffers' positions.
///
/// Offsets past the remaining content clamp to an empty sequence, so the
/// result is zero. Neither buffer is modified.
#[must_use]
pub fn shared_prefix_len<T: PartialEq>(
    a: &Buffer<T>,
    a_start: usize,
    b: &Buffer<T>,
    b_start: usize,
) -> usize {
    slice_prefix_len(tail_or_empty(a, a_start), tail_or_empty(b, b_start))
}

/// [`shared_prefix_len`] with both offsets at zero.
#[inline]
#[must_use]
pub fn common_prefix_len<T: PartialEq>(a: &Buffer<T>, b: &Buffer<T>) -> usize {
    shared_prefix_len(a, 0, b, 0)
}

/// [`shared_prefix_len`] that rejects offsets instead of clamping them.
///
/// An offset equal to the remaining length is valid and compares an empty
/// sequence.
///
/// # Errors
///
/// Returns [`BufferError::OffsetOutOfRange`] for the first offset that is
/// past its buffer's remaining content.
pub fn checked_shared_prefix_len<T: PartialEq>(
    a: &Buffer<T>,
    a_start: usize,
    b: &Buffer<T>,
    b_start: usize,
) -> Result<usize, BufferError> {
    Ok(slice_prefix_len(tail(a, a_start)?, tail(b, b_start)?))
}

fn tail<T>(buffer: &Buffer<T>, start: usize) -> Result<&[T], BufferError> {
    buffer
        .as_slice()
        .get(start..)
        .ok_or(BufferError::OffsetOutOfRange {
            offset: start,
            remaining: buffer.remaining(),
        })
}

fn tail_or_empty<T>(buffer: &Buffer<T>, start: usize) -> &[T] {
    match tail(buffer, start) {
        Ok(tail) => tail,
        Err(_) => {
            trace!(
                offset = start,
                remaining = buffer.remaining(),
                "prefix offset past remaining content, clamped"
            );
            &[]
        }
    }
}
