//! Fixed-capacity buffers addressed through a position and a limit.
//!
//! A [`Buffer`] owns its storage and never grows. Two indices describe the
//! readable or writable window inside it:
//!
//! - `position` is the cursor where the next relative read or write happens.
//! - `limit` is the first index past the valid content.
//!
//! The invariant `0 <= position <= limit <= capacity` holds after every
//! operation. Mutators that would break it fail with a [`BufferError`] and
//! leave the buffer untouched.
//!
//! Every consumer in this crate addresses content relative to `position`;
//! [`Buffer::as_slice`] is the view they work on.
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::error::BufferError;

/// An owned, fixed-capacity container with a read/write cursor.
#[derive(Clone)]
pub struct Buffer<T> {
    storage: Box<[T]>,
    position: usize,
    limit: usize,
}

/// A buffer of bytes.
pub type ByteBuffer = Buffer<u8>;

/// A buffer of characters.
pub type CharBuffer = Buffer<char>;

impl<T: Copy + Default> Buffer<T> {
    /// Allocates a buffer of exactly `capacity` default-valued elements.
    ///
    /// The position is zero and the limit equals the capacity.
    #[must_use]
    pub fn allocate(capacity: usize) -> Self {
        Self {
            storage: vec![T::default(); capacity].into_boxed_slice(),
            position: 0,
            limit: capacity,
        }
    }
}

impl<T> Buffer<T> {
    /// Wraps existing content. The whole vector becomes the readable window.
    #[must_use]
    pub fn wrap(content: Vec<T>) -> Self {
        let storage = content.into_boxed_slice();
        let limit = storage.len();
        Self {
            storage,
            position: 0,
            limit,
        }
    }

    /// Total number of elements the buffer can hold.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Current cursor.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// First index past the valid content.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of elements between the position and the limit.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Whether any element is left before the limit.
    #[inline]
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        self.position < self.limit
    }

    /// Moves the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfBounds`] if `position` is past the
    /// limit.
    pub fn set_position(&mut self, position: usize) -> Result<(), BufferError> {
        if position > self.limit {
            return Err(BufferError::PositionOutOfBounds {
                position,
                limit: self.limit,
            });
        }
        self.position = position;
        Ok(())
    }

    /// Moves the limit. A position past the new limit is pulled back to it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::LimitOutOfBounds`] if `limit` is past the
    /// capacity.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), BufferError> {
        if limit > self.capacity() {
            return Err(BufferError::LimitOutOfBounds {
                limit,
                capacity: self.capacity(),
            });
        }
        self.limit = limit;
        self.position = self.position.min(limit);
        Ok(())
    }

    /// Resets the window to the whole storage. Content is kept.
    pub fn clear(&mut self) {
        self.position = 0;
        self.limit = self.capacity();
    }

    /// Turns the written prefix into the readable window: the limit becomes
    /// the current position and the position returns to zero.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Returns the position to zero, keeping the limit.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// The remaining elements, `[position, limit)`.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.position..self.limit]
    }

    /// Mutable view of the remaining elements, `[position, limit)`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[self.position..self.limit]
    }

    /// The whole backing storage regardless of position and limit.
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &[T] {
        &self.storage
    }
}

impl<T: Copy> Buffer<T> {
    /// Reads the element at the position and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Underflow`] if nothing remains.
    pub fn get(&mut self) -> Result<T, BufferError> {
        let value = *self.as_slice().first().ok_or(BufferError::Underflow)?;
        self.position += 1;
        Ok(value)
    }

    /// Reads the element at an absolute index below the limit.
    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<T> {
        self.storage[..self.limit].get(index).copied()
    }

    /// Writes one element at the position and advances past it.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Overflow`] if the position is at the limit.
    pub fn put(&mut self, value: T) -> Result<(), BufferError> {
        self.put_slice(&[value])
    }

    /// Writes all of `src` at the position and advances past it. Nothing is
    /// written unless the whole slice fits.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Overflow`] if `src` is longer than the
    /// remaining window.
    pub fn put_slice(&mut self, src: &[T]) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if src.len() > remaining {
            return Err(BufferError::Overflow {
                requested: src.len(),
                remaining,
            });
        }
        let end = self.position + src.len();
        self.storage[self.position..end].copy_from_slice(src);
        self.position = end;
        Ok(())
    }
}

impl ByteBuffer {
    /// The remaining bytes as a byte string, handy for display and
    /// inspection.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_slice())
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::wrap(Vec::new())
    }
}

impl<T> From<Vec<T>> for Buffer<T> {
    fn from(content: Vec<T>) -> Self {
        Self::wrap(content)
    }
}

impl<T: Clone> From<&[T]> for Buffer<T> {
    fn from(content: &[T]) -> Self {
        Self::wrap(content.to_vec())
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("remaining", &self.as_slice())
            .finish()
    }
}
