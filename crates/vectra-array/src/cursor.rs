//! Generation-checked positions into a [`DynamicArray`](crate::DynamicArray).
//!
//! A [`Cursor`] is an index plus the [`Generation`] of the storage it was
//! taken from. It does not borrow the array, so it can be held across
//! mutations; the array checks the generation on every dereference and
//! reports [`ArrayError::StaleCursor`](crate::ArrayError::StaleCursor)
//! instead of reading through an invalidated position.

use std::fmt;

use crate::generation::Generation;

/// Bidirectional position within one generation of an array's storage.
///
/// Obtained from [`DynamicArray::begin`](crate::DynamicArray::begin) and
/// [`DynamicArray::end`](crate::DynamicArray::end). Stepping never fails:
/// moving before `begin()` wraps to an index no array can hold, so the next
/// dereference reports `OutOfRange`.
///
/// Two cursors compare equal only if they point at the same index of the
/// same generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Cursor {
    generation: Generation,
    index: usize,
}

impl Cursor {
    pub(crate) fn new(generation: Generation, index: usize) -> Self {
        Self { generation, index }
    }

    /// The generation this cursor was taken from.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The index this cursor points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step forward and return the updated cursor (pre-increment).
    pub fn advance(&mut self) -> &mut Self {
        self.index = self.index.wrapping_add(1);
        self
    }

    /// Step forward and return the position before the step (post-increment).
    pub fn post_advance(&mut self) -> Self {
        let old = *self;
        self.advance();
        old
    }

    /// Step backward and return the updated cursor (pre-decrement).
    pub fn retreat(&mut self) -> &mut Self {
        self.index = self.index.wrapping_sub(1);
        self
    }

    /// Step backward and return the position before the step (post-decrement).
    pub fn post_retreat(&mut self) -> Self {
        let old = *self;
        self.retreat();
        old
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor(gen={}, index={})", self.generation, self.index)
    }
}
