//! The growable contiguous array.
//!
//! [`DynamicArray`] layers the growth policy, checked access, cursors and
//! the standard trait surface on top of the owned buffer in `raw.rs`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ArrayError;
use crate::generation::Generation;
use crate::iter::IntoIter;
use crate::raw::{self, RawBuf, RawIntoIter};

/// A heap-allocated, growable, contiguous array.
///
/// Appends are amortised O(1): when an append finds the array full, the
/// capacity doubles, so `N` appends from empty cause O(log N)
/// reallocations. Indexed access is O(1).
///
/// # Capacity contract
///
/// | operation | resulting capacity |
/// |---|---|
/// | [`new`](Self::new) / `default` | [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) |
/// | [`with_capacity(n)`](Self::with_capacity) | exactly `n` (0 allocates nothing) |
/// | [`from_values`](Self::from_values) | `max(count, DEFAULT_CAPACITY)` for exact-size input |
/// | `clone` | the source's capacity |
/// | [`clear`](Self::clear) | unchanged |
/// | [`take`](Self::take) (source) | `DEFAULT_CAPACITY` |
///
/// # Hazards
///
/// `a[i]` is the fast path: an out-of-range index panics rather than
/// returning an error. Use [`at`](Self::at) for a recoverable check, or the
/// slice method `get_unchecked` (through `Deref`) when the caller has
/// already proven the index is in range.
pub struct DynamicArray<T> {
    buf: RawBuf<T>,
    /// Stamp of the current storage incarnation, checked by cursors.
    generation: Generation,
    /// Reallocations performed since construction.
    reallocations: usize,
}

impl<T> DynamicArray<T> {
    /// Capacity of a default-constructed array.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Create an empty array with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty array with exactly `capacity` slots.
    ///
    /// A capacity of 0 allocates nothing; the first append then grows the
    /// array to a single slot.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            generation: Generation::next(),
            reallocations: 0,
        }
    }

    /// Build an array holding `values` in iteration order.
    ///
    /// The initial allocation is `max(lower size hint, DEFAULT_CAPACITY)`,
    /// so for exact-size inputs the final capacity is
    /// `max(count, DEFAULT_CAPACITY)` with no reallocation.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        let mut array = Self::with_capacity(lower.max(Self::DEFAULT_CAPACITY));
        for value in values {
            array.push(value);
        }
        array
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generation of the current storage. Changes whenever element
    /// positions are invalidated.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of reallocations this array has performed since it was built.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Append `value`, doubling the capacity first if the array is full.
    pub fn push(&mut self, value: T) {
        if self.len() == self.capacity() {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Drop the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`try_remove_last`](Self::try_remove_last)
    /// or [`pop`](Self::pop) when emptiness is a normal condition.
    #[track_caller]
    pub fn remove_last(&mut self) {
        if self.buf.pop().is_none() {
            panic!("remove_last on an empty DynamicArray");
        }
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ArrayError::OutOfRange`] on an empty array, which is left
    /// unchanged.
    pub fn try_remove_last(&mut self) -> Result<T, ArrayError> {
        self.buf
            .pop()
            .ok_or(ArrayError::OutOfRange { index: 0, len: 0 })
    }

    /// Remove and return the last element, or `None` if the array is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.buf.pop()
    }

    /// Checked access to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len();
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Drop every element. The allocation is kept; outstanding cursors
    /// become stale.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.generation = Generation::next();
    }

    /// Ensure room for at least `new_capacity` elements in total.
    ///
    /// A no-op when `new_capacity <= capacity()`. Otherwise reallocates to
    /// exactly `new_capacity` slots, moving the live elements across.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.reallocate(new_capacity);
    }

    /// Move the contents out in O(1), leaving `self` as a fresh
    /// default-constructed array that is ready for reuse.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Replace the contents of `self` with those of `source`, leaving
    /// `source` default-constructed. The previous storage of `self` is
    /// released.
    pub fn move_assign(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchange the contents of two arrays in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Borrowing iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutably borrowing iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Cursor at the first element (equal to [`end`](Self::end) when empty).
    pub fn begin(&self) -> Cursor {
        self.cursor_at(0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor {
        self.cursor_at(self.len())
    }

    /// Cursor at an arbitrary `index` of the current storage. The index is
    /// checked when the cursor is dereferenced, not here.
    pub fn cursor_at(&self, index: usize) -> Cursor {
        Cursor::new(self.generation, index)
    }

    /// Dereference `cursor`.
    ///
    /// Fails with [`ArrayError::StaleCursor`] if the storage has been
    /// invalidated since the cursor was taken, or [`ArrayError::OutOfRange`]
    /// if it points at or past the end.
    pub fn at_cursor(&self, cursor: &Cursor) -> Result<&T, ArrayError> {
        let index = self.resolve(cursor)?;
        Ok(&self.as_slice()[index])
    }

    /// Mutable counterpart of [`at_cursor`](Self::at_cursor).
    pub fn at_cursor_mut(&mut self, cursor: &Cursor) -> Result<&mut T, ArrayError> {
        let index = self.resolve(cursor)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    fn resolve(&self, cursor: &Cursor) -> Result<usize, ArrayError> {
        if cursor.generation() != self.generation {
            return Err(ArrayError::StaleCursor {
                cursor_generation: cursor.generation(),
                current_generation: self.generation,
            });
        }
        let index = cursor.index();
        let len = self.len();
        if index >= len {
            return Err(ArrayError::OutOfRange { index, len });
        }
        Ok(index)
    }

    fn grow(&mut self) {
        let new_capacity = match self.capacity() {
            0 => 1,
            capacity => capacity
                .checked_mul(2)
                .unwrap_or_else(|| raw::capacity_overflow()),
        };
        self.reallocate(new_capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        self.buf.grow_exact(new_capacity);
        self.generation = Generation::next();
        self.reallocations += 1;
        trace!(
            old_capacity,
            new_capacity,
            len = self.len(),
            generation = self.generation.0,
            "reallocated array storage"
        );
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.iter() {
            copy.push(value.clone());
        }
        copy
    }

    /// Copy-and-swap: the copy is built completely before `self` is
    /// touched, so a panicking `T::clone` leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut staged = source.clone();
        self.swap(&mut staged);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Equality is length plus pairwise element equality; capacity and
// generation never take part.

impl<T: PartialEq<U>, U> PartialEq<DynamicArray<U>> for DynamicArray<T> {
    fn eq(&self, other: &DynamicArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynamicArray<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for DynamicArray<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynamicArray<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the live elements as `[a, b, c]`, or `[]` when empty.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let DynamicArray { buf, .. } = self;
        IntoIter::new(RawIntoIter::new(buf))
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from_values(values.iter().cloned())
    }
}
