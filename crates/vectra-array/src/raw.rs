//! Owned contiguous storage with an initialised prefix.
//!
//! [`RawBuf`] is the only place in this crate that talks to the allocator
//! or reads and writes through raw pointers. Everything it exposes to the
//! rest of the crate is safe: slots `[0, len)` are visible as a slice,
//! slots `[len, cap)` are never handed out.
//!
//! Every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

/// Exclusively owned allocation of `cap` slots, of which the first `len`
/// hold live values.
///
/// Zero-sized element types never allocate; `cap` is still tracked so the
/// logical capacity contract holds for them too.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its elements, exactly like Box<[T]>. Sending
// or sharing it is sound under the same bounds as sending or sharing T.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above; &RawBuf only ever hands out &T.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Allocate exactly `capacity` slots. A capacity of zero does not allocate.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut buf = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _owns: PhantomData,
        };
        if capacity > 0 {
            buf.grow_exact(capacity);
        }
        buf
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: ptr is non-null and aligned (dangling only when nothing is
        // allocated, in which case len is 0 or T is zero-sized), and slots
        // [0, len) are initialised.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; &mut self guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Write `value` into the first free slot.
    ///
    /// # Panics
    ///
    /// Panics if there is no free slot; callers grow first.
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < self.cap, "push past the end of allocated storage");
        // SAFETY: len < cap, so the slot lies inside the allocation and holds
        // no live value that could be overwritten without being dropped.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Move the last live value out, or `None` if there is none.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` was initialised. Shrinking
        // len first hands its ownership to the caller exactly once.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Drop every live value, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covers exactly the previously initialised prefix.
        // len is already 0, so a panicking destructor cannot lead to a
        // second drop of the same values.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Reallocate to exactly `new_cap` slots, moving the live prefix.
    ///
    /// Moves in Rust are bitwise and cannot fail, so `realloc` (or a fresh
    /// `alloc` when nothing was allocated) is all that is needed.
    pub(crate) fn grow_exact(&mut self, new_cap: usize) {
        debug_assert!(new_cap > self.cap, "grow_exact must grow");
        let new_layout = layout_for::<T>(new_cap);
        if new_layout.size() == 0 {
            // Zero-sized element types never touch the allocator.
            self.cap = new_cap;
            return;
        }

        let old_layout = layout_for::<T>(self.cap);
        let raw = if old_layout.size() == 0 {
            // SAFETY: new_layout has non-zero size.
            unsafe { alloc::alloc(new_layout) }
        } else {
            // SAFETY: ptr was returned by alloc/realloc with old_layout, and
            // new_layout.size() is non-zero and was validated by Layout::array.
            unsafe { alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) }
        };

        self.ptr = match NonNull::new(raw.cast::<T>()) {
            Some(p) => p,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    fn release(&mut self) {
        let layout = layout_for::<T>(self.cap);
        if layout.size() != 0 {
            // SAFETY: a non-zero layout for `cap` means ptr was allocated
            // with exactly this layout and has not been freed.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.clear();
        self.release();
    }
}

/// Consuming iterator state over a [`RawBuf`].
///
/// Takes over the live prefix at construction (the inner buffer's `len` is
/// zeroed so it only frees memory on drop). Values in `[start, end)` are
/// still owned by the iterator.
pub(crate) struct RawIntoIter<T> {
    buf: RawBuf<T>,
    start: usize,
    end: usize,
}

impl<T> RawIntoIter<T> {
    pub(crate) fn new(mut buf: RawBuf<T>) -> Self {
        let end = mem::replace(&mut buf.len, 0);
        Self { buf, start: 0, end }
    }

    pub(crate) fn remaining(&self) -> &[T] {
        // SAFETY: [start, end) holds initialised values not yet yielded, and
        // start <= end <= cap.
        unsafe {
            slice::from_raw_parts(self.buf.ptr.as_ptr().add(self.start), self.end - self.start)
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn next_front(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        let index = self.start;
        self.start += 1;
        // SAFETY: slot `index` is initialised and, with start moved past it,
        // is never read or dropped by the iterator again.
        Some(unsafe { self.buf.ptr.as_ptr().add(index).read() })
    }

    pub(crate) fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: as in `next_front`, for the slot just excluded from the range.
        Some(unsafe { self.buf.ptr.as_ptr().add(self.end).read() })
    }
}

impl<T> Drop for RawIntoIter<T> {
    fn drop(&mut self) {
        let rest: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: start <= cap, so the offset stays inside (or one past) the allocation.
            unsafe { self.buf.ptr.as_ptr().add(self.start) },
            self.end - self.start,
        );
        self.start = self.end;
        // SAFETY: `rest` is exactly the set of values still owned by the
        // iterator; the range is emptied first so they are dropped once.
        unsafe { ptr::drop_in_place(rest) };
        // `buf` (len 0) then frees the allocation.
    }
}

fn layout_for<T>(capacity: usize) -> Layout {
    match Layout::array::<T>(capacity) {
        Ok(layout) => layout,
        Err(_) => capacity_overflow(),
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectra_test_utils::DropTracker;

    #[test]
    fn zero_capacity_does_not_allocate() {
        let buf: RawBuf<u64> = RawBuf::with_capacity(0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.len(), 0);
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn push_and_pop_round_trip() {
        let mut buf = RawBuf::with_capacity(3);
        buf.push(1u32);
        buf.push(2);
        assert_eq!(buf.as_slice(), &[1, 2]);
        assert_eq!(buf.pop(), Some(2));
        assert_eq!(buf.pop(), Some(1));
        assert_eq!(buf.pop(), None);
    }

    #[test]
    #[should_panic(expected = "push past the end of allocated storage")]
    fn push_into_full_buffer_panics() {
        let mut buf = RawBuf::with_capacity(1);
        buf.push(1u8);
        buf.push(2u8);
    }

    #[test]
    fn grow_preserves_prefix() {
        let mut buf = RawBuf::with_capacity(2);
        buf.push(String::from("a"));
        buf.push(String::from("b"));
        buf.grow_exact(16);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.as_slice(), &["a", "b"]);
    }

    #[test]
    fn grow_from_zero_allocates() {
        let mut buf = RawBuf::with_capacity(0);
        buf.grow_exact(1);
        buf.push(9i64);
        assert_eq!(buf.as_slice(), &[9]);
    }

    #[test]
    fn zero_sized_types_track_logical_capacity() {
        let mut buf = RawBuf::with_capacity(2);
        buf.push(());
        buf.push(());
        buf.grow_exact(4);
        buf.push(());
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn clear_and_drop_release_each_value_once() {
        let tracker = DropTracker::new();
        {
            let mut buf = RawBuf::with_capacity(4);
            for i in 0..4 {
                buf.push(tracker.track(i));
            }
            buf.clear();
            assert_eq!(tracker.dropped(), 4);
            buf.push(tracker.track(99));
        }
        assert_eq!(tracker.dropped(), 5);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn into_iter_drops_unconsumed_values() {
        let tracker = DropTracker::new();
        let mut buf = RawBuf::with_capacity(5);
        for i in 0..5 {
            buf.push(tracker.track(i));
        }
        let mut iter = RawIntoIter::new(buf);
        let first = iter.next_front().unwrap();
        let last = iter.next_back().unwrap();
        assert_eq!(*first, 0);
        assert_eq!(*last, 4);
        assert_eq!(iter.len(), 3);
        drop(iter);
        assert_eq!(tracker.dropped(), 3);
        drop((first, last));
        assert_eq!(tracker.live(), 0);
    }
}
