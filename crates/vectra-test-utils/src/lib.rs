//! Test utilities and instrumented element types for Vectra development.
//!
//! Provides [`DropTracker`] and [`Tracked`] for checking that a container
//! constructs, clones and drops every value exactly once, plus sequence
//! fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub use fixtures::{ascending, labelled_strings};

/// Shared counters behind a [`DropTracker`] and its [`Tracked`] values.
struct Counts {
    created: AtomicUsize,
    dropped: AtomicUsize,
    /// Clones still permitted before `Tracked::clone` panics.
    clone_budget: AtomicUsize,
}

/// Counts constructions, clones and drops of the values it hands out.
///
/// ```
/// use vectra_test_utils::DropTracker;
///
/// let tracker = DropTracker::new();
/// let a = tracker.track(1);
/// let b = a.clone();
/// drop(a);
/// assert_eq!(tracker.created(), 2);
/// assert_eq!(tracker.dropped(), 1);
/// assert_eq!(tracker.live(), 1);
/// drop(b);
/// assert_eq!(tracker.live(), 0);
/// ```
#[derive(Clone)]
pub struct DropTracker {
    counts: Arc<Counts>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::with_clone_budget(usize::MAX)
    }

    /// A tracker whose values panic on the clone after `budget` successful ones.
    ///
    /// Used to check that containers stay consistent when `T::clone` unwinds.
    pub fn with_clone_budget(budget: usize) -> Self {
        Self {
            counts: Arc::new(Counts {
                created: AtomicUsize::new(0),
                dropped: AtomicUsize::new(0),
                clone_budget: AtomicUsize::new(budget),
            }),
        }
    }

    /// Wrap `value` so its lifetime is counted by this tracker.
    pub fn track<V>(&self, value: V) -> Tracked<V> {
        self.counts.created.fetch_add(1, Ordering::SeqCst);
        Tracked {
            value,
            counts: Arc::clone(&self.counts),
        }
    }

    /// Values created so far, including clones.
    pub fn created(&self) -> usize {
        self.counts.created.load(Ordering::SeqCst)
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counts.dropped.load(Ordering::SeqCst)
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

impl Default for DropTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A value whose clones and drops are reported to a [`DropTracker`].
///
/// Compares, formats and dereferences as the wrapped value.
pub struct Tracked<V> {
    value: V,
    counts: Arc<Counts>,
}

impl<V: Clone> Clone for Tracked<V> {
    fn clone(&self) -> Self {
        let permitted = self
            .counts
            .clone_budget
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |b| b.checked_sub(1))
            .is_ok();
        if !permitted {
            panic!("clone budget exhausted");
        }
        self.counts.created.fetch_add(1, Ordering::SeqCst);
        Self {
            value: self.value.clone(),
            counts: Arc::clone(&self.counts),
        }
    }
}

impl<V> Drop for Tracked<V> {
    fn drop(&mut self) {
        self.counts.dropped.fetch_add(1, Ordering::SeqCst);
    }
}

impl<V> Deref for Tracked<V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.value
    }
}

impl<V> DerefMut for Tracked<V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V: PartialEq> PartialEq for Tracked<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for Tracked<V> {}

impl<V: fmt::Debug> fmt::Debug for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<V: fmt::Display> fmt::Display for Tracked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
