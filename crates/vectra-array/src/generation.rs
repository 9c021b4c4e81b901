//! Storage generations.
//!
//! Every incarnation of an array's storage is stamped with a [`Generation`]
//! drawn from a process-wide monotonic counter. Operations that invalidate
//! element positions (growth, `reserve`, `clear`, wholesale replacement)
//! take a fresh generation, so a [`Cursor`](crate::Cursor) recorded against
//! the old storage can be recognised as stale in O(1).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`Generation`] allocation.
static GENERATION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies one incarnation of an array's storage.
///
/// Generations are unique within the process: two distinct arrays never
/// share one, and an array never returns to a generation it has left.
/// Moving an array (including [`DynamicArray::take`](crate::DynamicArray::take))
/// carries its generation along with the storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// Allocate a fresh, never-before-seen generation. Thread-safe.
    pub fn next() -> Self {
        Self(GENERATION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_strictly_increasing() {
        let a = Generation::next();
        let b = Generation::next();
        assert!(b > a);
    }

    #[test]
    fn next_is_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..1000).map(|_| Generation::next()).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<Generation> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
