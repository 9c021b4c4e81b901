//! Vectra: a growable, contiguous array with amortised O(1) append and
//! generation-checked cursors.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! Vectra sub-crates. For most users, adding `vectra` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use vectra::prelude::*;
//!
//! let mut a = DynamicArray::new();
//! for i in 0..5 {
//!     a.push(i);
//! }
//! assert_eq!(a.len(), 5);
//! assert_eq!(a.capacity(), 8);
//! assert_eq!(a.to_string(), "[0, 1, 2, 3, 4]");
//!
//! // Checked access reports the failing index.
//! assert_eq!(a.at(7), Err(ArrayError::OutOfRange { index: 7, len: 5 }));
//!
//! // Cursors remember which storage they were taken from.
//! let first = a.begin();
//! assert_eq!(a.at_cursor(&first), Ok(&0));
//! a.reserve(64);
//! assert!(matches!(a.at_cursor(&first), Err(ArrayError::StaleCursor { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `vectra-array` | `DynamicArray`, cursors, owning iterator, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The growable array and its supporting types (`vectra-array`).
///
/// [`array::DynamicArray`] is the container; [`array::Cursor`] and
/// [`array::Generation`] implement invalidation checks.
pub use vectra_array as array;

/// Common imports for typical Vectra usage.
///
/// ```rust
/// use vectra::prelude::*;
/// ```
pub mod prelude {
    pub use vectra_array::{ArrayError, Cursor, DynamicArray, Generation, IntoIter};
}
