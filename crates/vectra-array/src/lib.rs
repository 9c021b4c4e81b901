//! Growable contiguous storage for Vectra.
//!
//! Provides [`DynamicArray`], a heap-backed array with amortised O(1)
//! append, O(1) indexed access and explicit capacity management. This is
//! the only crate in the workspace that contains `unsafe` code, and all of
//! it lives in the private `raw` module.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray<T> (growth policy, errors, cursors, trait surface)
//! ├── RawBuf<T>   (owned allocation + initialised prefix, the unsafe core)
//! ├── Generation  (storage incarnation stamp, bumped on invalidation)
//! └── reallocation count (observable amortisation)
//! ```
//!
//! # Capacity contract
//!
//! - **Default:** [`DynamicArray::DEFAULT_CAPACITY`] slots (4).
//! - **Growth:** capacity doubles when an append finds the array full;
//!   an empty allocation grows to one slot.
//! - **Clone:** the copy reserves the source's capacity, not its length.
//! - **Clear:** drops every element and keeps the allocation.
//!
//! # Cursors
//!
//! Borrowed iteration goes through slice iterators, which the borrow
//! checker keeps valid. For position-style access that has to survive
//! across mutations, [`Cursor`] carries the [`Generation`] of the storage
//! it was taken from, and dereferencing it after the storage has been
//! reallocated or cleared reports [`ArrayError::StaleCursor`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod error;
pub mod generation;
pub mod iter;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use cursor::Cursor;
pub use error::ArrayError;
pub use generation::Generation;
pub use iter::IntoIter;
