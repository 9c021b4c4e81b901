//! Push-throughput harness for Vectra.
//!
//! Times filling a [`Vec`] and a [`DynamicArray`](vectra_array::DynamicArray)
//! with owned strings under the same [`BenchConfig`]. The `vectra-bench`
//! binary drives [`run_comparison`] from the command line; the criterion
//! benches under `benches/` cover finer-grained operations.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod harness;

pub use config::{BenchConfig, BenchError};
pub use harness::{run_comparison, run_push_trials, PushTarget, TrialReport};
