//! Reusable input sequences.
//!
//! - [`ascending`]: `0, 1, ..., n - 1` as `i32`.
//! - [`labelled_strings`]: `"string_0", "string_1", ...`, owning text for
//!   copy-independence checks.

/// The integers `0..n` in order.
pub fn ascending(n: i32) -> Vec<i32> {
    (0..n).collect()
}

/// `n` distinct owned strings of the form `string_{i}`.
pub fn labelled_strings(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("string_{i}")).collect()
}
