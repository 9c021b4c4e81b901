//! Array-specific error types.

use std::error::Error;
use std::fmt;

use crate::generation::Generation;

/// Errors reported by the checked operations of [`DynamicArray`](crate::DynamicArray).
///
/// A failed checked operation never modifies the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested position is not within `[0, len)`.
    ///
    /// Removing from an empty array reports `index: 0, len: 0`.
    OutOfRange {
        /// The position that was requested.
        index: usize,
        /// Number of live elements at the time of the request.
        len: usize,
    },
    /// A [`Cursor`](crate::Cursor) taken from storage that has since been
    /// reallocated, cleared or replaced.
    StaleCursor {
        /// The generation recorded in the cursor.
        cursor_generation: Generation,
        /// The generation of the array's current storage.
        current_generation: Generation,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                if *len == 0 {
                    write!(f, "index {index} out of range: array is empty")
                } else {
                    write!(f, "index {index} out of range for length {len}")
                }
            }
            Self::StaleCursor {
                cursor_generation,
                current_generation,
            } => {
                write!(
                    f,
                    "stale cursor: generation {cursor_generation}, storage is at generation {current_generation}"
                )
            }
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_index_and_len() {
        let err = ArrayError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn out_of_range_on_empty_array() {
        let err = ArrayError::OutOfRange { index: 0, len: 0 };
        assert_eq!(err.to_string(), "index 0 out of range: array is empty");
    }

    #[test]
    fn stale_cursor_message_names_both_generations() {
        let err = ArrayError::StaleCursor {
            cursor_generation: Generation(3),
            current_generation: Generation(9),
        };
        assert_eq!(
            err.to_string(),
            "stale cursor: generation 3, storage is at generation 9"
        );
    }

    #[test]
    fn usable_as_boxed_error() {
        let err: Box<dyn Error> = Box::new(ArrayError::OutOfRange { index: 1, len: 1 });
        assert!(err.to_string().contains("out of range"));
    }
}
