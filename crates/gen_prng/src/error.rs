//! Error types for the word source layer.

use thiserror::Error;

/// Errors produced while decoding a serialised PRNG [`State`](crate::State).
///
/// # Variants
/// - `InvalidLength`: the JSON array did not hold exactly four words
/// - `Json`: the input was not a JSON array of unsigned 64-bit integers
///
/// # Examples
/// ```
/// use gen_prng::{State, StateError};
///
/// let err = State::from_json("[1,2,3]").unwrap_err();
/// assert!(matches!(err, StateError::InvalidLength { expected: 4, found: 3 }));
/// assert_eq!(err.to_string(), "expected 4 state words, found 3");
/// ```
#[derive(Error, Debug)]
pub enum StateError {
    /// The serialised array has the wrong number of elements.
    #[error("expected {expected} state words, found {found}")]
    InvalidLength {
        /// Number of words a state is made of
        expected: usize,
        /// Number of words present in the input
        found: usize,
    },

    /// The input is not a JSON array of unsigned 64-bit integers.
    #[error("malformed state encoding: {0}")]
    Json(#[from] serde_json::Error),
}
