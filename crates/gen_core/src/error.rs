//! Error types for generator construction and bounded draws.
//!
//! Generators fail fast: misuse that can be detected from the definition
//! alone (an empty frequency table, an invalid retry policy, bad
//! distribution parameters) is reported when the generator is built, never
//! during a draw. The only draw-time error is [`GenError::RetriesExhausted`],
//! produced exclusively by the opt-in bounded retry combinators.

use thiserror::Error;

/// Errors produced by the generator layer.
///
/// # Variants
/// - `EmptyFrequencyTable`: a frequency table was built from no entries
/// - `ZeroTotalWeight`: every entry of a frequency table has weight zero
/// - `WeightOverflow`: frequency weights do not fit in `usize` when summed
/// - `InvalidMaxAttempts`: a retry policy allows no attempts or too many
/// - `RetriesExhausted`: a bounded retry combinator gave up
/// - `InvalidDistribution`: distribution parameters were rejected
///
/// # Examples
/// ```
/// use gen_core::GenError;
///
/// let err = GenError::RetriesExhausted { attempts: 10 };
/// assert_eq!(err.to_string(), "no acceptable value after 10 attempts");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// The frequency table has no entries.
    #[error("frequency table is empty")]
    EmptyFrequencyTable,

    /// All frequency weights are zero.
    #[error("frequency table weights sum to zero")]
    ZeroTotalWeight,

    /// The sum of frequency weights overflows.
    #[error("frequency table weights overflow usize")]
    WeightOverflow,

    /// Retry policy attempt count outside `[1, max]`.
    #[error("invalid max attempts {attempts}: must be in range [1, {max}]")]
    InvalidMaxAttempts {
        /// Requested attempt count
        attempts: usize,
        /// Largest accepted attempt count
        max: usize,
    },

    /// A bounded retry combinator drew no acceptable value.
    #[error("no acceptable value after {attempts} attempts")]
    RetriesExhausted {
        /// Number of upstream draws made
        attempts: usize,
    },

    /// Distribution parameters were rejected.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_error_display() {
        assert_eq!(
            GenError::EmptyFrequencyTable.to_string(),
            "frequency table is empty"
        );
        assert_eq!(
            GenError::ZeroTotalWeight.to_string(),
            "frequency table weights sum to zero"
        );
        let err = GenError::InvalidMaxAttempts {
            attempts: 0,
            max: 100,
        };
        assert!(err.to_string().contains("invalid max attempts 0"));
    }

    #[test]
    fn test_distribution_error_display() {
        let err = GenError::InvalidDistribution("std_dev < 0".to_string());
        assert_eq!(err.to_string(), "invalid distribution: std_dev < 0");
    }
}
