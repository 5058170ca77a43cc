//! Generator configuration.
//!
//! This module provides the explicit configuration values that stand in for
//! default-valued parameters:
//!
//! - [`Weights`]: count distributions steering a two-way weighted choice
//! - [`RetryPolicy`]: the opt-in attempt cap for bounded filter/compact

use crate::error::GenError;
use crate::gens::{always, Always};

/// Default weight of the left (`Some` / `Ok`) side of a two-way choice.
pub const DEFAULT_LEFT_WEIGHT: usize = 3;

/// Default weight of the right (`None` / `Err`) side of a two-way choice.
pub const DEFAULT_RIGHT_WEIGHT: usize = 1;

/// Default attempt cap for bounded retry combinators.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000;

/// Largest attempt cap a [`RetryPolicy`] accepts.
pub const MAX_ATTEMPTS: usize = 100_000_000;

/// Relative likelihood of the two sides of a weighted choice.
///
/// Both weights are *generators* of counts, drawn afresh on every draw of the
/// choice, so the odds may themselves be random. The default is a fixed
/// 3:1 split in favour of the left side.
///
/// # Examples
///
/// ```rust
/// use gen_core::{Generator, Weights, Xoshiro};
///
/// let mostly_none = gen_core::int_in(0..=9).optional_weighted(Weights::fixed(1, 9));
/// let mut rng = Xoshiro::from_seed_u64(1);
/// let nones = (0..1000).filter(|_| mostly_none.run_with(&mut rng).is_none()).count();
/// assert!(nones > 800);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights<L, R> {
    /// Count distribution of the left side.
    pub left: L,
    /// Count distribution of the right side.
    pub right: R,
}

impl<L, R> Weights<L, R> {
    /// Creates weights from two count generators.
    #[inline]
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl Weights<Always<usize>, Always<usize>> {
    /// Creates constant weights.
    #[inline]
    pub fn fixed(left: usize, right: usize) -> Self {
        Self::new(always(left), always(right))
    }
}

impl Default for Weights<Always<usize>, Always<usize>> {
    fn default() -> Self {
        Self::fixed(DEFAULT_LEFT_WEIGHT, DEFAULT_RIGHT_WEIGHT)
    }
}

/// Attempt cap for the bounded retry combinators.
///
/// The unbounded `filter` / `compact` combinators retry forever; a
/// `RetryPolicy` is how a caller opts into giving up instead.
/// Use [`RetryPolicy::builder`] to construct a validated instance.
///
/// # Examples
///
/// ```rust
/// use gen_core::RetryPolicy;
///
/// let policy = RetryPolicy::builder()
///     .max_attempts(64)
///     .build()
///     .expect("valid policy");
/// assert_eq!(policy.max_attempts(), 64);
///
/// assert_eq!(RetryPolicy::default().max_attempts(), 1_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RetryPolicy {
    max_attempts: usize,
}

impl RetryPolicy {
    /// Creates a new policy builder.
    #[inline]
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder::default()
    }

    /// Returns the maximum number of upstream draws.
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidMaxAttempts`] if `max_attempts` is 0 or
    /// greater than [`MAX_ATTEMPTS`].
    pub fn validate(&self) -> Result<(), GenError> {
        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPTS {
            return Err(GenError::InvalidMaxAttempts {
                attempts: self.max_attempts,
                max: MAX_ATTEMPTS,
            });
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Builder for [`RetryPolicy`].
#[derive(Clone, Debug, Default)]
pub struct RetryPolicyBuilder {
    max_attempts: Option<usize>,
}

impl RetryPolicyBuilder {
    /// Sets the maximum number of upstream draws.
    ///
    /// # Arguments
    ///
    /// * `max_attempts` - Attempt cap in [1, 100_000_000]
    #[inline]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Builds and validates the policy.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidMaxAttempts`] on an out-of-range cap.
    pub fn build(self) -> Result<RetryPolicy, GenError> {
        let policy = RetryPolicy {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
        };
        if let Err(err) = policy.validate() {
            tracing::warn!(max_attempts = policy.max_attempts, "rejected retry policy");
            return Err(err);
        }
        Ok(policy)
    }
}
