//! Adapters for `rand` distributions.

use std::marker::PhantomData;

use gen_prng::RandomSource;
use rand::distributions::Distribution;
use rand_distr::Normal;

use crate::error::GenError;
use crate::generator::Generator;

/// Generator sampling a [`Distribution`] once per draw.
pub struct FromDistribution<D, T> {
    distribution: D,
    _output: PhantomData<fn() -> T>,
}

impl<D: Clone, T> Clone for FromDistribution<D, T> {
    fn clone(&self) -> Self {
        Self {
            distribution: self.distribution.clone(),
            _output: PhantomData,
        }
    }
}

impl<D: Copy, T> Copy for FromDistribution<D, T> {}

impl<D: std::fmt::Debug, T> std::fmt::Debug for FromDistribution<D, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromDistribution")
            .field("distribution", &self.distribution)
            .finish()
    }
}

impl<D, T> FromDistribution<D, T> {
    /// Returns the wrapped distribution.
    #[inline]
    pub fn distribution(&self) -> &D {
        &self.distribution
    }
}

impl<D: Distribution<T>, T> Generator for FromDistribution<D, T> {
    type Output = T;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T {
        self.distribution.sample(rng)
    }
}

/// Wraps any [`Distribution`] as a generator.
///
/// # Examples
///
/// ```rust
/// use gen_core::{from_distribution, Generator, Xoshiro};
/// use rand_distr::Exp;
///
/// let waits = from_distribution::<_, f64>(Exp::new(2.0).expect("positive rate"));
/// assert!(waits.run_with(&mut Xoshiro::from_seed_u64(0)) >= 0.0);
/// ```
#[inline]
pub fn from_distribution<D: Distribution<T>, T>(distribution: D) -> FromDistribution<D, T> {
    FromDistribution {
        distribution,
        _output: PhantomData,
    }
}

/// Normally distributed `f64` with the given mean and standard deviation.
///
/// # Errors
///
/// Returns [`GenError::InvalidDistribution`] if `std_dev` is negative or
/// not finite.
pub fn normal(mean: f64, std_dev: f64) -> Result<FromDistribution<Normal<f64>, f64>, GenError> {
    // rand_distr only rejects a non-finite std_dev
    if std_dev.is_nan() || std_dev < 0.0 {
        tracing::warn!(mean, std_dev, "rejected normal distribution");
        return Err(GenError::InvalidDistribution(format!(
            "standard deviation must be non-negative, got {}",
            std_dev
        )));
    }
    match Normal::new(mean, std_dev) {
        Ok(distribution) => Ok(from_distribution(distribution)),
        Err(err) => {
            tracing::warn!(mean, std_dev, "rejected normal distribution");
            Err(GenError::InvalidDistribution(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Xoshiro;

    #[test]
    fn test_normal_sample_mean() {
        let heights = normal(170.0, 10.0).unwrap();
        let mut rng = Xoshiro::from_seed_u64(21);
        let n = 20_000;
        let mean = (0..n).map(|_| heights.run_with(&mut rng)).sum::<f64>() / n as f64;
        approx::assert_abs_diff_eq!(mean, 170.0, epsilon = 0.5);
    }

    #[test]
    fn test_normal_rejects_negative_std_dev() {
        assert!(matches!(
            normal(0.0, -1.0),
            Err(GenError::InvalidDistribution(_))
        ));
    }

    #[test]
    fn test_normal_rejects_nan_and_infinite_std_dev() {
        for std_dev in [f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            assert!(
                matches!(normal(0.0, std_dev), Err(GenError::InvalidDistribution(_))),
                "std_dev = {}",
                std_dev
            );
        }
    }

    #[test]
    fn test_negative_std_dev_message() {
        let err = normal(1.0, -0.5).unwrap_err();
        assert!(err.to_string().contains("non-negative"), "{}", err);
    }

    #[test]
    fn test_zero_std_dev_is_constant() {
        let fixed = normal(3.0, 0.0).unwrap();
        let mut rng = Xoshiro::from_seed_u64(0);
        assert_eq!(fixed.run_with(&mut rng), 3.0);
    }
}
