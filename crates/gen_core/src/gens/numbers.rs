//! Uniform numeric generators.

use std::ops::RangeInclusive;

use gen_prng::RandomSource;
use num_traits::{Float, PrimInt};
use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::generator::Generator;

/// Uniform generator over an inclusive range.
///
/// Produced by [`int_in`] and [`float_in`]; the bounds are checked when the
/// generator is built, so a draw never fails.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranged<T> {
    lo: T,
    hi: T,
}

impl<T: Copy> Ranged<T> {
    /// Returns the inclusive lower bound.
    #[inline]
    pub fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub fn hi(&self) -> T {
        self.hi
    }
}

impl<T> Generator for Ranged<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    type Output = T;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T {
        rng.gen_range(self.lo..=self.hi)
    }
}

/// Uniform integer in `range`, both ends inclusive.
///
/// # Panics
///
/// Panics if the range is empty (`lo > hi`).
///
/// # Examples
///
/// ```rust
/// use gen_core::{int_in, Generator, Xoshiro};
///
/// let die = int_in(1u8..=6);
/// let mut rng = Xoshiro::from_seed_u64(42);
/// for _ in 0..100 {
///     let face = die.run_with(&mut rng);
///     assert!((1..=6).contains(&face));
/// }
/// ```
pub fn int_in<T>(range: RangeInclusive<T>) -> Ranged<T>
where
    T: PrimInt + SampleUniform + std::fmt::Debug,
{
    let (lo, hi) = range.into_inner();
    assert!(lo <= hi, "empty integer range {:?}..={:?}", lo, hi);
    Ranged { lo, hi }
}

/// Uniform float in `range`, both ends inclusive.
///
/// # Panics
///
/// Panics if either bound is not finite, if `lo > hi`, or if `hi - lo`
/// overflows to infinity.
///
/// # Examples
///
/// ```rust
/// use gen_core::{float_in, Generator, Xoshiro};
///
/// let unit = float_in(0.0f64..=1.0);
/// let x = unit.run_with(&mut Xoshiro::from_seed_u64(1));
/// assert!((0.0..=1.0).contains(&x));
/// ```
pub fn float_in<T>(range: RangeInclusive<T>) -> Ranged<T>
where
    T: Float + SampleUniform + std::fmt::Debug,
{
    let (lo, hi) = range.into_inner();
    assert!(
        lo.is_finite() && hi.is_finite(),
        "float range bounds must be finite, got {:?}..={:?}",
        lo,
        hi
    );
    assert!(lo <= hi, "empty float range {:?}..={:?}", lo, hi);
    assert!((hi - lo).is_finite(), "float range {:?}..={:?} is too wide", lo, hi);
    Ranged { lo, hi }
}

/// Fair coin flip, returned by [`bool()`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bool;

impl Generator for Bool {
    type Output = bool;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen()
    }
}

/// Generator of `true` and `false` with equal probability.
#[inline]
pub fn bool() -> Bool {
    Bool
}
