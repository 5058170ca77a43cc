//! Constant generators.

use gen_prng::RandomSource;

use crate::generator::Generator;

/// A generator that always produces a clone of the same value.
///
/// Never consumes words from the source.
///
/// # Examples
///
/// ```rust
/// use gen_core::{always, Generator, Xoshiro};
///
/// let mut rng = Xoshiro::from_seed_u64(0);
/// let before = rng.current_state();
/// assert_eq!(always("x").run_with(&mut rng), "x");
/// assert_eq!(rng.current_state(), before);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Always<T> {
    value: T,
}

impl<T> Always<T> {
    /// Returns the constant value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Creates a generator of a constant value.
#[inline]
pub fn always<T: Clone>(value: T) -> Always<T> {
    Always { value }
}

impl<T: Clone> Generator for Always<T> {
    type Output = T;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, _rng: &mut R) -> T {
        self.value.clone()
    }
}

/// A generator that evaluates a zero-argument producer on every draw.
///
/// The producer may be lazy or side-effecting; it never sees the source, so
/// the source is never consumed.
#[derive(Clone, Copy)]
pub struct AlwaysWith<F> {
    producer: F,
}

/// Creates a generator that calls `producer` on every draw.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use gen_core::{always_with, Generator, Xoshiro};
///
/// let calls = Cell::new(0);
/// let counter = always_with(|| {
///     calls.set(calls.get() + 1);
///     calls.get()
/// });
/// let mut rng = Xoshiro::from_seed_u64(0);
/// assert_eq!(counter.run_with(&mut rng), 1);
/// assert_eq!(counter.run_with(&mut rng), 2);
/// ```
#[inline]
pub fn always_with<T, F: Fn() -> T>(producer: F) -> AlwaysWith<F> {
    AlwaysWith { producer }
}

impl<T, F: Fn() -> T> Generator for AlwaysWith<F> {
    type Output = T;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, _rng: &mut R) -> T {
        (self.producer)()
    }
}

impl<F> std::fmt::Debug for AlwaysWith<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlwaysWith").finish_non_exhaustive()
    }
}
