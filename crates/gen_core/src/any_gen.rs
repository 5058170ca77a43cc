//! Type-erased generators.

use std::fmt;
use std::sync::Arc;

use gen_prng::RandomSource;
use rand::RngCore;

use crate::generator::Generator;

/// A generator of `T` with its concrete type erased.
///
/// Deeply composed generators have long, unnameable types; `AnyGen` gives
/// them a single nameable one at the cost of one dynamic call per draw.
/// Draws are forwarded unchanged, so an erased generator produces the same
/// values and consumes the same words as the generator it wraps.
///
/// Cloning is cheap and shares the wrapped generator.
///
/// # Examples
///
/// ```rust
/// use gen_core::{int_in, AnyGen, Generator, Xoshiro};
///
/// fn coin() -> AnyGen<&'static str> {
///     int_in(0u8..=1).map(|x| if x == 0 { "heads" } else { "tails" }).boxed()
/// }
///
/// let face = coin().run_with(&mut Xoshiro::from_seed_u64(6));
/// assert!(face == "heads" || face == "tails");
/// ```
pub struct AnyGen<T> {
    run: Arc<dyn Fn(&mut dyn RngCore) -> T + Send + Sync>,
}

impl<T> AnyGen<T> {
    /// Erases the type of `generator`.
    pub fn new<G>(generator: G) -> Self
    where
        G: Generator<Output = T> + Send + Sync + 'static,
    {
        Self::from_fn(move |rng| generator.run_with(rng))
    }

    /// Builds a generator directly from a function of the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_core::{AnyGen, Generator, Xoshiro};
    ///
    /// let word = AnyGen::from_fn(|rng| rng.next_u64());
    /// let mut a = Xoshiro::from_seed_u64(1);
    /// let mut b = Xoshiro::from_seed_u64(1);
    /// assert_eq!(word.run_with(&mut a), b.next_u64());
    /// ```
    pub fn from_fn<F>(run: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> T + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }
}

impl<T> Clone for AnyGen<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for AnyGen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyGen")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T> Generator for AnyGen<T> {
    type Output = T;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T {
        // `&mut R` is sized and implements `RngCore` even when `R` is not
        let mut rng = rng;
        (self.run)(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int_in, letter, Xoshiro};

    #[test]
    fn test_erasure_preserves_draws_and_state() {
        let concrete = int_in(0u32..=1_000_000).zip(letter());
        let erased = concrete.clone().boxed();

        let mut rng1 = Xoshiro::from_seed_u64(44);
        let mut rng2 = Xoshiro::from_seed_u64(44);
        for _ in 0..100 {
            assert_eq!(concrete.run_with(&mut rng1), erased.run_with(&mut rng2));
        }
        assert_eq!(rng1.current_state(), rng2.current_state());
    }

    #[test]
    fn test_clones_share_generator() {
        let erased = AnyGen::new(int_in(1u8..=6));
        let copy = erased.clone();
        let mut rng1 = Xoshiro::from_seed_u64(2);
        let mut rng2 = Xoshiro::from_seed_u64(2);
        assert_eq!(erased.run_with(&mut rng1), copy.run_with(&mut rng2));
        assert!(Arc::ptr_eq(&erased.run, &copy.run));
    }

    #[test]
    fn test_runs_with_dyn_source() {
        let erased = AnyGen::new(int_in(0u8..=9));
        let mut xoshiro = Xoshiro::from_seed_u64(3);
        let source: &mut dyn RngCore = &mut xoshiro;
        assert!(erased.run_with(source) <= 9);
    }

    #[test]
    fn test_debug_names_output_type() {
        let erased = AnyGen::new(int_in(0u8..=9));
        assert!(format!("{:?}", erased).contains("u8"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnyGen<String>>();
    }
}
