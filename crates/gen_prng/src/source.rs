//! The random word source abstraction.
//!
//! A [`RandomSource`] is anything that can hand out a stream of uniformly
//! distributed 64-bit words. It is expressed as a marker over
//! [`rand_core::RngCore`] so that every generator in the `rand` ecosystem
//! (including `rand::thread_rng()` and test doubles) can drive a draw, and so
//! that the uniform sampling helpers of `rand` can be used on top of it.
//!
//! [`FnSource`] adapts a plain closure into a source, for scripted word
//! streams.

use std::fmt;

use rand_core::{impls, Error, RngCore};

/// A stateful stream of uniformly distributed 64-bit words.
///
/// Each word drawn both returns a value and advances internal state. Two
/// sources with identical internal state produce identical word sequences.
///
/// The trait is blanket-implemented for every [`RngCore`], including unsized
/// `dyn RngCore` trait objects and `&mut R` references.
///
/// # Examples
///
/// ```rust
/// use gen_prng::{RandomSource, Xoshiro};
///
/// fn first_word<R: RandomSource + ?Sized>(source: &mut R) -> u64 {
///     source.next_u64()
/// }
///
/// let mut a = Xoshiro::from_seed_u64(7);
/// let mut b = Xoshiro::from_seed_u64(7);
/// assert_eq!(first_word(&mut a), first_word(&mut b));
/// ```
pub trait RandomSource: RngCore {}

impl<R: RngCore + ?Sized> RandomSource for R {}

/// A word source backed by a closure returning the next 64-bit word.
///
/// Like [`Xoshiro`](crate::Xoshiro), `next_u32` takes the upper half of one
/// word and `fill_bytes` writes whole words little-endian.
///
/// # Examples
///
/// ```rust
/// use gen_prng::source::from_fn;
/// use rand_core::RngCore;
///
/// let mut word = 0u64;
/// let mut counting = from_fn(move || {
///     word += 1;
///     word
/// });
/// assert_eq!(counting.next_u64(), 1);
/// assert_eq!(counting.next_u64(), 2);
/// ```
#[derive(Clone)]
pub struct FnSource<F> {
    next: F,
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

/// Creates a source that draws each word by calling `next`.
#[inline]
pub fn from_fn<F: FnMut() -> u64>(next: F) -> FnSource<F> {
    FnSource { next }
}

impl<F: FnMut() -> u64> RngCore for FnSource<F> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (self.next)()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
