//! Tuple generators.
//!
//! [`Zip`] wraps a tuple of 2 to 10 generators and draws each component
//! strictly left to right from one shared source. The draw order is part of
//! the contract: swapping two components changes which words each consumes.

use gen_prng::RandomSource;

use crate::generator::Generator;

/// Generator of tuples, one component per wrapped generator.
#[derive(Clone, Copy, Debug)]
pub struct Zip<T>(T);

/// Combines two generators into a generator of pairs.
///
/// # Examples
///
/// ```rust
/// use gen_core::{bool, int_in, zip, Generator, Xoshiro};
///
/// let pair = zip(int_in(1u8..=6), bool());
/// let (die, coin) = pair.run_with(&mut Xoshiro::from_seed_u64(4));
/// assert!((1..=6).contains(&die));
/// let _: bool = coin;
/// ```
#[inline]
pub fn zip<A: Generator, B: Generator>(a: A, b: B) -> Zip<(A, B)> {
    Zip((a, b))
}

/// Combines a tuple of 2 to 10 generators into a generator of tuples.
///
/// # Examples
///
/// ```rust
/// use gen_core::{always, int_in, letter, zip_all, Generator, Xoshiro};
///
/// let record = zip_all((always("id"), int_in(0u16..=999), letter()));
/// let (tag, number, initial) = record.run_with(&mut Xoshiro::from_seed_u64(9));
/// assert_eq!(tag, "id");
/// assert!(number <= 999);
/// assert!(initial.is_ascii_alphabetic());
/// ```
#[inline]
pub fn zip_all<T>(generators: T) -> Zip<T>
where
    Zip<T>: Generator,
{
    Zip(generators)
}

macro_rules! impl_zip {
    ($($gen:ident),+) => {
        impl<$($gen: Generator),+> Generator for Zip<($($gen,)+)> {
            type Output = ($($gen::Output,)+);

            #[allow(non_snake_case)]
            #[inline]
            fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self::Output {
                let ($($gen,)+) = &self.0;
                // tuple expressions evaluate left to right
                ($($gen.run_with(rng),)+)
            }
        }
    };
}

impl_zip!(A, B);
impl_zip!(A, B, C);
impl_zip!(A, B, C, D);
impl_zip!(A, B, C, D, E);
impl_zip!(A, B, C, D, E, F);
impl_zip!(A, B, C, D, E, F, G);
impl_zip!(A, B, C, D, E, F, G, H);
impl_zip!(A, B, C, D, E, F, G, H, I);
impl_zip!(A, B, C, D, E, F, G, H, I, J);
