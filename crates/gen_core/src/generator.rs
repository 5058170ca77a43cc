//! The [`Generator`] trait and its combinator methods.

use std::hash::Hash;

use gen_prng::RandomSource;

use crate::any_gen::AnyGen;
use crate::config::{RetryPolicy, Weights};
use crate::either::Either;
use crate::gens::{
    self, always, Always, ArrayGen, BoundedCompact, BoundedFilter, Compact, DictionaryGen,
    EitherGen, ElementGen, Filter, FlatMap, Map, OptionalGen, Reduce, ReduceWith, ResultGen,
    SetGen, ShuffledGen, StringGen, Zip,
};

/// A recipe for producing random values of type [`Output`](Self::Output).
///
/// A generator is an immutable description: it holds no source and no
/// mutable state of its own, and every draw pulls words from the source it
/// is given. Running the same generator against two sources in the same
/// state yields the same value and leaves both sources in the same state.
///
/// Combinators consume `self` and return a new generator; the library
/// never mutates a generator after construction.
///
/// # Examples
///
/// ```rust
/// use gen_core::{int_in, letter, Generator, Xoshiro};
///
/// let tag = letter()
///     .string(int_in(3..=5))
///     .zip(int_in(0u16..=999))
///     .map(|(prefix, n)| format!("{prefix}-{n:03}"));
///
/// let mut rng = Xoshiro::from_seed_u64(7);
/// let value = tag.run_with(&mut rng);
/// assert!(value.contains('-'));
/// ```
pub trait Generator {
    /// The type of value produced by each draw.
    type Output;

    /// Draws one value using `rng`, advancing it.
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self::Output;

    /// Draws one value from the thread-local entropy-seeded source.
    ///
    /// Results are not reproducible; use [`run_with`](Self::run_with) with a
    /// seeded [`Xoshiro`](crate::Xoshiro) for determinism.
    fn run(&self) -> Self::Output {
        self.run_with(&mut rand::thread_rng())
    }

    /// Transforms each drawn value.
    #[inline]
    fn map<U, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, transform)
    }

    /// Draws a value, builds a second generator from it and draws from that.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_core::{always, int_in, Generator, Xoshiro};
    ///
    /// // a length first, then a vector of exactly that length
    /// let sized = int_in(1usize..=4).flat_map(|n| int_in(0u8..=9).array(always(n)));
    /// let v = sized.run_with(&mut Xoshiro::from_seed_u64(3));
    /// assert!((1..=4).contains(&v.len()));
    /// ```
    #[inline]
    fn flat_map<H, F>(self, transform: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        H: Generator,
        F: Fn(Self::Output) -> H,
    {
        FlatMap::new(self, transform)
    }

    /// Redraws until `predicate` accepts the value.
    ///
    /// Never returns if no value is ever accepted; see
    /// [`filter_bounded`](Self::filter_bounded) for a capped alternative.
    #[inline]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Redraws until `predicate` accepts the value or `policy` runs out.
    #[inline]
    fn filter_bounded<P>(self, predicate: P, policy: RetryPolicy) -> BoundedFilter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Output) -> bool,
    {
        BoundedFilter::new(self, predicate, policy)
    }

    /// Redraws until the value is `Some`, then unwraps it.
    #[inline]
    fn compact<T>(self) -> Compact<Self>
    where
        Self: Sized + Generator<Output = Option<T>>,
    {
        Compact::new(self)
    }

    /// Transforms each value into an `Option` and keeps the first `Some`.
    #[inline]
    fn compact_map<U, F>(self, transform: F) -> Compact<Map<Self, F>>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<U>,
    {
        Compact::new(Map::new(self, transform))
    }

    /// Redraws until the value is `Some` or `policy` runs out.
    #[inline]
    fn compact_bounded<T>(self, policy: RetryPolicy) -> BoundedCompact<Self>
    where
        Self: Sized + Generator<Output = Option<T>>,
    {
        BoundedCompact::new(self, policy)
    }

    /// Pairs each value with one drawn from `other`, drawing `self` first.
    #[inline]
    fn zip<G>(self, other: G) -> Zip<(Self, G)>
    where
        Self: Sized,
        G: Generator,
    {
        gens::zip(self, other)
    }

    /// Wraps values in `Some` three times out of four, otherwise `None`.
    fn optional(self) -> OptionalGen<Self, Always<usize>, Always<usize>>
    where
        Self: Sized,
    {
        self.optional_weighted(Weights::default())
    }

    /// Wraps values in `Some` or produces `None` with the given odds.
    ///
    /// `None` consumes no further words after the choice is made.
    fn optional_weighted<LC, RC>(self, weights: Weights<LC, RC>) -> OptionalGen<Self, LC, RC>
    where
        Self: Sized,
        LC: Generator<Output = usize>,
        RC: Generator<Output = usize>,
    {
        let to_option: fn(Either<Self::Output, ()>) -> Option<Self::Output> = Either::left;
        Map::new(EitherGen::new(self, always(()), weights), to_option)
    }

    /// Produces `Ok` three times out of four, otherwise `Err` drawn from
    /// `failure`.
    fn as_result<F>(self, failure: F) -> ResultGen<Self, F, Always<usize>, Always<usize>>
    where
        Self: Sized,
        F: Generator,
    {
        self.as_result_weighted(failure, Weights::default())
    }

    /// Produces `Ok` or `Err` drawn from `failure` with the given odds.
    fn as_result_weighted<F, LC, RC>(
        self,
        failure: F,
        weights: Weights<LC, RC>,
    ) -> ResultGen<Self, F, LC, RC>
    where
        Self: Sized,
        F: Generator,
        LC: Generator<Output = usize>,
        RC: Generator<Output = usize>,
    {
        let to_result: fn(Either<Self::Output, F::Output>) -> Result<Self::Output, F::Output> =
            Either::into_result;
        Map::new(EitherGen::new(self, failure, weights), to_result)
    }

    /// Draws a count, builds an accumulator with `init(count)`, then folds
    /// exactly `count` values into it with `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_core::{always, int_in, Generator, Xoshiro};
    ///
    /// let total = int_in(1u32..=6).reduce(always(3), |_| 0u32, |sum, roll| *sum += roll);
    /// let value = total.run_with(&mut Xoshiro::from_seed_u64(12));
    /// assert!((3..=18).contains(&value));
    /// ```
    #[inline]
    fn reduce<C, I, A, Acc>(self, count: C, init: I, combine: A) -> Reduce<Self, C, I, A>
    where
        Self: Sized,
        C: Generator<Output = usize>,
        I: Fn(usize) -> Acc,
        A: Fn(&mut Acc, Self::Output),
    {
        Reduce::new(self, count, init, combine)
    }

    /// Like [`reduce`](Self::reduce), but the starting accumulator is drawn
    /// from the generator `init(count)` after the count and before any
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_core::{always, int_in, Generator, Xoshiro};
    ///
    /// // three dice added to a random handicap in 10..=20
    /// let score = int_in(1u32..=6).reduce_with(
    ///     always(3),
    ///     |_| int_in(10u32..=20),
    ///     |sum: &mut u32, roll| *sum += roll,
    /// );
    /// let value = score.run_with(&mut Xoshiro::from_seed_u64(3));
    /// assert!((13..=38).contains(&value));
    /// ```
    #[inline]
    fn reduce_with<C, I, IG, A>(
        self,
        count: C,
        init: I,
        combine: A,
    ) -> ReduceWith<Self, C, I, A>
    where
        Self: Sized,
        C: Generator<Output = usize>,
        I: Fn(usize) -> IG,
        IG: Generator,
        A: Fn(&mut IG::Output, Self::Output),
    {
        ReduceWith::new(self, count, init, combine)
    }

    /// Collects `count` values into a `Vec`, in draw order.
    #[inline]
    fn array<C>(self, count: C) -> ArrayGen<Self, C>
    where
        Self: Sized,
        C: Generator<Output = usize>,
    {
        gens::array(self, count)
    }

    /// Collects `count` key-value pairs into a `HashMap`; later duplicate
    /// keys overwrite earlier ones, so the map may hold fewer than `count`
    /// entries.
    #[inline]
    fn dictionary<C, K, V>(self, count: C) -> DictionaryGen<Self, C, K, V>
    where
        Self: Sized + Generator<Output = (K, V)>,
        C: Generator<Output = usize>,
        K: Eq + Hash,
    {
        gens::dictionary(self, count)
    }

    /// Collects `count` values into a `HashSet`; duplicates collapse.
    #[inline]
    fn set<C>(self, count: C) -> SetGen<Self, C>
    where
        Self: Sized,
        Self::Output: Eq + Hash,
        C: Generator<Output = usize>,
    {
        gens::set(self, count)
    }

    /// Collects `count` characters into a `String`.
    #[inline]
    fn string<C>(self, count: C) -> StringGen<Self, C>
    where
        Self: Sized + Generator<Output = char>,
        C: Generator<Output = usize>,
    {
        gens::string(self, count)
    }

    /// Chooses a member of each drawn vector; `None` when it is empty.
    #[inline]
    fn element<T>(self) -> ElementGen<Self, T>
    where
        Self: Sized + Generator<Output = Vec<T>>,
        T: Clone,
    {
        gens::element(self)
    }

    /// Permutes each drawn vector.
    #[inline]
    fn shuffled<T>(self) -> ShuffledGen<Self, T>
    where
        Self: Sized + Generator<Output = Vec<T>>,
        T: Clone,
    {
        gens::shuffle(self)
    }

    /// Erases the concrete type, see [`AnyGen`].
    #[inline]
    fn boxed(self) -> AnyGen<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        AnyGen::new(self)
    }
}

impl<G: Generator + ?Sized> Generator for &G {
    type Output = G::Output;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> G::Output {
        (**self).run_with(rng)
    }
}
