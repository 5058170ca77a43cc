//! Retry-until-success combinators: `filter`, `compact` and their bounded
//! variants.
//!
//! # Non-termination
//!
//! [`Filter`] and [`Compact`] redraw until they see an acceptable value and
//! have no attempt cap. When acceptance is structurally impossible (a
//! predicate no upstream value satisfies, or choosing from an empty
//! collection) a draw never returns. [`BoundedFilter`] and
//! [`BoundedCompact`] are the opt-in alternative that gives up after a
//! [`RetryPolicy`] worth of attempts.

use gen_prng::RandomSource;

use crate::config::RetryPolicy;
use crate::error::GenError;
use crate::generator::Generator;

/// Generator returned by [`Generator::filter`].
#[derive(Clone, Copy)]
pub struct Filter<G, P> {
    upstream: G,
    predicate: P,
}

impl<G, P> Filter<G, P> {
    pub(crate) fn new(upstream: G, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<G, P> Generator for Filter<G, P>
where
    G: Generator,
    P: Fn(&G::Output) -> bool,
{
    type Output = G::Output;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> G::Output {
        loop {
            let value = self.upstream.run_with(rng);
            if (self.predicate)(&value) {
                return value;
            }
        }
    }
}

/// Generator returned by [`Generator::compact`]: unwraps the first `Some`.
#[derive(Clone, Copy, Debug)]
pub struct Compact<G> {
    upstream: G,
}

impl<G> Compact<G> {
    pub(crate) fn new(upstream: G) -> Self {
        Self { upstream }
    }
}

impl<G, T> Generator for Compact<G>
where
    G: Generator<Output = Option<T>>,
{
    type Output = T;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> T {
        loop {
            if let Some(value) = self.upstream.run_with(rng) {
                return value;
            }
        }
    }
}

/// Generator returned by [`Generator::filter_bounded`].
#[derive(Clone, Copy)]
pub struct BoundedFilter<G, P> {
    upstream: G,
    predicate: P,
    policy: RetryPolicy,
}

impl<G, P> BoundedFilter<G, P> {
    pub(crate) fn new(upstream: G, predicate: P, policy: RetryPolicy) -> Self {
        Self {
            upstream,
            predicate,
            policy,
        }
    }
}

impl<G, P> Generator for BoundedFilter<G, P>
where
    G: Generator,
    P: Fn(&G::Output) -> bool,
{
    type Output = Result<G::Output, GenError>;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self::Output {
        let attempts = self.policy.max_attempts();
        for _ in 0..attempts {
            let value = self.upstream.run_with(rng);
            if (self.predicate)(&value) {
                return Ok(value);
            }
        }
        tracing::debug!(attempts, "bounded filter exhausted");
        Err(GenError::RetriesExhausted { attempts })
    }
}

/// Generator returned by [`Generator::compact_bounded`].
#[derive(Clone, Copy, Debug)]
pub struct BoundedCompact<G> {
    upstream: G,
    policy: RetryPolicy,
}

impl<G> BoundedCompact<G> {
    pub(crate) fn new(upstream: G, policy: RetryPolicy) -> Self {
        Self { upstream, policy }
    }
}

impl<G, T> Generator for BoundedCompact<G>
where
    G: Generator<Output = Option<T>>,
{
    type Output = Result<T, GenError>;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self::Output {
        let attempts = self.policy.max_attempts();
        for _ in 0..attempts {
            if let Some(value) = self.upstream.run_with(rng) {
                return Ok(value);
            }
        }
        tracing::debug!(attempts, "bounded compact exhausted");
        Err(GenError::RetriesExhausted { attempts })
    }
}
