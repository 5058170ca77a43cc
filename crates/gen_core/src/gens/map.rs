//! Value and generator transforms: `map` and `flat_map`.

use gen_prng::RandomSource;

use crate::generator::Generator;

/// Generator returned by [`Generator::map`].
#[derive(Clone, Copy)]
pub struct Map<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> Map<G, F> {
    pub(crate) fn new(upstream: G, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> U,
{
    type Output = U;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> U {
        (self.transform)(self.upstream.run_with(rng))
    }
}

/// Generator returned by [`Generator::flat_map`].
///
/// The upstream value is drawn first; the generator built from it is then
/// drawn from the same, now-advanced source.
#[derive(Clone, Copy)]
pub struct FlatMap<G, F> {
    upstream: G,
    transform: F,
}

impl<G, F> FlatMap<G, F> {
    pub(crate) fn new(upstream: G, transform: F) -> Self {
        Self {
            upstream,
            transform,
        }
    }
}

impl<G, F, H> Generator for FlatMap<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> H,
    H: Generator,
{
    type Output = H::Output;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> H::Output {
        let outer = self.upstream.run_with(rng);
        (self.transform)(outer).run_with(rng)
    }
}
