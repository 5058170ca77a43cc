//! Fixed-sequence traversal.

use gen_prng::RandomSource;

use crate::generator::Generator;

/// Draws each generator of a fixed, ordered collection in turn and
/// transforms each value, producing a vector of the same length.
///
/// Unlike the count-driven builders, the number of draws is known when the
/// generator is built.
#[derive(Clone, Debug)]
pub struct Traverse<G, F> {
    generators: Vec<G>,
    transform: F,
}

impl<G, F> Traverse<G, F> {
    /// Returns the number of values each draw produces.
    #[inline]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns `true` when there are no generators to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl<G, F, U> Generator for Traverse<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> U,
{
    type Output = Vec<U>;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<U> {
        let mut values = Vec::with_capacity(self.generators.len());
        for generator in &self.generators {
            values.push((self.transform)(generator.run_with(rng)));
        }
        values
    }
}

/// Generator returned by [`sequence`].
pub type Sequence<G> = Traverse<G, fn(<G as Generator>::Output) -> <G as Generator>::Output>;

/// Transforms each value of a fixed collection of generators.
///
/// # Examples
///
/// ```rust
/// use gen_core::{int_in, traverse, Generator, Xoshiro};
///
/// let dice = traverse(vec![int_in(1u8..=4), int_in(1u8..=6), int_in(1u8..=20)], u32::from);
/// let rolls = dice.run_with(&mut Xoshiro::from_seed_u64(0));
/// assert_eq!(rolls.len(), 3);
/// assert!(rolls[2] <= 20);
/// ```
pub fn traverse<G, F, U>(generators: impl IntoIterator<Item = G>, transform: F) -> Traverse<G, F>
where
    G: Generator,
    F: Fn(G::Output) -> U,
{
    Traverse {
        generators: generators.into_iter().collect(),
        transform,
    }
}

/// Turns a fixed collection of generators into a generator of vectors.
pub fn sequence<G: Generator>(generators: impl IntoIterator<Item = G>) -> Sequence<G> {
    let identity: fn(G::Output) -> G::Output = |value| value;
    traverse(generators, identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{always, int_in, Xoshiro};

    #[test]
    fn test_sequence_preserves_order() {
        let seq = sequence((0..10).map(always));
        assert_eq!(seq.len(), 10);
        assert_eq!(
            seq.run_with(&mut Xoshiro::from_seed_u64(0)),
            (0..10).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_traverse_matches_sequential_draws() {
        let gens = vec![int_in(0u32..=9), int_in(100u32..=199), int_in(1000u32..=1999)];
        let traversed = traverse(gens.clone(), |x| x * 2);

        let mut rng1 = Xoshiro::from_seed_u64(31);
        let mut rng2 = Xoshiro::from_seed_u64(31);
        let values = traversed.run_with(&mut rng1);
        let expected: Vec<u32> = gens.iter().map(|g| g.run_with(&mut rng2) * 2).collect();
        assert_eq!(values, expected);
        assert_eq!(rng1.current_state(), rng2.current_state());
    }

    #[test]
    fn test_empty_traverse() {
        let empty = sequence(Vec::<crate::Always<u8>>::new());
        assert!(empty.is_empty());
        assert!(empty.run_with(&mut Xoshiro::from_seed_u64(0)).is_empty());
    }
}
