//! Choosing from and permuting collections.

use gen_prng::RandomSource;
use rand::seq::SliceRandom;

use crate::generator::Generator;
use crate::gens::FlatMap;

/// Uniformly chosen member of a fixed collection.
///
/// Produces `None` for an empty collection without touching the source.
/// Pair with [`Generator::compact`] to unwrap, bearing in mind that a
/// compacted empty collection never produces a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementOf<T> {
    items: Vec<T>,
}

impl<T> ElementOf<T> {
    /// Returns the candidate values.
    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Generator for ElementOf<T> {
    type Output = Option<T>;

    #[inline]
    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<T> {
        self.items.choose(rng).cloned()
    }
}

/// Chooses a member of `items` uniformly at random.
///
/// # Examples
///
/// ```rust
/// use gen_core::{element_of, Generator, Xoshiro};
///
/// let suit = element_of(["clubs", "diamonds", "hearts", "spades"]);
/// let mut rng = Xoshiro::from_seed_u64(5);
/// assert!(suit.run_with(&mut rng).is_some());
///
/// let nothing = element_of(Vec::<u8>::new());
/// assert_eq!(nothing.run_with(&mut rng), None);
/// ```
pub fn element_of<T: Clone>(items: impl IntoIterator<Item = T>) -> ElementOf<T> {
    ElementOf {
        items: items.into_iter().collect(),
    }
}

/// Uniformly random permutation of a fixed collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shuffled<T> {
    items: Vec<T>,
}

impl<T: Clone> Generator for Shuffled<T> {
    type Output = Vec<T>;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<T> {
        let mut items = self.items.clone();
        items.shuffle(rng);
        items
    }
}

/// Permutes `items` uniformly at random on every draw.
pub fn shuffled<T: Clone>(items: impl IntoIterator<Item = T>) -> Shuffled<T> {
    Shuffled {
        items: items.into_iter().collect(),
    }
}

/// Generator returned by [`Generator::element`].
pub type ElementGen<G, T> = FlatMap<G, fn(Vec<T>) -> ElementOf<T>>;

/// Generator returned by [`Generator::shuffled`].
pub type ShuffledGen<G, T> = FlatMap<G, fn(Vec<T>) -> Shuffled<T>>;

pub(crate) fn element<G, T>(upstream: G) -> ElementGen<G, T>
where
    G: Generator<Output = Vec<T>>,
    T: Clone,
{
    let choose: fn(Vec<T>) -> ElementOf<T> = |items| ElementOf { items };
    FlatMap::new(upstream, choose)
}

pub(crate) fn shuffle<G, T>(upstream: G) -> ShuffledGen<G, T>
where
    G: Generator<Output = Vec<T>>,
    T: Clone,
{
    let permute: fn(Vec<T>) -> Shuffled<T> = |items| Shuffled { items };
    FlatMap::new(upstream, permute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{always, int_in, Xoshiro};

    #[test]
    fn test_empty_collection_consumes_nothing() {
        let mut rng = Xoshiro::from_seed_u64(1);
        let before = rng.current_state();
        assert_eq!(element_of(Vec::<char>::new()).run_with(&mut rng), None);
        assert_eq!(rng.current_state(), before);
    }

    #[test]
    fn test_singleton_always_chosen() {
        let mut rng = Xoshiro::from_seed_u64(1);
        for _ in 0..20 {
            assert_eq!(element_of(['z']).run_with(&mut rng), Some('z'));
        }
    }

    #[test]
    fn test_element_of_generated_vectors() {
        let pick = int_in(0u8..=50).array(int_in(1usize..=10)).element();
        let mut rng = Xoshiro::from_seed_u64(2);
        for _ in 0..100 {
            let value = pick.run_with(&mut rng);
            assert!(matches!(value, Some(x) if x <= 50));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let deck: Vec<u32> = (0..52).collect();
        let mut rng = Xoshiro::from_seed_u64(3);
        let mut shuffled_deck = shuffled(deck.clone()).run_with(&mut rng);
        assert_eq!(shuffled_deck.len(), 52);
        shuffled_deck.sort_unstable();
        assert_eq!(shuffled_deck, deck);
    }

    #[test]
    fn test_shuffled_combinator() {
        let words = always(vec!["a", "b", "c"]).shuffled();
        let mut out = words.run_with(&mut Xoshiro::from_seed_u64(4));
        out.sort_unstable();
        assert_eq!(out, ["a", "b", "c"]);
    }
}
