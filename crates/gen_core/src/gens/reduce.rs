//! Count-driven collection builders.
//!
//! [`Reduce`] is the general fold: draw a count, build an accumulator sized
//! for it, then draw and fold exactly that many upstream values in draw
//! order. `array`, `dictionary`, `set` and `string` are fixed instances of it.
//! [`ReduceWith`] is the same fold with a randomly drawn starting value.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use gen_prng::RandomSource;

use crate::generator::Generator;

/// Generator returned by [`Generator::reduce`].
#[derive(Clone, Copy)]
pub struct Reduce<G, C, I, A> {
    upstream: G,
    count: C,
    init: I,
    combine: A,
}

impl<G, C, I, A> Reduce<G, C, I, A> {
    pub(crate) fn new(upstream: G, count: C, init: I, combine: A) -> Self {
        Self {
            upstream,
            count,
            init,
            combine,
        }
    }
}

impl<G, C, I, A, Acc> Generator for Reduce<G, C, I, A>
where
    G: Generator,
    C: Generator<Output = usize>,
    I: Fn(usize) -> Acc,
    A: Fn(&mut Acc, G::Output),
{
    type Output = Acc;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Acc {
        let count = self.count.run_with(rng);
        let mut acc = (self.init)(count);
        for _ in 0..count {
            (self.combine)(&mut acc, self.upstream.run_with(rng));
        }
        acc
    }
}

/// Generator returned by [`Generator::reduce_with`].
///
/// Each draw consumes, in order: the count, the words of the initial value
/// generator built from that count, then exactly `count` upstream draws.
#[derive(Clone, Copy)]
pub struct ReduceWith<G, C, I, A> {
    upstream: G,
    count: C,
    init: I,
    combine: A,
}

impl<G, C, I, A> ReduceWith<G, C, I, A> {
    pub(crate) fn new(upstream: G, count: C, init: I, combine: A) -> Self {
        Self {
            upstream,
            count,
            init,
            combine,
        }
    }
}

impl<G, C, I, IG, A> Generator for ReduceWith<G, C, I, A>
where
    G: Generator,
    C: Generator<Output = usize>,
    I: Fn(usize) -> IG,
    IG: Generator,
    A: Fn(&mut IG::Output, G::Output),
{
    type Output = IG::Output;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> IG::Output {
        let count = self.count.run_with(rng);
        let mut acc = (self.init)(count).run_with(rng);
        for _ in 0..count {
            (self.combine)(&mut acc, self.upstream.run_with(rng));
        }
        acc
    }
}

/// Generator returned by [`Generator::array`].
pub type ArrayGen<G, C> = Reduce<
    G,
    C,
    fn(usize) -> Vec<<G as Generator>::Output>,
    fn(&mut Vec<<G as Generator>::Output>, <G as Generator>::Output),
>;

/// Generator returned by [`Generator::dictionary`].
pub type DictionaryGen<G, C, K, V> =
    Reduce<G, C, fn(usize) -> HashMap<K, V>, fn(&mut HashMap<K, V>, (K, V))>;

/// Generator returned by [`Generator::set`].
pub type SetGen<G, C> = Reduce<
    G,
    C,
    fn(usize) -> HashSet<<G as Generator>::Output>,
    fn(&mut HashSet<<G as Generator>::Output>, <G as Generator>::Output),
>;

/// Generator returned by [`Generator::string`].
pub type StringGen<G, C> = Reduce<G, C, fn(usize) -> String, fn(&mut String, char)>;

pub(crate) fn array<G: Generator, C>(upstream: G, count: C) -> ArrayGen<G, C> {
    let init: fn(usize) -> Vec<G::Output> = Vec::with_capacity;
    let push: fn(&mut Vec<G::Output>, G::Output) = Vec::push;
    Reduce::new(upstream, count, init, push)
}

pub(crate) fn dictionary<G, C, K, V>(upstream: G, count: C) -> DictionaryGen<G, C, K, V>
where
    G: Generator<Output = (K, V)>,
    K: Eq + Hash,
{
    let init: fn(usize) -> HashMap<K, V> = HashMap::with_capacity;
    let insert: fn(&mut HashMap<K, V>, (K, V)) = |map, (key, value)| {
        map.insert(key, value);
    };
    Reduce::new(upstream, count, init, insert)
}

pub(crate) fn set<G, C>(upstream: G, count: C) -> SetGen<G, C>
where
    G: Generator,
    G::Output: Eq + Hash,
{
    let init: fn(usize) -> HashSet<G::Output> = HashSet::with_capacity;
    let insert: fn(&mut HashSet<G::Output>, G::Output) = |set, item| {
        set.insert(item);
    };
    Reduce::new(upstream, count, init, insert)
}

pub(crate) fn string<G, C>(upstream: G, count: C) -> StringGen<G, C>
where
    G: Generator<Output = char>,
{
    let init: fn(usize) -> String = String::with_capacity;
    let push: fn(&mut String, char) = String::push;
    Reduce::new(upstream, count, init, push)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use rand::rngs::mock::StepRng;
    use rand::RngCore;

    use crate::{always, always_with, int_in, AnyGen, Generator, Xoshiro};

    fn word() -> AnyGen<u64> {
        AnyGen::from_fn(|rng| rng.next_u64())
    }

    #[test]
    fn test_count_drawn_before_elements() {
        let log = RefCell::new(Vec::new());
        let count = always_with(|| {
            log.borrow_mut().push("count");
            2usize
        });
        let element = always_with(|| log.borrow_mut().push("element"));
        let init = |n: usize| {
            log.borrow_mut().push("init");
            Vec::with_capacity(n)
        };
        let collected = element
            .reduce(count, init, |acc: &mut Vec<()>, item| acc.push(item))
            .run_with(&mut Xoshiro::from_seed_u64(0));

        assert_eq!(collected.len(), 2);
        assert_eq!(*log.borrow(), ["count", "init", "element", "element"]);
    }

    #[test]
    fn test_reduce_folds_in_draw_order() {
        let next = Cell::new(0u32);
        let ascending = always_with(|| {
            next.set(next.get() + 1);
            next.get()
        });
        let joined = ascending.reduce(
            always(5),
            |_| String::new(),
            |acc, digit| acc.push_str(&digit.to_string()),
        );
        assert_eq!(joined.run_with(&mut Xoshiro::from_seed_u64(0)), "12345");
    }

    #[test]
    fn test_reduce_with_draws_count_then_init_then_elements() {
        // words are 2, 3, 4, ...: count 2, seed 3, elements 4 and 5
        let mut source = StepRng::new(2, 1);
        let folded = word()
            .reduce_with(
                word().map(|w| w as usize),
                |n| word().map(move |seed| vec![(n as u64, seed)]),
                |acc: &mut Vec<(u64, u64)>, item| acc.push((0, item)),
            )
            .run_with(&mut source);

        assert_eq!(folded, vec![(2, 3), (0, 4), (0, 5)]);
        assert_eq!(source.next_u64(), 6);
    }

    #[test]
    fn test_reduce_with_zero_count_still_draws_init() {
        let mut source = StepRng::new(0, 1);
        let total = word()
            .reduce_with(always(0), |_| word(), |sum: &mut u64, w| *sum += w)
            .run_with(&mut source);
        assert_eq!(total, 0);
        assert_eq!(source.next_u64(), 1);
    }

    #[test]
    fn test_reduce_with_random_start_sum() {
        let dice = int_in(1u32..=6).reduce_with(
            always(3),
            |_| int_in(100u32..=200),
            |sum: &mut u32, roll| *sum += roll,
        );
        let mut rng = Xoshiro::from_seed_u64(17);
        for _ in 0..200 {
            let value = dice.run_with(&mut rng);
            assert!((103..=218).contains(&value), "value = {}", value);
        }
    }

    #[test]
    fn test_dictionary_last_write_wins() {
        let keys = RefCell::new(vec![('a', 1), ('b', 2), ('a', 3)].into_iter());
        let pairs = always_with(|| keys.borrow_mut().next().unwrap_or(('z', 0)));
        let map = pairs.dictionary(always(3)).run_with(&mut Xoshiro::from_seed_u64(0));
        assert_eq!(map.len(), 2);
        assert_eq!(map[&'a'], 3);
        assert_eq!(map[&'b'], 2);
    }

    #[test]
    fn test_set_dedupes() {
        let set = int_in(0u8..=3)
            .set(always(200))
            .run_with(&mut Xoshiro::from_seed_u64(4));
        assert!(set.len() <= 4);
        assert!(set.iter().all(|&x| x <= 3));
    }

    #[test]
    fn test_string_length() {
        let s = crate::letter()
            .string(always(12))
            .run_with(&mut Xoshiro::from_seed_u64(5));
        assert_eq!(s.chars().count(), 12);
    }
}
