//! Two-way weighted choice and its `Option` / `Result` specialisations.

use gen_prng::RandomSource;
use rand::Rng;

use crate::config::Weights;
use crate::either::Either;
use crate::generator::Generator;
use crate::gens::{Always, Map};

/// Chooses between two generators with odds drawn from two count generators.
///
/// Every draw consumes, in order: the left count, the right count, a uniform
/// index in `[0, left + right)`, and then the words of the chosen side. An
/// index below the left count selects the left side.
///
/// # Panics
///
/// A draw panics if both counts come out as zero, or if their sum overflows
/// `usize`.
#[derive(Clone, Copy, Debug)]
pub struct EitherGen<A, B, LC, RC> {
    left: A,
    right: B,
    weights: Weights<LC, RC>,
}

impl<A, B, LC, RC> EitherGen<A, B, LC, RC> {
    pub(crate) fn new(left: A, right: B, weights: Weights<LC, RC>) -> Self {
        Self {
            left,
            right,
            weights,
        }
    }
}

impl<A, B, LC, RC> Generator for EitherGen<A, B, LC, RC>
where
    A: Generator,
    B: Generator,
    LC: Generator<Output = usize>,
    RC: Generator<Output = usize>,
{
    type Output = Either<A::Output, B::Output>;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Self::Output {
        let left_count = self.weights.left.run_with(rng);
        let right_count = self.weights.right.run_with(rng);
        let Some(total) = left_count.checked_add(right_count) else {
            panic!("weighted choice weights overflow usize");
        };
        assert!(total > 0, "weighted choice drew zero total weight");

        let index = rng.gen_range(0..total);
        if index < left_count {
            Either::Left(self.left.run_with(rng))
        } else {
            Either::Right(self.right.run_with(rng))
        }
    }
}

/// Generator returned by [`Generator::optional`].
pub type OptionalGen<G, LC, RC> = Map<
    EitherGen<G, Always<()>, LC, RC>,
    fn(Either<<G as Generator>::Output, ()>) -> Option<<G as Generator>::Output>,
>;

/// Generator returned by [`Generator::as_result`].
pub type ResultGen<G, F, LC, RC> = Map<
    EitherGen<G, F, LC, RC>,
    fn(
        Either<<G as Generator>::Output, <F as Generator>::Output>,
    ) -> Result<<G as Generator>::Output, <F as Generator>::Output>,
>;

/// Chooses between two generators with the default 3:1 odds.
///
/// # Examples
///
/// ```rust
/// use gen_core::{always, either, Either, Generator, Xoshiro};
///
/// let choice = either(always("heads"), always(0));
/// match choice.run_with(&mut Xoshiro::from_seed_u64(2)) {
///     Either::Left(text) => assert_eq!(text, "heads"),
///     Either::Right(number) => assert_eq!(number, 0),
/// }
/// ```
pub fn either<A: Generator, B: Generator>(
    left: A,
    right: B,
) -> EitherGen<A, B, Always<usize>, Always<usize>> {
    EitherGen::new(left, right, Weights::default())
}

/// Chooses between two generators with explicit count distributions.
pub fn either_weighted<A, B, LC, RC>(
    left: A,
    right: B,
    weights: Weights<LC, RC>,
) -> EitherGen<A, B, LC, RC>
where
    A: Generator,
    B: Generator,
    LC: Generator<Output = usize>,
    RC: Generator<Output = usize>,
{
    EitherGen::new(left, right, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{always, int_in, Xoshiro};

    #[test]
    fn test_fixed_one_sided_weights() {
        let only_left = either_weighted(always('l'), always('r'), Weights::fixed(1, 0));
        let only_right = either_weighted(always('l'), always('r'), Weights::fixed(0, 1));
        let mut rng = Xoshiro::from_seed_u64(10);
        for _ in 0..100 {
            assert_eq!(only_left.run_with(&mut rng), Either::Left('l'));
            assert_eq!(only_right.run_with(&mut rng), Either::Right('r'));
        }
    }

    #[test]
    #[should_panic(expected = "zero total weight")]
    fn test_zero_total_weight_panics() {
        let never = either_weighted(always(1), always(2), Weights::fixed(0, 0));
        never.run_with(&mut Xoshiro::from_seed_u64(0));
    }

    #[test]
    #[should_panic(expected = "overflow usize")]
    fn test_overflowing_weights_panic() {
        let saturated = either_weighted(always('l'), always('r'), Weights::fixed(usize::MAX, 1));
        saturated.run_with(&mut Xoshiro::from_seed_u64(0));
    }

    #[test]
    fn test_largest_total_weight_still_draws() {
        let edge = either_weighted(always('l'), always('r'), Weights::fixed(usize::MAX - 1, 1));
        let mut rng = Xoshiro::from_seed_u64(3);
        let lefts = (0..1_000)
            .filter(|_| edge.run_with(&mut rng).is_left())
            .count();
        assert!(lefts > 990, "lefts = {}", lefts);
    }

    #[test]
    fn test_fixed_choice_is_copy() {
        let choice = either(always(1u8), always(2u8));
        let copied = choice;
        let mut a = Xoshiro::from_seed_u64(4);
        let mut b = Xoshiro::from_seed_u64(4);
        assert_eq!(choice.run_with(&mut a), copied.run_with(&mut b));
    }

    #[test]
    fn test_weights_redrawn_every_draw() {
        // left weight alternates between 0 and a large number
        let left = int_in(0usize..=1).map(|bit| bit * 1_000_000);
        let choice = either_weighted(always('l'), always('r'), Weights::new(left, always(1)));
        let mut rng = Xoshiro::from_seed_u64(12);
        let lefts = (0..2_000)
            .filter(|_| choice.run_with(&mut rng).is_left())
            .count();
        assert!(lefts > 800 && lefts < 1_200, "lefts = {}", lefts);
    }

    #[test]
    fn test_default_odds_near_three_to_one() {
        let choice = either(always(()), always(()));
        let mut rng = Xoshiro::from_seed_u64(13);
        let lefts = (0..40_000)
            .filter(|_| choice.run_with(&mut rng).is_left())
            .count();
        let share = lefts as f64 / 40_000.0;
        approx::assert_abs_diff_eq!(share, 0.75, epsilon = 0.02);
    }
}
