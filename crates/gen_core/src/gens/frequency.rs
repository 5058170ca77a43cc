//! Weighted frequency choice.

use gen_prng::RandomSource;
use rand::Rng;

use crate::error::GenError;
use crate::generator::Generator;

/// Chooses one of several generators with probability proportional to its
/// weight, then draws from it.
///
/// Conceptually the table is a pool holding `weight` copies of each
/// generator, from which one is picked uniformly: a draw takes a uniform
/// index in `[0, total_weight)` and runs the generator whose cumulative
/// weight range contains it. Entries with weight zero are kept but can never
/// be chosen.
///
/// # Examples
///
/// ```rust
/// use gen_core::{lowercase_letter, number, uppercase_letter, Frequency, Generator, Xoshiro};
///
/// let password_char = Frequency::new([
///     (12, lowercase_letter()),
///     (1, uppercase_letter()),
///     (1, number()),
/// ])
/// .expect("non-empty table");
///
/// let c = password_char.run_with(&mut Xoshiro::from_seed_u64(3));
/// assert!(c.is_ascii_alphanumeric());
/// ```
#[derive(Clone, Debug)]
pub struct Frequency<G> {
    /// Generators paired with the exclusive end of their cumulative range.
    entries: Vec<(usize, G)>,
    total_weight: usize,
}

impl<G: Generator> Frequency<G> {
    /// Builds a frequency table from `(weight, generator)` pairs.
    ///
    /// # Errors
    ///
    /// - [`GenError::EmptyFrequencyTable`] if `entries` is empty
    /// - [`GenError::ZeroTotalWeight`] if every weight is zero
    /// - [`GenError::WeightOverflow`] if the weights overflow when summed
    pub fn new(entries: impl IntoIterator<Item = (usize, G)>) -> Result<Self, GenError> {
        let mut total_weight = 0usize;
        let mut cumulative = Vec::new();
        for (weight, generator) in entries {
            total_weight = total_weight
                .checked_add(weight)
                .ok_or(GenError::WeightOverflow)?;
            cumulative.push((total_weight, generator));
        }

        if cumulative.is_empty() {
            tracing::warn!("rejected empty frequency table");
            return Err(GenError::EmptyFrequencyTable);
        }
        if total_weight == 0 {
            tracing::warn!(entries = cumulative.len(), "rejected zero-weight frequency table");
            return Err(GenError::ZeroTotalWeight);
        }

        tracing::debug!(
            entries = cumulative.len(),
            total_weight,
            "built frequency table"
        );
        Ok(Self {
            entries: cumulative,
            total_weight,
        })
    }

    /// Returns the sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }

    /// Returns the number of entries, including zero-weight ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty tables are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`Frequency`] table; shorthand for [`Frequency::new`].
///
/// # Errors
///
/// See [`Frequency::new`].
pub fn frequency<G: Generator>(
    entries: impl IntoIterator<Item = (usize, G)>,
) -> Result<Frequency<G>, GenError> {
    Frequency::new(entries)
}

impl<G: Generator> Generator for Frequency<G> {
    type Output = G::Output;

    fn run_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> G::Output {
        let index = rng.gen_range(0..self.total_weight);
        let slot = self.entries.partition_point(|(end, _)| *end <= index);
        self.entries[slot].1.run_with(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{always, Xoshiro};

    #[test]
    fn test_rejects_empty_table() {
        let entries: Vec<(usize, crate::Always<u8>)> = Vec::new();
        assert_eq!(
            Frequency::new(entries).unwrap_err(),
            GenError::EmptyFrequencyTable
        );
    }

    #[test]
    fn test_rejects_zero_total_weight() {
        let err = frequency([(0, always('a')), (0, always('b'))]).unwrap_err();
        assert_eq!(err, GenError::ZeroTotalWeight);
    }

    #[test]
    fn test_rejects_overflowing_weights() {
        let err = frequency([(usize::MAX, always(1)), (1, always(2))]).unwrap_err();
        assert_eq!(err, GenError::WeightOverflow);
    }

    #[test]
    fn test_zero_weight_entries_never_chosen() {
        let table = frequency([(0, always('x')), (5, always('y')), (0, always('z'))]).unwrap();
        assert_eq!(table.total_weight(), 5);
        assert_eq!(table.len(), 3);

        let mut rng = Xoshiro::from_seed_u64(21);
        for _ in 0..500 {
            assert_eq!(table.run_with(&mut rng), 'y');
        }
    }

    #[test]
    fn test_every_positive_entry_reachable() {
        let table = frequency([(1, always(0)), (1, always(1)), (1, always(2))]).unwrap();
        let mut seen = [false; 3];
        let mut rng = Xoshiro::from_seed_u64(6);
        for _ in 0..300 {
            seen[table.run_with(&mut rng)] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
