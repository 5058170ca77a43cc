//! # Xoshiro256** Pseudo-Random Word Source
//!
//! A bit-exact implementation of xoshiro256** (<http://xoshiro.di.unimi.it>)
//! with the seeding strategies used by the generator layer.
//!
//! ## Seeding
//!
//! | Constructor                    | Determinism | Warm-up draws |
//! |--------------------------------|-------------|---------------|
//! | [`Xoshiro::from_entropy`]      | none        | none          |
//! | [`Xoshiro::from_seed_u64`]     | full        | 10            |
//! | [`Xoshiro::from_byte_seed`]    | full        | 10            |
//! | [`Xoshiro::from_text_seed`]    | full        | 10            |
//! | [`Xoshiro::from_state`]        | full        | none          |
//!
//! ## Output Ordering
//!
//! Each draw returns the output of the *current* state and only then
//! perturbs it, so the first word after [`Xoshiro::from_state`] is
//! `state.output()`.

mod state;

pub use state::{State, STATE_WORDS};

use rand_core::{impls, Error, RngCore, SeedableRng};

/// Number of outputs discarded after deterministic seeding.
pub const WARMUP_DRAWS: usize = 10;

/// Deterministic xoshiro256** word source.
///
/// # Examples
///
/// ```rust
/// use gen_prng::{State, Xoshiro};
///
/// let mut rng = Xoshiro::from_state(State::new(420, 42, 666, 69));
/// assert_eq!(rng.next_u64(), 241_920);
/// assert_eq!(rng.next_u64(), 4_538_880);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Xoshiro {
    state: State,
}

impl Xoshiro {
    /// Creates a source seeded with operating-system entropy.
    ///
    /// There is no determinism guarantee; use [`Xoshiro::current_state`] to
    /// capture the starting point when a run must be reproduced later.
    pub fn from_entropy() -> Self {
        let words: [u64; STATE_WORDS] = rand::random();
        Self::from_state(State::from_words(words))
    }

    /// Creates a source from a single 64-bit seed.
    ///
    /// The seed is expanded with [`State::from_seed_word`] and the first
    /// [`WARMUP_DRAWS`] outputs are discarded before any caller-visible draw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_prng::Xoshiro;
    ///
    /// let mut rng1 = Xoshiro::from_seed_u64(12345);
    /// let mut rng2 = Xoshiro::from_seed_u64(12345);
    /// assert_eq!(rng1.next_u64(), rng2.next_u64());
    /// ```
    pub fn from_seed_u64(seed: u64) -> Self {
        tracing::debug!(seed, warmup = WARMUP_DRAWS, "seeding xoshiro from u64");
        let mut rng = Self::from_state(State::from_seed_word(seed));
        rng.warm_up();
        rng
    }

    /// Creates a source from arbitrary bytes.
    ///
    /// Starting from the zero-seed expansion, the bytes are XORed over the
    /// 32-byte little-endian state image in consecutive 32-byte chunks: a
    /// shorter input touches only its own prefix, a longer one wraps around
    /// and keeps folding. The first [`WARMUP_DRAWS`] outputs are then
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_prng::Xoshiro;
    ///
    /// // An empty byte seed is the zero seed.
    /// assert_eq!(
    ///     Xoshiro::from_byte_seed(b"").current_state(),
    ///     Xoshiro::from_seed_u64(0).current_state(),
    /// );
    /// ```
    pub fn from_byte_seed(bytes: impl AsRef<[u8]>) -> Self {
        let bytes = bytes.as_ref();
        let mut image = State::from_seed_word(0).to_le_bytes();
        for chunk in bytes.chunks(image.len()) {
            for (slot, byte) in image.iter_mut().zip(chunk) {
                *slot ^= byte;
            }
        }
        tracing::debug!(
            len = bytes.len(),
            warmup = WARMUP_DRAWS,
            "seeding xoshiro from bytes"
        );
        let mut rng = Self::from_state(State::from_le_bytes(image));
        rng.warm_up();
        rng
    }

    /// Creates a source from the UTF-8 encoding of `text`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gen_prng::{State, Xoshiro};
    ///
    /// assert_eq!(
    ///     Xoshiro::from_text_seed("I'm a banana").current_state(),
    ///     State::new(
    ///         9542286689319902788,
    ///         3549908756124177723,
    ///         10479026666103333678,
    ///         16625540540809026459,
    ///     ),
    /// );
    /// ```
    pub fn from_text_seed(text: &str) -> Self {
        Self::from_byte_seed(text.as_bytes())
    }

    /// Creates a source with exactly the given state.
    ///
    /// Useful for resuming a prior run or reproducing its next outputs.
    #[inline]
    pub const fn from_state(state: State) -> Self {
        Self { state }
    }

    /// Returns the current four-word state.
    #[inline]
    pub const fn current_state(&self) -> State {
        self.state
    }

    /// Returns the next word and advances the state.
    ///
    /// The returned word reflects the state *before* the perturbation.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let output = self.state.output();
        self.state.perturb();
        output
    }

    fn warm_up(&mut self) {
        for _ in 0..WARMUP_DRAWS {
            self.next_u64();
        }
    }
}

impl Default for Xoshiro {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RngCore for Xoshiro {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (Xoshiro::next_u64(self) >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Xoshiro::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoshiro {
    type Seed = [u8; STATE_WORDS * 8];

    /// Equivalent to [`Xoshiro::from_byte_seed`] over exactly 32 bytes.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_byte_seed(seed)
    }

    /// Equivalent to [`Xoshiro::from_seed_u64`].
    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed_u64(state)
    }
}
