//! The four-word xoshiro256** state and its serialised form.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::StateError;

/// Number of 64-bit words in a xoshiro256** state.
pub const STATE_WORDS: usize = 4;

/// Raw xoshiro256** state: exactly four unsigned 64-bit words `(a, b, c, d)`.
///
/// The state serialises as a JSON array `[a, b, c, d]`; decoding an array of
/// any other length fails with [`StateError::InvalidLength`].
///
/// # Examples
///
/// ```rust
/// use gen_prng::State;
///
/// let state = State::new(420, 42, 666, 69);
/// assert_eq!(state.to_json().unwrap(), "[420,42,666,69]");
/// assert_eq!(State::from_json("[420,42,666,69]").unwrap(), state);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct State {
    /// First word.
    pub a: u64,
    /// Second word; the output function reads only this word.
    pub b: u64,
    /// Third word.
    pub c: u64,
    /// Fourth word.
    pub d: u64,
}

impl State {
    /// Creates a state from its four words.
    #[inline]
    pub const fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Expands a single 64-bit seed into a full state.
    ///
    /// The three trailing words reproduce the historical expansion constant,
    /// which was written as three literals `18_446_744`, `073_709` and
    /// `551_615` rather than `u64::MAX`. Golden vectors depend on it.
    #[inline]
    pub const fn from_seed_word(seed: u64) -> Self {
        Self::new(seed, 18_446_744, 73_709, 551_615)
    }

    /// Returns the output word for the current state without advancing it.
    ///
    /// Computes `rotl(b * 5, 7) * 9` with wrapping arithmetic.
    #[inline]
    pub const fn output(&self) -> u64 {
        self.b.wrapping_mul(5).rotate_left(7).wrapping_mul(9)
    }

    /// Advances the state by one xoshiro256** step.
    #[inline]
    pub fn perturb(&mut self) {
        let t = self.b << 17;
        self.c ^= self.a;
        self.d ^= self.b;
        self.b ^= self.c;
        self.a ^= self.d;
        self.c ^= t;
        self.d = self.d.rotate_left(45);
    }

    /// Returns the words in order `[a, b, c, d]`.
    #[inline]
    pub const fn to_words(self) -> [u64; STATE_WORDS] {
        [self.a, self.b, self.c, self.d]
    }

    /// Builds a state from words in order `[a, b, c, d]`.
    #[inline]
    pub const fn from_words(words: [u64; STATE_WORDS]) -> Self {
        Self::new(words[0], words[1], words[2], words[3])
    }

    /// Returns the 32-byte little-endian memory image of the state.
    pub fn to_le_bytes(self) -> [u8; STATE_WORDS * 8] {
        let mut bytes = [0u8; STATE_WORDS * 8];
        for (chunk, word) in bytes.chunks_exact_mut(8).zip(self.to_words()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Rebuilds a state from its 32-byte little-endian memory image.
    pub fn from_le_bytes(bytes: [u8; STATE_WORDS * 8]) -> Self {
        let mut words = [0u64; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        Self::from_words(words)
    }

    /// Encodes the state as a compact JSON array, e.g. `[420,42,666,69]`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a state from a JSON array of exactly four words.
    ///
    /// # Errors
    ///
    /// - [`StateError::InvalidLength`] if the array does not hold four words
    /// - [`StateError::Json`] if the input is not an array of `u64`
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        let words: Vec<u64> = serde_json::from_str(json)?;
        let words: [u64; STATE_WORDS] =
            words
                .try_into()
                .map_err(|words: Vec<u64>| StateError::InvalidLength {
                    expected: STATE_WORDS,
                    found: words.len(),
                })?;
        Ok(Self::from_words(words))
    }
}

impl From<[u64; STATE_WORDS]> for State {
    fn from(words: [u64; STATE_WORDS]) -> Self {
        Self::from_words(words)
    }
}

impl From<State> for [u64; STATE_WORDS] {
    fn from(state: State) -> Self {
        state.to_words()
    }
}

impl Serialize for State {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(STATE_WORDS))?;
        for word in self.to_words() {
            seq.serialize_element(&word)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for State {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(StateVisitor)
    }
}

struct StateVisitor;

impl<'de> Visitor<'de> for StateVisitor {
    type Value = State;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of exactly {} unsigned 64-bit words", STATE_WORDS)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<State, A::Error> {
        let mut words = [0u64; STATE_WORDS];
        for (index, word) in words.iter_mut().enumerate() {
            *word = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(index, &self))?;
        }
        // Drain the remainder so the reported length is the real one.
        let mut found = STATE_WORDS;
        while seq.next_element::<de::IgnoredAny>()?.is_some() {
            found += 1;
        }
        if found != STATE_WORDS {
            return Err(de::Error::invalid_length(found, &self));
        }
        Ok(State::from_words(words))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_reference() {
        assert_eq!(
            State::new(420, 42, 666, 69).to_json().unwrap(),
            "[420,42,666,69]"
        );
    }

    #[test]
    fn test_decode_matches_reference() {
        let state = State::from_json("[420,42,666,69]").unwrap();
        assert_eq!(state, State::new(420, 42, 666, 69));
    }

    #[test]
    fn test_decode_rejects_wrong_lengths() {
        for (json, found) in [("[]", 0), ("[1]", 1), ("[1,2,3]", 3), ("[1,2,3,4,5]", 5)] {
            let err = State::from_json(json).unwrap_err();
            assert!(
                matches!(err, StateError::InvalidLength { expected: 4, found: f } if f == found),
                "{}: {:?}",
                json,
                err
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_integers() {
        let err = State::from_json(r#"["a","b","c","d"]"#).unwrap_err();
        assert!(matches!(err, StateError::Json(_)));

        let err = State::from_json("[-1,2,3,4]").unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }

    #[test]
    fn test_serde_visitor_reports_length() {
        let err = serde_json::from_str::<State>("[1,2,3,4,5,6]").unwrap_err();
        assert!(err.to_string().contains("invalid length 6"), "{}", err);

        let err = serde_json::from_str::<State>("[1,2]").unwrap_err();
        assert!(err.to_string().contains("invalid length 2"), "{}", err);
    }

    #[test]
    fn test_full_range_words_round_trip() {
        let state = State::new(u64::MAX, 0, 1 << 63, 12_345_678_901_234_567_890);
        assert_eq!(State::from_json(&state.to_json().unwrap()).unwrap(), state);
    }

    #[test]
    fn test_le_bytes_layout() {
        let state = State::new(1, 2, 3, 4);
        let bytes = state.to_le_bytes();
        assert_eq!(bytes[0], 1);
        assert_eq!(bytes[8], 2);
        assert_eq!(bytes[16], 3);
        assert_eq!(bytes[24], 4);
        assert_eq!(State::from_le_bytes(bytes), state);
    }

    #[test]
    fn test_output_is_pre_perturb() {
        let mut state = State::new(420, 42, 666, 69);
        assert_eq!(state.output(), 241_920);
        state.perturb();
        assert_eq!(state.output(), 4_538_880);
    }
}
