//! Character generators and the built-in character classes.

use std::ops::RangeInclusive;

use crate::generator::Generator;
use crate::gens::{element_of, int_in, Compact, ElementOf, Map, Ranged};

const NUMBERS: &str = "0123456789";
const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generator returned by [`unicode_scalar_in`] and [`char_in`].
pub type ScalarGen = Compact<Map<Ranged<u32>, fn(u32) -> Option<char>>>;

/// Generator returned by [`char_of`] and the character classes.
pub type CharOf = Compact<ElementOf<char>>;

/// Uniform Unicode scalar value with a code point in `range`.
///
/// Code points that are not scalar values (surrogates, or anything past
/// `U+10FFFF`) are redrawn. A range holding no scalar value at all never
/// produces a character.
///
/// # Panics
///
/// Panics if the range is empty.
///
/// # Examples
///
/// ```rust
/// use gen_core::{unicode_scalar_in, Generator, Xoshiro};
///
/// // straddles the surrogate block
/// let around = unicode_scalar_in(0xD700..=0xE100);
/// let c = around.run_with(&mut Xoshiro::from_seed_u64(8));
/// assert!(!(0xD800..=0xDFFF).contains(&u32::from(c)));
/// ```
pub fn unicode_scalar_in(range: RangeInclusive<u32>) -> ScalarGen {
    let to_char: fn(u32) -> Option<char> = char::from_u32;
    int_in(range).compact_map(to_char)
}

/// Uniform character between two characters, both inclusive.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn char_in(range: RangeInclusive<char>) -> ScalarGen {
    let (lo, hi) = range.into_inner();
    unicode_scalar_in(u32::from(lo)..=u32::from(hi))
}

/// Uniformly chosen character of `text`.
///
/// Characters that appear more than once are proportionally more likely.
/// An empty `text` never produces a character.
pub fn char_of(text: &str) -> CharOf {
    element_of(text.chars()).compact()
}

/// ASCII digit, `0` to `9`.
pub fn number() -> CharOf {
    char_of(NUMBERS)
}

/// ASCII uppercase letter.
pub fn uppercase_letter() -> CharOf {
    char_of(UPPER_LETTERS)
}

/// ASCII lowercase letter.
pub fn lowercase_letter() -> CharOf {
    char_of(LOWER_LETTERS)
}

/// ASCII letter of either case, each of the 52 equally likely.
pub fn letter() -> CharOf {
    element_of(UPPER_LETTERS.chars().chain(LOWER_LETTERS.chars())).compact()
}

/// ASCII letter or digit, each of the 62 equally likely.
pub fn letter_or_number() -> CharOf {
    element_of(
        LOWER_LETTERS
            .chars()
            .chain(UPPER_LETTERS.chars())
            .chain(NUMBERS.chars()),
    )
    .compact()
}

/// Any character of the ASCII range, `U+0000` to `U+007F`.
pub fn ascii() -> ScalarGen {
    unicode_scalar_in(0..=127)
}

/// Any character of the Latin-1 range, `U+0000` to `U+00FF`.
pub fn latin1() -> ScalarGen {
    unicode_scalar_in(0..=255)
}
