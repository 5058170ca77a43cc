//! Generator implementations.
//!
//! Primitive generators:
//! - [`Always`], [`AlwaysWith`]: constants and lazy producers
//! - [`Ranged`], [`Bool`]: uniform numbers and coin flips
//! - [`ElementOf`], [`Shuffled`]: choosing from and permuting collections
//! - character generators and classes ([`char_of`], [`letter`], ...)
//! - [`FromDistribution`]: any `rand` distribution
//!
//! Combinators, normally reached through [`Generator`](crate::Generator)
//! methods: [`Map`], [`FlatMap`], [`Filter`], [`Compact`], [`Zip`],
//! [`Frequency`], [`EitherGen`], [`Reduce`], [`ReduceWith`], [`Traverse`].

mod always;
mod chars;
mod distribution;
mod either_gen;
mod element;
mod filter;
mod frequency;
mod map;
mod numbers;
mod reduce;
mod traverse;
mod zip;

pub use always::{always, always_with, Always, AlwaysWith};
pub use chars::{
    ascii, char_in, char_of, latin1, letter, letter_or_number, lowercase_letter, number,
    unicode_scalar_in, uppercase_letter, CharOf, ScalarGen,
};
pub use distribution::{from_distribution, normal, FromDistribution};
pub use either_gen::{either, either_weighted, EitherGen, OptionalGen, ResultGen};
pub use element::{element_of, shuffled, ElementGen, ElementOf, Shuffled, ShuffledGen};
pub use filter::{BoundedCompact, BoundedFilter, Compact, Filter};
pub use frequency::{frequency, Frequency};
pub use map::{FlatMap, Map};
pub use numbers::{bool, float_in, int_in, Bool, Ranged};
pub use reduce::{ArrayGen, DictionaryGen, Reduce, ReduceWith, SetGen, StringGen};
pub use traverse::{sequence, traverse, Sequence, Traverse};
pub use zip::{zip, zip_all, Zip};

pub(crate) use element::{element, shuffle};
pub(crate) use reduce::{array, dictionary, set, string};
