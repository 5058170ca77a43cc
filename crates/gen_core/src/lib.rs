//! # gen_core: Composable Random Value Generators (Layer 2)
//!
//! ## Layer 2 Role
//!
//! gen_core builds typed generators on top of the gen_prng word source:
//! - The [`Generator`] trait: an immutable recipe drawn against any source
//! - Primitive generators: constants, numeric ranges, coins, collections,
//!   characters and `rand` distributions
//! - Combinators: map, flat-map, filter/compact, zip, weighted choice,
//!   count-driven collections and fixed traversal
//! - [`AnyGen`]: a nameable, type-erased generator
//!
//! ## Determinism
//!
//! Generators never own randomness. Given a seeded [`Xoshiro`], every
//! generator produces the same values on every run, and the number of words
//! it consumes is part of its behaviour: composite generators draw their
//! parts in a fixed, documented order.
//!
//! ## Usage Example
//!
//! ```rust
//! use gen_core::{frequency, int_in, letter_or_number, lowercase_letter, number};
//! use gen_core::{uppercase_letter, Generator, Xoshiro};
//!
//! // An Apple-style password: three blocks of six characters, lowercase-heavy
//! let password_char = frequency([
//!     (24, lowercase_letter()),
//!     (1, uppercase_letter()),
//!     (1, number()),
//! ])
//! .expect("valid table");
//! let block = password_char.string(int_in(6..=6));
//! let password = block.array(int_in(3..=3)).map(|blocks| blocks.join("-"));
//!
//! let mut rng = Xoshiro::from_seed_u64(2024);
//! let value = password.run_with(&mut rng);
//! assert_eq!(value.len(), 20);
//!
//! // Entropy-seeded draw
//! let _ = letter_or_number().run();
//! ```
//!
//! ## Non-termination
//!
//! `filter`, `compact` and their relatives redraw until they succeed. Use the
//! bounded variants with a [`RetryPolicy`] where acceptance may be
//! impossible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod any_gen;
pub mod config;
pub mod either;
pub mod error;
pub mod generator;
pub mod gens;

pub use any_gen::AnyGen;
pub use config::{RetryPolicy, RetryPolicyBuilder, Weights};
pub use either::Either;
pub use error::GenError;
pub use generator::Generator;
pub use gens::*;

// Layer 1 re-exports
pub use gen_prng::{FnSource, RandomSource, State, StateError, Xoshiro};
