//! Primitive generators for the conjure library.
//!
//! Every generator here is built atop the [`Source`] draw contract and the
//! [`Numeric`] range arithmetic from `conjure-core`, and composes with the
//! rest of the algebra through the [`Generator`] trait.
//!
//! # Example
//!
//! ```rust
//! use conjure_core::{map2, Generator, Source};
//! use conjure_generators::{between, one_of};
//!
//! let mut src = Source::seeded(42);
//! let names = one_of(["Margot", "John", "Anne"]).unwrap();
//! let ages = between(18u8, 80);
//! let mut people = map2(names, ages, |name, age| format!("{name} ({age})"));
//!
//! let person = people.generate_one(&mut src);
//! assert!(person.contains('('));
//! ```
//!
//! # Generators
//!
//! - [`constant`] - always the same value
//! - [`one_of`] - uniform choice among candidates
//! - [`between`] - uniform numeric value in a closed range
//! - [`arbitrary`] - [`between`] over a width's narrowed arbitrary domain
//! - [`sequential`] - deterministic cyclic numeric sequence
//! - [`time_sequential`] - deterministic cyclic timestamp sequence
//! - [`string_from`] - strings over an alphabet with bounded length
//! - [`time_between`] - uniform timestamp in a range
//!
//! Constructors whose domain holds exactly one value degrade to
//! [`Constant`] and never draw from the source.
//!
//! [`Source`]: conjure_core::Source
//! [`Numeric`]: conjure_core::Numeric
//! [`Generator`]: conjure_core::Generator

pub mod generators;

// Re-exports for convenience
pub use generators::constant::{constant, Constant};
pub use generators::numeric::{arbitrary, between, Between};
pub use generators::one_of::{one_of, OneOf};
pub use generators::sequential::{sequential, time_sequential, Sequential, TimeSequential};
pub use generators::string::{string_from, StringFrom};
pub use generators::timestamp::time_between;
