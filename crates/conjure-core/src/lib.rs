//! Core building blocks for the conjure generator library.
//!
//! This crate holds everything the primitive generators and the inference
//! engine share:
//!
//! - [`Source`] - the seedable random source lent to every draw
//! - [`Numeric`] - overflow-safe closed-range arithmetic per numeric width
//! - [`Generator`] - the trait every value producer implements
//! - [`map`], [`flat_map`], [`map2`]..[`map15`] - lazy composition
//!
//! # Architecture
//!
//! ```text
//! conjure-core (this crate)
//!    │
//!    ├─── conjure-generators  (constant, one_of, between, sequential, ...)
//!    │
//!    └─── conjure-infer       (type-driven synthesis with overrides)
//! ```
//!
//! # Example
//!
//! ```rust
//! use conjure_core::{from_fn, map2, Generator, Source};
//!
//! let mut src = Source::seeded(42);
//! let dice = || from_fn(|src: &mut Source| src.below(6) + 1);
//! let mut pair = map2(dice(), dice(), |a, b| a + b);
//!
//! let total = pair.generate_one(&mut src);
//! assert!((2..=12).contains(&total));
//! ```

pub mod compose;
pub mod error;
pub mod generator;
pub mod map_n;
pub mod numeric;
pub mod source;

// Re-exports for convenience
pub use compose::{flat_map, from_fn, map, FlatMap, FromFn, Map};
pub use error::GeneratorError;
pub use generator::{generate_n, BoxedGenerator, Generator};
pub use map_n::*;
pub use numeric::Numeric;
pub use source::{seed, with_thread_source, Source};
