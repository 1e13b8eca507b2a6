//! Composable random value generators.
//!
//! A [`Generator`] produces values of one type from a [`Source`] of
//! randomness. Primitive generators cover fixed values, finite choices,
//! numeric ranges, cycling sequences, strings and timestamps. They compose
//! lazily through [`Generator::map`], [`Generator::flat_map`] and
//! [`map2`]..[`map15`]. For whole data types, [`infer`] builds a generator
//! from the type's shape, with [`wrap`] overrides for the fields that need
//! domain-specific values.
//!
//! ```
//! use conjure::{between, infer, one_of, sequential, wrap, Generator, Infer, Source};
//!
//! #[derive(Debug, Infer)]
//! struct Order {
//!     id: u32,
//!     region: String,
//!     quantity: u16,
//!     tags: Vec<String>,
//! }
//!
//! let mut orders = infer::<Order>([
//!     wrap(sequential(1u32, 1_000_000, 1)),
//!     wrap(one_of(["eu".to_string(), "us".to_string()]).unwrap()),
//!     wrap(between(1u16, 10)),
//! ])
//! .unwrap();
//!
//! let mut src = Source::seeded(42);
//! let first = orders.generate_one(&mut src);
//! assert_eq!(first.id, 1);
//! assert!((1..=10).contains(&first.quantity));
//! ```
//!
//! Every generator also draws from a per-thread default source, which
//! [`seed`] resets for replayable runs:
//!
//! ```
//! use conjure::{between, seed, Generator};
//!
//! let mut dice = between(1u8, 6);
//! seed(7);
//! let first = dice.sample_many(5);
//! seed(7);
//! assert_eq!(dice.sample_many(5), first);
//! ```

pub use conjure_core::numeric;
pub use conjure_core::{
    flat_map, from_fn, generate_n, map, seed, with_thread_source, BoxedGenerator, FlatMap,
    FromFn, Generator, GeneratorError, Map, Numeric, Source,
};
pub use conjure_core::{
    map10, map11, map12, map13, map14, map15, map2, map3, map4, map5, map6, map7, map8, map9,
    Map10, Map11, Map12, Map13, Map14, Map15, Map2, Map3, Map4, Map5, Map6, Map7, Map8, Map9,
};

pub use conjure_generators::{
    arbitrary, between, constant, one_of, sequential, string_from, time_between, time_sequential,
    Between, Constant, OneOf, Sequential, StringFrom, TimeSequential,
};

pub use conjure_infer::{
    infer, infer_with, wrap, ConfigError, InferConfig, Inferred, InferenceError, OverrideEntry,
    Registry, Scan, Synthesis,
};

/// Shape-driven synthesis; see [`infer`].
pub use conjure_infer::Infer;

/// Derive [`Infer`](trait@Infer) from a struct's or enum's declared fields.
pub use conjure_derive::Infer;
