//! Type-driven generator inference.
//!
//! [`infer`] builds a generator for any type implementing [`Infer`] by
//! walking its shape: scalars draw from their full range, containers draw a
//! size from the remaining budget, and composites split their budget across
//! their fields. Overrides created with [`wrap`] take over every nested value
//! of their type.
//!
//! ```text
//!   infer::<T>(overrides)
//!        │
//!        ├── Registry ◄── wrap(generator) ...
//!        ├── Scan      (reject function-typed fields up front)
//!        ▼
//!   Inferred<T> ── generate_one ──► Synthesis ──► T::synthesize
//!                                       │              │
//!                                       │       cx.value::<Field>(budget)
//!                                       │              │
//!                                       └── override? ─┴─► Field::synthesize
//! ```
//!
//! Budgets shrink at every level and are forced to zero past half of
//! [`InferConfig::max_depth`], so self-referential shapes terminate through
//! their empty arms (`None`, empty `Vec`). Shapes without one fail with
//! [`InferenceError::DepthExceeded`].

pub mod config;
pub mod error;
mod functions;
pub mod infer;
mod leaves;
pub mod registry;
pub mod synthesis;

pub use config::InferConfig;
pub use error::{ConfigError, InferenceError};
pub use infer::{infer, infer_with, Infer, Inferred};
pub use registry::{wrap, OverrideEntry, Registry};
pub use synthesis::{Scan, Synthesis};
