//! Entry points of the inference engine.

use crate::config::InferConfig;
use crate::error::InferenceError;
use crate::registry::{OverrideEntry, Registry};
use crate::synthesis::{Scan, Synthesis};
use conjure_core::{Generator, Source};
use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// Types whose values can be synthesized from their shape.
///
/// Usually implemented with `#[derive(Infer)]`, which walks the declared
/// fields: `scan` visits each field type and `synthesize` divides the budget
/// evenly across the fields and builds each one through
/// [`Synthesis::value`].
pub trait Infer: Sized + 'static {
    /// Check, before generation starts, that every type reachable from this
    /// one can be synthesized. Leaf types have nothing to check.
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        let _ = scan;
        Ok(())
    }

    /// Build one value, spending at most `budget` on nested structure.
    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError>;
}

/// Infer a generator for `T` with the default [`InferConfig`].
///
/// Overrides replace synthesis for every nested value of their type; a
/// later override for the same type replaces an earlier one.
pub fn infer<T: Infer>(
    overrides: impl IntoIterator<Item = OverrideEntry>,
) -> Result<Inferred<T>, InferenceError> {
    infer_with(InferConfig::default(), overrides)
}

/// Infer a generator for `T` with an explicit configuration.
///
/// Fails with [`InferenceError::NotInferrable`] when `T`, or any type
/// reachable from it that is not overridden, cannot be synthesized.
pub fn infer_with<T: Infer>(
    config: InferConfig,
    overrides: impl IntoIterator<Item = OverrideEntry>,
) -> Result<Inferred<T>, InferenceError> {
    config
        .validate()
        .map_err(|err| InferenceError::InvalidConfig {
            reason: err.to_string(),
        })?;

    let registry: Registry = overrides.into_iter().collect();
    Scan::new(&registry).root::<T>()?;

    debug!(
        target_type = type_name::<T>(),
        overrides = registry.len(),
        size_budget = config.size_budget,
        max_depth = config.max_depth,
        max_nodes = config.max_nodes,
        "Built inference session"
    );

    Ok(Inferred {
        registry,
        config,
        poisoned: None,
        _marker: PhantomData,
    })
}

/// Generator produced by [`infer`].
///
/// Once a generation fails the generator is poisoned: the shape problem is
/// structural, so every later call reports the same error without drawing.
pub struct Inferred<T> {
    registry: Registry,
    config: InferConfig,
    poisoned: Option<InferenceError>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Infer> Inferred<T> {
    /// Generate one value, or the error that made this generator unusable.
    pub fn try_generate_one(&mut self, src: &mut Source) -> Result<T, InferenceError> {
        if let Some(err) = &self.poisoned {
            return Err(err.clone());
        }

        let result = Synthesis::new(src, &mut self.registry, &self.config).root::<T>();
        if let Err(err) = &result {
            warn!(
                target_type = type_name::<T>(),
                error = %err,
                "Inferred generator failed and is now unusable"
            );
            self.poisoned = Some(err.clone());
        }
        result
    }

    /// Generate `n` values, stopping at the first failure.
    pub fn try_generate_many(
        &mut self,
        src: &mut Source,
        n: usize,
    ) -> Result<Vec<T>, InferenceError> {
        (0..n).map(|_| self.try_generate_one(src)).collect()
    }

    /// Whether an earlier generation failed.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    pub fn config(&self) -> &InferConfig {
        &self.config
    }
}

impl<T: Infer> Generator for Inferred<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics when the value cannot be synthesized. Use
    /// [`Inferred::try_generate_one`] to receive the error instead.
    fn generate_one(&mut self, src: &mut Source) -> T {
        match self.try_generate_one(src) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> fmt::Debug for Inferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inferred")
            .field("target_type", &type_name::<T>())
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("poisoned", &self.poisoned)
            .finish()
    }
}
