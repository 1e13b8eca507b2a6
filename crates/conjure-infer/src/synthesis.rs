//! The pre-scan and the budgeted recursive descent behind [`Infer`].
//!
//! [`Scan`] walks every type reachable from the target once, before any
//! value is generated, so shape problems surface at construction time.
//! [`Synthesis`] carries the source, the override registry and the depth
//! counter through one value's recursive construction.

use crate::config::InferConfig;
use crate::error::InferenceError;
use crate::infer::Infer;
use crate::registry::Registry;
use conjure_core::numeric::draw_usize;
use conjure_core::Source;
use std::any::{type_name, TypeId};
use std::collections::HashSet;
use tracing::trace;

/// Shape check over every type reachable from an inference target.
pub struct Scan<'a> {
    registry: &'a Registry,
    visited: HashSet<TypeId>,
}

impl<'a> Scan<'a> {
    pub(crate) fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            visited: HashSet::new(),
        }
    }

    /// Check the target type itself. Overrides never replace the target.
    pub(crate) fn root<T: Infer>(&mut self) -> Result<(), InferenceError> {
        self.visited.insert(TypeId::of::<T>());
        T::scan(self)
    }

    /// Check a type nested inside the one being scanned.
    ///
    /// Overridden types and types already seen are skipped, which keeps
    /// self-referential shapes from looping.
    pub fn field<F: Infer>(&mut self) -> Result<(), InferenceError> {
        let type_id = TypeId::of::<F>();
        if self.registry.contains_id(type_id) || !self.visited.insert(type_id) {
            return Ok(());
        }
        F::scan(self)
    }
}

/// State threaded through the construction of one synthesized value.
pub struct Synthesis<'a> {
    src: &'a mut Source,
    registry: &'a mut Registry,
    config: &'a InferConfig,
    depth: usize,
    nodes: usize,
}

impl<'a> Synthesis<'a> {
    pub(crate) fn new(
        src: &'a mut Source,
        registry: &'a mut Registry,
        config: &'a InferConfig,
    ) -> Self {
        Self {
            src,
            registry,
            config,
            depth: 0,
            nodes: 0,
        }
    }

    /// The random source for leaf draws.
    pub fn source(&mut self) -> &mut Source {
        &mut *self.src
    }

    pub fn config(&self) -> &InferConfig {
        self.config
    }

    /// Nesting level of the value currently being built.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nested values synthesized so far for the current top-level value.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Build the target value with the full size budget.
    pub(crate) fn root<T: Infer>(&mut self) -> Result<T, InferenceError> {
        self.descend::<T>(self.config.size_budget)
    }

    /// Build a value nested inside the current one.
    ///
    /// A registered override supplies the value unmodified and ignores the
    /// budget. Otherwise the type synthesizes itself with `budget`.
    pub fn value<V: Infer>(&mut self, budget: usize) -> Result<V, InferenceError> {
        if let Some(value) = self.registry.generate::<V>(self.src) {
            return Ok(value);
        }
        self.descend::<V>(budget)
    }

    fn descend<V: Infer>(&mut self, budget: usize) -> Result<V, InferenceError> {
        if self.depth >= self.config.max_depth {
            return Err(InferenceError::DepthExceeded {
                type_name: type_name::<V>(),
                depth: self.depth,
            });
        }

        let exhausted =
            self.depth >= self.config.clamp_depth() || self.nodes >= self.config.max_nodes;
        let budget = if exhausted && budget > 0 {
            trace!(
                depth = self.depth,
                nodes = self.nodes,
                type_name = type_name::<V>(),
                "Clamping synthesis budget to zero"
            );
            0
        } else {
            budget
        };

        self.nodes += 1;
        self.depth += 1;
        let result = V::synthesize(self, budget);
        self.depth -= 1;
        result
    }

    /// Uniform count in `[0, budget]`.
    pub fn draw_count(&mut self, budget: usize) -> usize {
        draw_usize(self.src, budget)
    }

    /// Budget each of `fields` fields receives from a composite's `budget`.
    ///
    /// The budget is split evenly; when there are more fields than budget,
    /// every field gets 1.
    pub fn field_budget(budget: usize, fields: usize) -> usize {
        if fields == 0 {
            budget
        } else if fields > budget {
            1
        } else {
            budget / fields
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_budget_divides_evenly() {
        assert_eq!(Synthesis::field_budget(50, 2), 25);
        assert_eq!(Synthesis::field_budget(50, 3), 16);
        assert_eq!(Synthesis::field_budget(50, 0), 50);
    }

    #[test]
    fn test_field_budget_floor_is_one() {
        assert_eq!(Synthesis::field_budget(3, 4), 1);
        assert_eq!(Synthesis::field_budget(0, 1), 1);
    }

    #[test]
    fn test_draw_count_within_budget() {
        let mut src = Source::seeded(42);
        let mut registry = Registry::new();
        let config = InferConfig::default();
        let mut cx = Synthesis::new(&mut src, &mut registry, &config);

        assert_eq!(cx.draw_count(0), 0);
        for _ in 0..100 {
            assert!(cx.draw_count(5) <= 5);
        }
    }

    #[test]
    fn test_node_limit_clamps_budget() {
        let mut src = Source::seeded(42);
        let mut registry = Registry::new();
        let config = InferConfig::default().with_max_nodes(3);
        let mut cx = Synthesis::new(&mut src, &mut registry, &config);

        for _ in 0..3 {
            cx.value::<u8>(0).unwrap();
        }
        assert_eq!(cx.nodes(), 3);

        for _ in 0..20 {
            assert!(cx.value::<Vec<u8>>(50).unwrap().is_empty());
            assert!(cx.value::<Option<u8>>(50).unwrap().is_none());
        }
        assert_eq!(cx.nodes(), 43);
    }
}
