//! Caller-supplied overrides consulted before automatic synthesis.

use conjure_core::{Generator, Source};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// A generator whose value type is hidden behind [`Any`].
trait ErasedGenerator {
    fn generate_any(&mut self, src: &mut Source) -> Box<dyn Any>;
}

struct Erased<G>(G);

impl<G> ErasedGenerator for Erased<G>
where
    G: Generator,
    G::Output: 'static,
{
    fn generate_any(&mut self, src: &mut Source) -> Box<dyn Any> {
        Box::new(self.0.generate_one(src))
    }
}

/// A generator paired with the type it produces, ready for registration.
pub struct OverrideEntry {
    type_id: TypeId,
    type_name: &'static str,
    generator: Box<dyn ErasedGenerator>,
}

impl OverrideEntry {
    /// Name of the overridden type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Identity of the overridden type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl fmt::Debug for OverrideEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideEntry")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Wrap `generator` so inference uses it for every value of its output type.
pub fn wrap<G>(generator: G) -> OverrideEntry
where
    G: Generator + 'static,
    G::Output: 'static,
{
    OverrideEntry {
        type_id: TypeId::of::<G::Output>(),
        type_name: type_name::<G::Output>(),
        generator: Box::new(Erased(generator)),
    }
}

/// Overrides keyed by the type they produce.
///
/// Registering a second generator for the same type replaces the first.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<TypeId, OverrideEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override, returning the one it replaced.
    pub fn register(&mut self, entry: OverrideEntry) -> Option<OverrideEntry> {
        let previous = self.entries.insert(entry.type_id, entry);
        if let Some(previous) = &previous {
            debug!(
                type_name = previous.type_name,
                "Replaced earlier override for the same type"
            );
        }
        previous
    }

    /// Whether values of `T` come from an override.
    pub fn contains<T: 'static>(&self) -> bool {
        self.contains_id(TypeId::of::<T>())
    }

    pub fn contains_id(&self, type_id: TypeId) -> bool {
        self.entries.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draw a value of `T` from its override, if one is registered.
    pub fn generate<T: 'static>(&mut self, src: &mut Source) -> Option<T> {
        let entry = self.entries.get_mut(&TypeId::of::<T>())?;
        entry
            .generator
            .generate_any(src)
            .downcast::<T>()
            .ok()
            .map(|value| *value)
    }
}

impl FromIterator<OverrideEntry> for Registry {
    fn from_iter<I: IntoIterator<Item = OverrideEntry>>(entries: I) -> Self {
        let mut registry = Registry::new();
        for entry in entries {
            registry.register(entry);
        }
        registry
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.values().map(|entry| entry.type_name))
            .finish()
    }
}
