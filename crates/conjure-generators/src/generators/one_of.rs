//! Uniform choice among a fixed set of candidates.

use crate::generators::constant::{constant, Constant};
use conjure_core::{Generator, GeneratorError, Source};
use tracing::debug;

/// Picks a uniformly random element of its candidates on every call.
#[derive(Debug, Clone)]
pub enum OneOf<T> {
    /// Exactly one candidate was supplied.
    Constant(Constant<T>),
    /// Two or more candidates, in the order they were supplied.
    Choice(Vec<T>),
}

impl<T> OneOf<T> {
    /// The single candidate, if construction degraded to a constant.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            OneOf::Constant(only) => Some(only.value()),
            OneOf::Choice(_) => None,
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        match self {
            OneOf::Constant(_) => 1,
            OneOf::Choice(values) => values.len(),
        }
    }

    /// Always false: construction rejects empty candidate lists.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Clone> Generator for OneOf<T> {
    type Output = T;

    fn generate_one(&mut self, src: &mut Source) -> T {
        match self {
            OneOf::Constant(only) => only.generate_one(src),
            OneOf::Choice(values) => values[src.below(values.len())].clone(),
        }
    }
}

/// Generator choosing uniformly among `values`.
///
/// A single candidate degrades to [`Constant`]; no candidates at all is
/// [`GeneratorError::EmptyDomain`].
pub fn one_of<T: Clone>(values: impl IntoIterator<Item = T>) -> Result<OneOf<T>, GeneratorError> {
    let mut values: Vec<T> = values.into_iter().collect();

    match values.len() {
        0 => Err(GeneratorError::EmptyDomain { what: "one_of" }),
        1 => {
            debug!("one_of with a single candidate degraded to constant");
            match values.pop() {
                Some(only) => Ok(OneOf::Constant(constant(only))),
                None => Err(GeneratorError::EmptyDomain { what: "one_of" }),
            }
        }
        _ => Ok(OneOf::Choice(values)),
    }
}
