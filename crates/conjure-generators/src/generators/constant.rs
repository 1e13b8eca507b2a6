//! Constant value generator.

use conjure_core::{Generator, Source};

/// Always generates the value it was built with.
///
/// This is the unit of composition and the form every single-valued
/// generator degrades to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// The value this generator always returns.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Generator for Constant<T> {
    type Output = T;

    fn generate_one(&mut self, _src: &mut Source) -> T {
        self.value.clone()
    }

    fn generate_many(&mut self, _src: &mut Source, n: usize) -> Vec<T> {
        vec![self.value.clone(); n]
    }
}

/// Generator that only ever produces `value`.
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}
