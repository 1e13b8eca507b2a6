//! The `Generator` trait every value producer implements.

use crate::compose::{FlatMap, Map};
use crate::source::{with_thread_source, Source};

/// Produces values of one type on demand.
///
/// Generators may be stateless (a pure function of the source) or carry
/// their own cursor. They never own the source: it is lent to each call.
pub trait Generator {
    /// Type of the generated values.
    type Output;

    /// Generate a single value.
    fn generate_one(&mut self, src: &mut Source) -> Self::Output;

    /// Generate `n` values, equivalent to `n` ordered calls to
    /// [`generate_one`](Generator::generate_one).
    fn generate_many(&mut self, src: &mut Source, n: usize) -> Vec<Self::Output> {
        (0..n).map(|_| self.generate_one(src)).collect()
    }

    /// Generate a single value from the calling thread's default source.
    fn sample(&mut self) -> Self::Output
    where
        Self: Sized,
    {
        with_thread_source(|src| self.generate_one(src))
    }

    /// Generate `n` values from the calling thread's default source.
    fn sample_many(&mut self, n: usize) -> Vec<Self::Output>
    where
        Self: Sized,
    {
        with_thread_source(|src| self.generate_many(src, n))
    }

    /// Lazily transform every generated value with `f`.
    fn map<K, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Output) -> K,
    {
        Map::new(self, f)
    }

    /// Lazily feed every generated value into `f` and draw from the
    /// generator it returns.
    fn flat_map<G, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        G: Generator,
        F: FnMut(Self::Output) -> G,
    {
        FlatMap::new(self, f)
    }

    /// Erase the concrete generator type.
    fn boxed<'a>(self) -> BoxedGenerator<'a, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A type-erased generator.
pub type BoxedGenerator<'a, T> = Box<dyn Generator<Output = T> + 'a>;

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Output = G::Output;

    fn generate_one(&mut self, src: &mut Source) -> Self::Output {
        (**self).generate_one(src)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    type Output = G::Output;

    fn generate_one(&mut self, src: &mut Source) -> Self::Output {
        (**self).generate_one(src)
    }
}

/// Generate `n` values from `generator`.
pub fn generate_n<G: Generator>(generator: &mut G, src: &mut Source, n: usize) -> Vec<G::Output> {
    generator.generate_many(src, n)
}
