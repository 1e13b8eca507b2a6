//! Lazy composition of generators.
//!
//! Every combinator here only stores its upstream generators and combining
//! function. Nothing is drawn until `generate_one` is called, and nothing is
//! memoized between calls.

use crate::generator::Generator;
use crate::source::Source;

/// Generator backed by a closure over the source.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<T, F> Generator for FromFn<F>
where
    F: FnMut(&mut Source) -> T,
{
    type Output = T;

    fn generate_one(&mut self, src: &mut Source) -> T {
        (self.f)(src)
    }
}

/// Build a generator that calls `f` on every draw.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(&mut Source) -> T,
{
    FromFn { f }
}

/// See [`Generator::map`].
#[derive(Clone)]
pub struct Map<G, F> {
    inner: G,
    f: F,
}

impl<G, F> Map<G, F> {
    pub(crate) fn new(inner: G, f: F) -> Self {
        Self { inner, f }
    }
}

impl<G, K, F> Generator for Map<G, F>
where
    G: Generator,
    F: FnMut(G::Output) -> K,
{
    type Output = K;

    fn generate_one(&mut self, src: &mut Source) -> K {
        (self.f)(self.inner.generate_one(src))
    }
}

/// Transform every value of `generator` with `f`.
pub fn map<G, K, F>(generator: G, f: F) -> Map<G, F>
where
    G: Generator,
    F: FnMut(G::Output) -> K,
{
    Map::new(generator, f)
}

/// See [`Generator::flat_map`].
#[derive(Clone)]
pub struct FlatMap<G, F> {
    inner: G,
    f: F,
}

impl<G, F> FlatMap<G, F> {
    pub(crate) fn new(inner: G, f: F) -> Self {
        Self { inner, f }
    }
}

impl<G, H, F> Generator for FlatMap<G, F>
where
    G: Generator,
    H: Generator,
    F: FnMut(G::Output) -> H,
{
    type Output = H::Output;

    fn generate_one(&mut self, src: &mut Source) -> H::Output {
        let seed = self.inner.generate_one(src);
        (self.f)(seed).generate_one(src)
    }
}

/// Dependent generation: the generator drawn from on each call is chosen by
/// the value `generator` produced first.
pub fn flat_map<G, H, F>(generator: G, f: F) -> FlatMap<G, F>
where
    G: Generator,
    H: Generator,
    F: FnMut(G::Output) -> H,
{
    FlatMap::new(generator, f)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Panics whenever it is asked for a value.
    pub(crate) struct Explosive;

    impl Generator for Explosive {
        type Output = u32;

        fn generate_one(&mut self, _src: &mut Source) -> u32 {
            panic!("generator was evaluated");
        }
    }

    /// Records its label into a shared log on every draw.
    pub(crate) struct Recording {
        pub(crate) label: &'static str,
        pub(crate) log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Generator for Recording {
        type Output = &'static str;

        fn generate_one(&mut self, _src: &mut Source) -> &'static str {
            self.log.borrow_mut().push(self.label);
            self.label
        }
    }

    #[test]
    fn test_construction_is_lazy() {
        let _mapped = map(Explosive, |n| n + 1);
        let _bound = flat_map(Explosive, |_| Explosive);
        let _chained = Explosive.map(|n| n * 2).flat_map(|_| Explosive);
    }

    #[test]
    #[should_panic(expected = "generator was evaluated")]
    fn test_generation_evaluates_upstream() {
        let mut src = Source::seeded(1);
        map(Explosive, |n| n + 1).generate_one(&mut src);
    }

    #[test]
    fn test_flat_map_evaluates_upstream_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let outer = Recording {
            label: "outer",
            log: Rc::clone(&log),
        };
        let inner_log = Rc::clone(&log);
        let mut generator = flat_map(outer, move |_| Recording {
            label: "inner",
            log: Rc::clone(&inner_log),
        });
        assert!(log.borrow().is_empty());

        let mut src = Source::seeded(1);
        generator.generate_many(&mut src, 2);

        assert_eq!(*log.borrow(), vec!["outer", "inner", "outer", "inner"]);
    }

    #[test]
    fn test_map_is_not_memoized() {
        let mut src = Source::seeded(5);
        let mut counter = 0u32;
        let mut generator = from_fn(move |_| {
            counter += 1;
            counter
        })
        .map(|n| n * 10);

        assert_eq!(generator.generate_many(&mut src, 3), vec![10, 20, 30]);
    }

    #[test]
    fn test_from_fn_uses_the_given_source() {
        let mut a = Source::seeded(3);
        let mut b = Source::seeded(3);
        let mut generator = from_fn(|src: &mut Source| src.below(1000));

        assert_eq!(
            generator.generate_many(&mut a, 20),
            generator.generate_many(&mut b, 20)
        );
    }
}
