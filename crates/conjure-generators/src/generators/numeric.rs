//! Numeric range generators.

use crate::generators::constant::{constant, Constant};
use conjure_core::numeric::ordered;
use conjure_core::{Generator, Numeric, Source};
use tracing::debug;

/// Uniform value in a closed numeric range.
///
/// Integer draws are exact. Float draws scale a `[0, 1)` draw by the
/// width of the range, which is uniform only up to rounding.
#[derive(Debug, Clone)]
pub enum Between<T> {
    /// Both bounds were equal.
    Constant(Constant<T>),
    /// `lo < hi`.
    Range { lo: T, hi: T },
}

impl<T> Between<T> {
    /// The only possible value, if construction degraded to a constant.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Between::Constant(only) => Some(only.value()),
            Between::Range { .. } => None,
        }
    }
}

impl<T: Numeric> Generator for Between<T> {
    type Output = T;

    fn generate_one(&mut self, src: &mut Source) -> T {
        match self {
            Between::Constant(only) => only.generate_one(src),
            Between::Range { lo, hi } => T::uniform_closed(src, *lo, *hi),
        }
    }
}

/// Generator of values in `[min(a, b), max(a, b)]`.
///
/// The bounds may be passed in either order. Equal bounds degrade to
/// [`Constant`].
pub fn between<T: Numeric>(a: T, b: T) -> Between<T> {
    if a == b {
        debug!(value = ?a, "between with equal bounds degraded to constant");
        return Between::Constant(constant(a));
    }
    let (lo, hi) = ordered(a, b);
    Between::Range { lo, hi }
}

/// Generator over the arbitrary-value domain of `T`.
///
/// See [`Numeric::arbitrary_bounds`] for how each width is narrowed.
pub fn arbitrary<T: Numeric>() -> Between<T> {
    let (lo, hi) = T::arbitrary_bounds();
    between(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_between_accepts_reversed_bounds() {
        let min = 100_000;
        let max = -790_832;
        let mut generator = between(min, max);
        let mut src = Source::seeded(42);

        for value in generator.generate_many(&mut src, 100) {
            assert!((max..=min).contains(&value));
        }
    }

    #[test]
    fn test_between_equal_bounds_is_constant() {
        let mut generator = between(10, 10);
        let mut src = Source::seeded(42);

        assert_eq!(generator.as_constant(), Some(&10));
        for value in generator.generate_many(&mut src, 100) {
            assert_eq!(value, 10);
        }
    }

    #[test]
    fn test_between_near_extremes() {
        let mut src = Source::seeded(42);
        let mut signed = between(i64::MIN, i64::MIN + 3);
        let mut unsigned = between(u8::MAX - 1, u8::MAX);

        for _ in 0..100 {
            assert!(signed.generate_one(&mut src) <= i64::MIN + 3);
            assert!(unsigned.generate_one(&mut src) >= u8::MAX - 1);
        }
    }

    #[test]
    fn test_float_range() {
        let mut generator = between(0.0, 100.0);
        let mut src = Source::seeded(42);

        for value in generator.generate_many(&mut src, 100) {
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_arbitrary_int_is_narrowed() {
        let mut generator = arbitrary::<i32>();
        let mut src = Source::seeded(42);

        for value in generator.generate_many(&mut src, 100) {
            assert!(value > i32::MIN / 2 && value < i32::MAX / 2);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut a = Source::seeded(42);
        let mut b = Source::seeded(42);

        assert_eq!(
            between(0u64, 1_000_000).generate_many(&mut a, 20),
            between(0u64, 1_000_000).generate_many(&mut b, 20)
        );
    }

    proptest! {
        #[test]
        fn prop_between_i64_in_bounds(a in any::<i64>(), b in any::<i64>(), seed in any::<i64>()) {
            let mut generator = between(a, b);
            let mut src = Source::seeded(seed);
            for value in generator.generate_many(&mut src, 100) {
                prop_assert!(value >= a.min(b) && value <= a.max(b));
            }
        }

        #[test]
        fn prop_between_u8_in_bounds(a in any::<u8>(), b in any::<u8>(), seed in any::<i64>()) {
            let mut generator = between(a, b);
            let mut src = Source::seeded(seed);
            for value in generator.generate_many(&mut src, 100) {
                prop_assert!(value >= a.min(b) && value <= a.max(b));
            }
        }
    }
}
