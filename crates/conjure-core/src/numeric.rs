//! Overflow-safe range arithmetic for every supported numeric width.
//!
//! A draw in `[min, max]` is computed as "difference, then re-offset": the
//! distance `max - min` is taken in the unsigned representation of the same
//! width (where it always fits), a uniform offset in `[0, diff]` is drawn,
//! and the offset is added back to `min` with wrapping arithmetic. The
//! source only draws 32-bit and 64-bit words, so the narrower widths widen
//! their span, draw, and narrow the result.

use crate::source::Source;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Numeric types that can be drawn from a closed range.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`,
/// `i64`, `isize`, `f32` and `f64`.
///
/// Floating-point ranges scale a `[0, 1)` draw by the width of the range.
/// This is an approximation: the result is not uniform at the ULP level.
pub trait Numeric: Copy + PartialOrd + fmt::Debug + 'static + sealed::Sealed {
    /// Representation of `max - min`: the same-width unsigned type for
    /// integers, the type itself for floats.
    type Span: Copy + fmt::Debug + PartialEq;

    const ZERO: Self;

    /// Distance from `lo` to `hi`. Requires `lo <= hi`; never overflows.
    fn span(lo: Self, hi: Self) -> Self::Span;

    /// Uniform value in `[min(a, b), max(a, b)]`.
    fn uniform_closed(src: &mut Source, a: Self, b: Self) -> Self;

    /// The narrowed domain used for arbitrary values of this width.
    ///
    /// Signed integers and floats stay within half of the representable
    /// range so arithmetic on generated values does not immediately overflow.
    fn arbitrary_bounds() -> (Self, Self);

    /// Next position of a cyclic cursor moving from `from` towards `to` by
    /// `step`. The step must point from `from` towards `to`.
    fn cycle(current: Self, step: Self, from: Self, to: Self) -> Self;
}

/// Order two values so the smaller one comes first.
pub fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Uniform value in `[0, diff]`.
pub fn draw_u32(src: &mut Source, diff: u32) -> u32 {
    if diff == u32::MAX {
        src.next_u32()
    } else {
        src.below_u32(diff + 1)
    }
}

/// Uniform value in `[0, diff]`.
pub fn draw_u64(src: &mut Source, diff: u64) -> u64 {
    if diff == u64::MAX {
        src.next_u64()
    } else {
        src.below_u64(diff + 1)
    }
}

/// Uniform value in `[0, diff]`.
pub fn draw_u8(src: &mut Source, diff: u8) -> u8 {
    draw_u32(src, u32::from(diff)) as u8
}

/// Uniform value in `[0, diff]`.
pub fn draw_u16(src: &mut Source, diff: u16) -> u16 {
    draw_u32(src, u32::from(diff)) as u16
}

/// Uniform value in `[0, diff]`, using a 32-bit draw whenever the span fits.
pub fn draw_usize(src: &mut Source, diff: usize) -> usize {
    match u32::try_from(diff) {
        Ok(narrow) => draw_u32(src, narrow) as usize,
        Err(_) => draw_u64(src, diff as u64) as usize,
    }
}

fn cycle_wide(current: i128, step: i128, from: i128, to: i128) -> i128 {
    let next = current + step;
    if step > 0 {
        if next <= to {
            return next;
        }
        let span = to - from + 1;
        from + (next - to - 1).rem_euclid(span)
    } else {
        if next >= to {
            return next;
        }
        let span = from - to + 1;
        from - (to - next - 1).rem_euclid(span)
    }
}

macro_rules! impl_integer {
    ($($t:ty => $span:ty, $draw:ident, $arb:expr;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            type Span = $span;

            const ZERO: Self = 0;

            fn span(lo: Self, hi: Self) -> $span {
                (hi as $span).wrapping_sub(lo as $span)
            }

            fn uniform_closed(src: &mut Source, a: Self, b: Self) -> Self {
                let (lo, hi) = ordered(a, b);
                let offset = $draw(src, Self::span(lo, hi));
                (lo as $span).wrapping_add(offset) as $t
            }

            fn arbitrary_bounds() -> (Self, Self) {
                $arb
            }

            fn cycle(current: Self, step: Self, from: Self, to: Self) -> Self {
                // Every position of the cursor lies in [from, to], so the
                // narrowing cast is lossless.
                cycle_wide(current as i128, step as i128, from as i128, to as i128) as $t
            }
        }
    )*};
}

impl_integer! {
    u8 => u8, draw_u8, (0, u8::MAX);
    u16 => u16, draw_u16, (0, u16::MAX);
    u32 => u32, draw_u32, (0, u32::MAX);
    u64 => u64, draw_u64, (0, u64::MAX);
    usize => usize, draw_usize, (0, usize::MAX);
    i8 => u8, draw_u8, (i8::MIN / 2 + 1, i8::MAX / 2 - 1);
    i16 => u16, draw_u16, (i16::MIN / 2 + 1, i16::MAX / 2 - 1);
    i32 => u32, draw_u32, (i32::MIN / 2 + 1, i32::MAX / 2 - 1);
    i64 => u64, draw_u64, (i64::MIN / 2 + 1, i64::MAX / 2 - 1);
    isize => usize, draw_usize, (isize::MIN / 2 + 1, isize::MAX / 2 - 1);
}

macro_rules! impl_float {
    ($($t:ty, $unit:ident, $arb:expr;)*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            type Span = $t;

            const ZERO: Self = 0.0;

            fn span(lo: Self, hi: Self) -> $t {
                hi - lo
            }

            fn uniform_closed(src: &mut Source, a: Self, b: Self) -> Self {
                let (lo, hi) = ordered(a, b);
                let unit = src.$unit();
                let diff = Self::span(lo, hi);
                let value = if diff.is_finite() {
                    lo + unit * diff
                } else {
                    // The span of two extreme finite values overflows.
                    lo * (1.0 - unit) + hi * unit
                };
                value.min(hi)
            }

            fn arbitrary_bounds() -> (Self, Self) {
                $arb
            }

            fn cycle(current: Self, step: Self, from: Self, to: Self) -> Self {
                let next = current + step;
                if step > 0.0 {
                    if next <= to {
                        next
                    } else {
                        from + (next - to).rem_euclid(to - from)
                    }
                } else if next >= to {
                    next
                } else {
                    from - (to - next).rem_euclid(from - to)
                }
            }
        }
    )*};
}

impl_float! {
    f32, unit_f32, ((i32::MIN / 2 + 1) as f32, (i32::MAX / 2 - 1) as f32);
    f64, unit_f64, ((i64::MIN / 2 + 1) as f64, (i64::MAX / 2 - 1) as f64);
}
