//! [`Infer`] for standard library types.
//!
//! Scalars draw from their full narrowed range and ignore the budget.
//! Containers draw an element count in `[0, budget]` and hand the remaining
//! budget to their elements.

use crate::error::InferenceError;
use crate::infer::Infer;
use crate::synthesis::{Scan, Synthesis};
use chrono::{DateTime, TimeDelta, Utc};
use conjure_core::numeric::draw_u32;
use conjure_core::{Generator, Numeric, Source};
use conjure_generators::time_between;
use num_complex::Complex;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

/// Seconds from the Unix epoch to 2100-01-01T00:00:00Z.
const YEAR_2100_SECS: i64 = 4_102_444_800;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_LEN: u32 = 0x800;

macro_rules! impl_numeric {
    ($($t:ty),+) => {
        $(
            impl Infer for $t {
                fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
                    let (lo, hi) = <$t as Numeric>::arbitrary_bounds();
                    Ok(<$t as Numeric>::uniform_closed(cx.source(), lo, hi))
                }
            }
        )+
    };
}

impl_numeric!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

/// Real part drawn first, then the imaginary part.
macro_rules! impl_complex {
    ($($t:ty),+) => {
        $(
            impl Infer for Complex<$t> {
                fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
                    let (lo, hi) = <$t as Numeric>::arbitrary_bounds();
                    let re = <$t as Numeric>::uniform_closed(cx.source(), lo, hi);
                    let im = <$t as Numeric>::uniform_closed(cx.source(), lo, hi);
                    Ok(Complex::new(re, im))
                }
            }
        )+
    };
}

impl_complex!(f32, f64);

impl Infer for bool {
    fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
        Ok(cx.source().below(2) == 0)
    }
}

impl Infer for () {
    fn synthesize(_cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
        Ok(())
    }
}

/// Uniform Unicode scalar value, surrogates excluded.
fn scalar(src: &mut Source) -> char {
    let mut code = draw_u32(src, char::MAX as u32 - SURROGATE_LEN);
    if code >= SURROGATE_START {
        code += SURROGATE_LEN;
    }
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Infer for char {
    fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
        Ok(scalar(cx.source()))
    }
}

impl Infer for String {
    fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
        let max_len = cx.config().max_text_len;
        let src = cx.source();
        let len = src.below(max_len);
        Ok((0..len).map(|_| scalar(src)).collect())
    }
}

impl Infer for DateTime<Utc> {
    fn synthesize(cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
        let end = DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(YEAR_2100_SECS);
        Ok(time_between(DateTime::<Utc>::UNIX_EPOCH, end).generate_one(cx.source()))
    }
}

impl<T: Infer> Infer for Option<T> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        if cx.draw_count(budget) == 0 {
            return Ok(None);
        }
        cx.value::<T>(budget).map(Some)
    }
}

macro_rules! impl_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: Infer> Infer for $ptr<T> {
                fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
                    scan.field::<T>()
                }

                fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
                    cx.value::<T>(budget).map($ptr::new)
                }
            }
        )+
    };
}

impl_pointer!(Box, Rc, Arc);

/// Elements of a sequence share what is left after paying for its length.
fn sequence<T: Infer, C: FromIterator<T>>(
    cx: &mut Synthesis<'_>,
    budget: usize,
) -> Result<C, InferenceError> {
    let len = cx.draw_count(budget);
    let remaining = budget - len;
    (0..len).map(|_| cx.value::<T>(remaining)).collect()
}

impl<T: Infer> Infer for Vec<T> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        sequence(cx, budget)
    }
}

impl<T: Infer> Infer for VecDeque<T> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        sequence(cx, budget)
    }
}

impl<T: Infer, const N: usize> Infer for [T; N] {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        let elems = (0..N)
            .map(|_| cx.value::<T>(budget))
            .collect::<Result<Vec<T>, _>>()?;
        match elems.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("exactly {N} elements were generated"),
        }
    }
}

/// Keyed collections draw their entry count like a sequence, but every key
/// and value keeps the full budget. Duplicate keys collapse.
fn entries<K: Infer, V: Infer, C: FromIterator<(K, V)>>(
    cx: &mut Synthesis<'_>,
    budget: usize,
) -> Result<C, InferenceError> {
    let count = cx.draw_count(budget);
    (0..count)
        .map(|_| {
            let key = cx.value::<K>(budget)?;
            let value = cx.value::<V>(budget)?;
            Ok((key, value))
        })
        .collect()
}

fn members<T: Infer, C: FromIterator<T>>(
    cx: &mut Synthesis<'_>,
    budget: usize,
) -> Result<C, InferenceError> {
    let count = cx.draw_count(budget);
    (0..count).map(|_| cx.value::<T>(budget)).collect()
}

impl<K: Infer + Eq + Hash, V: Infer> Infer for HashMap<K, V> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<K>()?;
        scan.field::<V>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        entries(cx, budget)
    }
}

impl<K: Infer + Ord, V: Infer> Infer for BTreeMap<K, V> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<K>()?;
        scan.field::<V>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        entries(cx, budget)
    }
}

impl<T: Infer + Eq + Hash> Infer for HashSet<T> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        members(cx, budget)
    }
}

impl<T: Infer + Ord> Infer for BTreeSet<T> {
    fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
        scan.field::<T>()
    }

    fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
        members(cx, budget)
    }
}

macro_rules! impl_tuple {
    ($len:expr; $($T:ident),+) => {
        impl<$($T: Infer),+> Infer for ($($T,)+) {
            fn scan(scan: &mut Scan<'_>) -> Result<(), InferenceError> {
                $(scan.field::<$T>()?;)+
                Ok(())
            }

            fn synthesize(cx: &mut Synthesis<'_>, budget: usize) -> Result<Self, InferenceError> {
                let share = Synthesis::field_budget(budget, $len);
                Ok(($(cx.value::<$T>(share)?,)+))
            }
        }
    };
}

impl_tuple!(1; A);
impl_tuple!(2; A, B);
impl_tuple!(3; A, B, C);
impl_tuple!(4; A, B, C, D);
impl_tuple!(5; A, B, C, D, E);
impl_tuple!(6; A, B, C, D, E, F);
impl_tuple!(7; A, B, C, D, E, F, G);
impl_tuple!(8; A, B, C, D, E, F, G, H);
impl_tuple!(9; A, B, C, D, E, F, G, H, I);
impl_tuple!(10; A, B, C, D, E, F, G, H, I, J);
impl_tuple!(11; A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(12; A, B, C, D, E, F, G, H, I, J, K, L);
