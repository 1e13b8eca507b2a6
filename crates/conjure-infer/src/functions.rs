//! Function pointers carry no data to synthesize; they can only be supplied
//! through an override.

use crate::error::InferenceError;
use crate::infer::Infer;
use crate::synthesis::{Scan, Synthesis};
use std::any::{type_name, TypeId};

/// Short name of a parameter or return type, or `any` for structural types
/// such as tuples, slices and generic instantiations.
fn short_name<T: 'static>() -> &'static str {
    let full = type_name::<T>();
    if full.contains(['<', '(', '[', '&', '*', ' ']) {
        return "any";
    }
    full.rsplit("::").next().unwrap_or(full)
}

/// `(A, B) => (R)`; a unit return renders as `()`.
fn signature(inputs: &[&str], output: Option<&str>) -> String {
    format!("({}) => ({})", inputs.join(", "), output.unwrap_or_default())
}

fn output_name<R: 'static>() -> Option<&'static str> {
    if TypeId::of::<R>() == TypeId::of::<()>() {
        None
    } else {
        Some(short_name::<R>())
    }
}

fn not_inferrable<F: 'static>(inputs: &[&str], output: Option<&str>) -> InferenceError {
    InferenceError::NotInferrable {
        type_name: type_name::<F>(),
        signature: Some(signature(inputs, output)),
    }
}

macro_rules! impl_fn {
    ($($A:ident),*) => {
        impl<R: 'static, $($A: 'static),*> Infer for fn($($A),*) -> R {
            fn scan(_scan: &mut Scan<'_>) -> Result<(), InferenceError> {
                Err(not_inferrable::<Self>(&[$(short_name::<$A>()),*], output_name::<R>()))
            }

            fn synthesize(_cx: &mut Synthesis<'_>, _budget: usize) -> Result<Self, InferenceError> {
                Err(not_inferrable::<Self>(&[$(short_name::<$A>()),*], output_name::<R>()))
            }
        }
    };
}

impl_fn!();
impl_fn!(A);
impl_fn!(A, B);
impl_fn!(A, B, C);
impl_fn!(A, B, C, D);
impl_fn!(A, B, C, D, E);
impl_fn!(A, B, C, D, E, F);
