//! Individual primitive generators.
//!
//! Each module provides one constructor function plus the generator type it
//! returns.

pub mod constant;
pub mod numeric;
pub mod one_of;
pub mod sequential;
pub mod string;
pub mod timestamp;
