//! oprs Math - Generic numeric functions
//!
//! This crate provides:
//! - Integer and real helpers (gcd, wrap_int, map_val, incrementer, ...)
//! - f64 math wrappers usable with any primitive number
//! - Special functions (erf, gamma)
//! - Complex64 and its elementary functions
//!
//! Float wrappers compute in f64 and convert back with `as` semantics,
//! so `sqrt(10u32) == 3`.

pub mod complex;
pub mod float;
pub mod real;
pub mod special;

pub use float::*;
pub use real::*;
pub use special::*;
