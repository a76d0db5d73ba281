//! oprs Func - Function combinators
//!
//! This crate provides:
//! - Boolean algebra over predicates (not, both, either, all, any, one, ...)
//! - Partial application and currying (bind, method, curry_l, flip, pipe, ...)
//! - Ready-made predicates (is_even, is, isnt, ...)
//! - Casting helpers between primitive types

pub mod bind;
pub mod casting;
pub mod filters;
pub mod logic;

pub use bind::*;
pub use casting::*;
pub use filters::*;
pub use logic::*;
