//! oprs Core - Fundamental traits and primitives
//!
//! This crate defines the pieces shared by every other oprs crate:
//! - Numeric bounds (Real, Integer)
//! - Operator wrappers for the arithmetic and comparison operators
//! - Boxed closure aliases (Op, BinOp, Pred, ...)
//! - Error taxonomy

pub mod error;
pub mod num;
pub mod ops;
pub mod types;

pub use error::*;
pub use num::*;
pub use ops::*;
pub use types::*;
