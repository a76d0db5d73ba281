//! oprs Memory - Capacity-bounded sequences and zero-value helpers
//!
//! This crate implements:
//! - BoundedSeq: a sequence whose capacity is fixed at allocation
//! - Bounded transfer (capy, move_slice, drain_into, capy_within)
//! - Zero-value replacement (denull)
//! - Bit helpers (size_of_bits, msb, lsb)

pub mod bits;
pub mod bounded;
pub mod transfer;
pub mod zero;

pub use bits::*;
pub use bounded::*;
pub use transfer::*;
pub use zero::*;
