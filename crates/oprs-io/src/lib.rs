//! oprs IO - Printing and parsing helpers
//!
//! This crate provides:
//! - `Printer`: print/println/printf over a shared writer, plus closure factories
//! - Radix-aware integer parsing checked against the target type
//! - Float parsing

pub mod parse;
pub mod printer;

pub use parse::*;
pub use printer::*;
