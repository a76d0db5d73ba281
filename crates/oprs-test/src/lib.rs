//! oprs Test Harness - Fixtures and cross-crate checks
//!
//! This crate provides:
//! - Seeded random fixtures (randints, rand_sign, random range descriptors)
//! - Helpers comparing the eager, lazy and async range forms
//! - End-to-end tests across the oprs crates

pub mod fixtures;
pub mod integration;

pub use fixtures::*;
pub use integration::*;
