//! oprs Range - Arithmetic sequence generation
//!
//! This crate implements:
//! - Range descriptors with 1/2/3-argument dispatch (RangeArgs)
//! - Eager ranges (upto, must_upto)
//! - Lazy ranges on a producer thread with rendezvous handoff (uptoch)
//! - Async ranges on a tokio task (spawn_range)
//! - Sieve of Eratosthenes (eratosthenes, is_prime, gpf)

pub mod args;
pub mod producer;
pub mod range;
pub mod sieve;
pub mod step;
pub mod stream;

pub use args::*;
pub use producer::*;
pub use range::*;
pub use sieve::*;
pub use step::*;
pub use stream::*;
