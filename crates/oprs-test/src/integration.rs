//! Cross-crate checks
//!
//! Helpers comparing the three ways of producing a range, and an
//! end-to-end suite wiring ranges through transfer, predicates, math,
//! parsing and printing.

use oprs_core::OprsResult;
use oprs_memory::{capy, BoundedSeq};
use oprs_range::{is_prime, spawn_range, upto, uptoch, Step};

/// Check that the lazy producer yields exactly the eager range
pub fn lazy_matches_eager<T: Step>(args: &[T]) -> OprsResult<bool> {
    let eager = upto(args)?;
    let lazy: Vec<T> = uptoch(args)?.collect();
    Ok(eager == lazy)
}

/// Check that the async stream yields exactly the eager range
///
/// Must be awaited inside a tokio runtime.
pub async fn stream_matches_eager<T: Step>(args: &[T]) -> OprsResult<bool> {
    let eager = upto(args)?;
    let streamed = spawn_range(args)?.collect().await;
    Ok(eager == streamed)
}

/// First `capacity` values of a range, copied into a bounded sequence
pub fn bounded_prefix<T: Step>(args: &[T], capacity: usize) -> OprsResult<BoundedSeq<T>> {
    let mut dst = BoundedSeq::new(capacity);
    capy(&mut dst, &upto(args)?);
    Ok(dst)
}

/// Primes below `limit` by trial division, independent of the sieve
pub fn primes_by_trial(limit: u64) -> Vec<u64> {
    (2..limit).filter(|n| is_prime(*n)).collect()
}
