//! Sieve of Eratosthenes over any [`Step`] type
//!
//! Candidates are the range `(2, limit, 1)`, so `eratosthenes(limit)`
//! yields the primes strictly below `limit`. Float limits work on their
//! integral values.

use oprs_core::OprsResult;
use tracing::trace;

use crate::{Producer, ProducerConfig, RangeArgs, Step, Upto};

/// Candidates held per window by [`SegmentedSieve`]
const SEGMENT_LEN: usize = 1 << 15;

/// Incremental sieve; yields primes in ascending order as they are found
/// All candidates are materialized up front, so the limit must be small
/// enough to fit in memory. [`SegmentedSieve`] has no such bound.
#[derive(Clone, Debug)]
pub struct Sieve<T> {
    /// candidates[i] == 2 + i
    candidates: Vec<T>,
    composite: Vec<bool>,
    index: usize,
}

impl<T: Step> Sieve<T> {
    /// Primes strictly below `limit`
    pub fn below(limit: T) -> Self {
        let two = T::one() + T::one();
        Self::from_candidates(RangeArgs::new(two, limit, T::one()).iter().collect())
    }

    /// Primes up to and including `bound` (expected to be integral)
    pub fn through(bound: T) -> Self {
        let two = T::one() + T::one();
        let mut candidates: Vec<T> = RangeArgs::new(two, bound, T::one()).iter().collect();
        if bound >= two {
            candidates.push(bound);
        }
        Self::from_candidates(candidates)
    }

    fn from_candidates(candidates: Vec<T>) -> Self {
        let composite = vec![false; candidates.len()];
        Sieve {
            candidates,
            composite,
            index: 0,
        }
    }
}

impl<T: Step> Iterator for Sieve<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.index < self.candidates.len() {
            let i = self.index;
            self.index += 1;
            if self.composite[i] {
                continue;
            }

            let p = i + 2;
            // First unmarked multiple is p*p, at index p*p - 2
            if let Some(first) = p.checked_mul(p) {
                for j in (first - 2..self.candidates.len()).step_by(p) {
                    self.composite[j] = true;
                }
            }
            return Some(self.candidates[i]);
        }
        None
    }
}

/// Sieve that pulls candidates in fixed windows
///
/// Memory stays at one window plus the primes whose squares do not
/// exceed the limit, so the first prime is ready without touching the
/// rest of the range.
#[derive(Clone, Debug)]
pub struct SegmentedSieve<T> {
    values: Upto<T>,
    /// Primes still able to strike a later window, ascending
    base: Vec<usize>,
    base_bound: f64,
    window: Vec<T>,
    composite: Vec<bool>,
    /// Integral value of window[0]
    lo: usize,
    pos: usize,
}

impl<T: Step> SegmentedSieve<T> {
    /// Primes strictly below `limit`
    pub fn below(limit: T) -> Self {
        let two = T::one() + T::one();
        SegmentedSieve {
            values: RangeArgs::new(two, limit, T::one()).iter(),
            base: Vec::new(),
            base_bound: limit.as_f64(),
            window: Vec::with_capacity(SEGMENT_LEN),
            composite: Vec::with_capacity(SEGMENT_LEN),
            lo: 2,
            pos: 0,
        }
    }

    /// Load the next window and strike it with the known primes
    fn refill(&mut self) -> bool {
        self.lo += self.window.len();
        self.window.clear();
        self.window.extend(self.values.by_ref().take(SEGMENT_LEN));
        if self.window.is_empty() {
            return false;
        }

        let len = self.window.len();
        let hi = self.lo + len;
        self.composite.clear();
        self.composite.resize(len, false);
        for &p in &self.base {
            // Stored primes always have a representable square
            let square = p * p;
            if square >= hi {
                break;
            }
            let first = square.max(self.lo.div_ceil(p) * p);
            for j in (first - self.lo..len).step_by(p) {
                self.composite[j] = true;
            }
        }
        self.pos = 0;
        trace!(lo = self.lo, hi, "sieve window loaded");
        true
    }
}

impl<T: Step> Iterator for SegmentedSieve<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            while self.pos < self.window.len() {
                let i = self.pos;
                self.pos += 1;
                if self.composite[i] {
                    continue;
                }

                let p = self.lo + i;
                if let Some(square) = p.checked_mul(p) {
                    let hi = self.lo + self.window.len();
                    if square < hi {
                        for j in (square - self.lo..self.window.len()).step_by(p) {
                            self.composite[j] = true;
                        }
                    }
                    if (square as f64) < self.base_bound {
                        self.base.push(p);
                    }
                }
                return Some(self.window[i]);
            }
            if !self.refill() {
                return None;
            }
        }
    }
}

/// Primes strictly below `limit`
pub fn eratosthenes<T: Step>(limit: T) -> Vec<T> {
    Sieve::below(limit).collect()
}

/// Primes strictly below `limit`, produced lazily on a producer thread
/// The producer sieves one window at a time, so huge limits are fine
pub fn eratosthenes_lazy<T: Step>(limit: T) -> OprsResult<Producer<T>> {
    Producer::spawn(ProducerConfig::named("oprs-sieve"), move |out| {
        for prime in SegmentedSieve::below(limit) {
            trace!(?prime, "sieve yielded prime");
            if !out.offer(prime) {
                return;
            }
        }
    })
}

fn is_integral<T: Step>(n: T) -> bool {
    n % T::one() == T::zero()
}

/// Largest integral value whose square does not exceed `n`
/// Exact while `n` fits in an f64 mantissa
fn isqrt<T: Step>(n: T) -> T {
    T::from_f64(n.as_f64().sqrt().floor())
}

/// Check if `n` is prime
pub fn is_prime<T: Step>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two || !is_integral(n) {
        return false;
    }
    Sieve::through(isqrt(n)).all(|p| n % p != T::zero())
}

/// Greatest prime factor of `n`, or `None` when `n < 2` or not integral
pub fn gpf<T: Step>(n: T) -> Option<T> {
    let two = T::one() + T::one();
    if n < two || !is_integral(n) {
        return None;
    }

    let mut rest = n;
    let mut largest = None;
    for p in Sieve::through(isqrt(n)) {
        if p * p > rest {
            break;
        }
        while rest % p == T::zero() {
            rest = rest / p;
            largest = Some(p);
        }
    }
    // Whatever remains has no factor <= its square root
    if rest > T::one() {
        largest = Some(rest);
    }
    largest
}
