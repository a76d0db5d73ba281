//! Random fixtures
//!
//! Everything takes an explicit RNG so failures replay from a seed.

use oprs_range::RangeArgs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rounds per randomized test
pub const N_TESTS: usize = 100;

/// Length of generated vectors
pub const N_ITEMS: usize = 64;

/// Magnitude bound for generated integers
pub const N_MAX: i64 = 1_000;

/// Deterministic RNG for a test
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` integers drawn uniformly from `[-max, max]`
pub fn randints<R: Rng>(rng: &mut R, n: usize, max: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(-max..=max)).collect()
}

/// 1 or -1 with equal odds
pub fn rand_sign<R: Rng>(rng: &mut R) -> i64 {
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}

/// A terminating range descriptor
///
/// The step is always positive: under the upto rule a negative step either
/// yields nothing or runs to the type's bound.
pub fn rand_range_args<R: Rng>(rng: &mut R, max: i64) -> RangeArgs<i64> {
    let start = rng.gen_range(-max..=max);
    let stop = rng.gen_range(-max..=max);
    let step = rng.gen_range(1..=max.max(1) / 10 + 1);
    RangeArgs::new(start, stop, step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_randints_bounds() {
        let mut rng = seeded(7);
        let values = randints(&mut rng, N_ITEMS, N_MAX);
        assert_eq!(values.len(), N_ITEMS);
        assert!(values.iter().all(|v| (-N_MAX..=N_MAX).contains(v)));
    }

    #[test]
    fn test_rand_sign_takes_both_values() {
        let mut rng = seeded(11);
        let signs: Vec<i64> = (0..N_TESTS).map(|_| rand_sign(&mut rng)).collect();
        assert!(signs.iter().all(|s| *s == 1 || *s == -1));
        assert!(signs.contains(&1) && signs.contains(&-1));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = randints(&mut seeded(3), 8, N_MAX);
        let b = randints(&mut seeded(3), 8, N_MAX);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rand_range_args_terminate() {
        let mut rng = seeded(5);
        for _ in 0..N_TESTS {
            let args = rand_range_args(&mut rng, N_MAX);
            assert!(args.step > 0);
            let span = (args.stop - args.start).unsigned_abs();
            assert!(args.iter().count() as u64 <= span + 1);
        }
    }
}
