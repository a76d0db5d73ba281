//! Eager and lazy range entry points
//!
//! Each form has a fallible variant returning [`OprsResult`] and a `must_`
//! variant that panics on an arity error, for call sites that have already
//! validated their argument count.

use oprs_core::OprsResult;

use crate::{Producer, ProducerConfig, RangeArgs, Step};

/// Materialize the range described by `args`
///
/// ```
/// use oprs_range::upto;
///
/// assert_eq!(upto(&[5]).unwrap(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(upto(&[2, 5]).unwrap(), vec![2, 3, 4]);
/// assert_eq!(upto(&[2, 8, 2]).unwrap(), vec![2, 4, 6]);
/// assert!(upto::<i32>(&[]).is_err());
/// ```
pub fn upto<T: Step>(args: &[T]) -> OprsResult<Vec<T>> {
    Ok(RangeArgs::from_args(args)?.iter().collect())
}

/// Like [`upto`], panicking on a bad argument count
pub fn must_upto<T: Step>(args: &[T]) -> Vec<T> {
    upto(args).unwrap_or_else(|e| panic!("{e}"))
}

/// Produce the range described by `args` lazily on a producer thread
pub fn uptoch<T: Step>(args: &[T]) -> OprsResult<Producer<T>> {
    uptoch_with(ProducerConfig::default(), args)
}

/// Like [`uptoch`] with an explicit producer configuration
pub fn uptoch_with<T: Step>(config: ProducerConfig, args: &[T]) -> OprsResult<Producer<T>> {
    let range = RangeArgs::from_args(args)?;
    Producer::spawn(config, move |out| {
        for value in range.iter() {
            if !out.offer(value) {
                return;
            }
        }
    })
}

/// Like [`uptoch`], panicking on a bad argument count
pub fn must_uptoch<T: Step>(args: &[T]) -> Producer<T> {
    uptoch(args).unwrap_or_else(|e| panic!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oprs_core::OprsError;
    use proptest::prelude::*;

    #[test]
    fn test_upto_cases() {
        assert_eq!(upto(&[5]), Ok(vec![0, 1, 2, 3, 4]));
        assert_eq!(upto(&[2, 5]), Ok(vec![2, 3, 4]));
        assert_eq!(upto(&[2, 8, 2]), Ok(vec![2, 4, 6]));
        assert_eq!(upto(&[0.0, 1.0, 0.25]), Ok(vec![0.0, 0.25, 0.5, 0.75]));
    }

    #[test]
    fn test_upto_arity_errors() {
        let empty: [i64; 0] = [];
        assert_eq!(upto(&empty), Err(OprsError::arity(0)));
        assert_eq!(upto(&[1, 2, 3, 4]), Err(OprsError::arity(4)));
    }

    #[test]
    fn test_upto_empty_ranges() {
        assert_eq!(upto(&[0u32]), Ok(vec![]));
        assert_eq!(upto(&[5, 5]), Ok(vec![]));
        assert_eq!(upto(&[10, 0, -1]), Ok(vec![]));
    }

    #[test]
    #[should_panic(expected = "too many args (5)")]
    fn test_must_upto_panics() {
        must_upto(&[1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "not enough args (0)")]
    fn test_must_uptoch_panics() {
        let empty: [u8; 0] = [];
        must_uptoch(&empty);
    }

    #[test]
    fn test_uptoch_arity_error_is_synchronous() {
        let err = uptoch(&[1, 2, 3, 4]).unwrap_err();
        assert!(err.is_arity());
    }

    #[test]
    fn test_uptoch_matches_upto() {
        let lazy: Vec<i32> = must_uptoch(&[2, 8, 2]).collect();
        assert_eq!(lazy, must_upto(&[2, 8, 2]));
    }

    #[test]
    fn test_uptoch_early_abandonment() {
        // Non-terminating float descriptor: only lazy consumption is possible
        let mut lazy = must_uptoch(&[0.0f64, 10.0, 0.0]);
        assert_eq!(lazy.by_ref().take(3).collect::<Vec<_>>(), vec![0.0; 3]);
        lazy.cancel();
        assert_eq!(lazy.next(), None);
    }

    #[test]
    fn test_uptoch_with_config() {
        let lazy = uptoch_with(ProducerConfig::named("squares"), &[3u16]).unwrap();
        assert_eq!(lazy.name(), "squares");
        assert_eq!(lazy.map(|v| v * v).collect::<Vec<_>>(), vec![0, 1, 4]);
    }

    proptest! {
        #[test]
        fn prop_lazy_equals_eager(start in -50i32..50, stop in -50i32..50, step in 1i32..7) {
            let eager = must_upto(&[start, stop, step]);
            let lazy: Vec<i32> = must_uptoch(&[start, stop, step]).collect();
            prop_assert_eq!(&lazy, &eager);
            // No hidden state between calls
            prop_assert_eq!(must_upto(&[start, stop, step]), eager);
        }

        #[test]
        fn prop_last_value_bound(start in -50i64..50, stop in -50i64..50, step in 1i64..7) {
            let values = must_upto(&[start, stop, step]);
            for pair in values.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], step);
            }
            if let Some(&last) = values.last() {
                prop_assert!(last <= stop - step);
                prop_assert!(last + step > stop - step);
            }
        }
    }
}
