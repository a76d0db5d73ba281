//! Range descriptors
//!
//! Argument-count dispatch:
//!
//! | args | meaning |
//! |------|---------|
//! | 1    | (0, stop, 1) |
//! | 2    | (start, stop, 1) |
//! | 3    | (start, stop, step) |
//! | else | arity error |

use std::iter::FusedIterator;

use oprs_core::{OprsError, OprsResult};

use crate::Step;

/// A (start, stop, step) triple
///
/// The sign of `step` is not checked against the order of `start` and
/// `stop`. A contradictory descriptor yields whatever the generation rule
/// yields: usually nothing, and for `step <= 0` with `start < stop` a
/// sequence that only ends at the type's bound (integers) or never (floats).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeArgs<T> {
    pub start: T,
    pub stop: T,
    pub step: T,
}

impl<T: Step> RangeArgs<T> {
    pub fn new(start: T, stop: T, step: T) -> Self {
        RangeArgs { start, stop, step }
    }

    /// Dispatch on the number of arguments
    pub fn from_args(args: &[T]) -> OprsResult<Self> {
        match *args {
            [stop] => Ok(Self::new(T::zero(), stop, T::one())),
            [start, stop] => Ok(Self::new(start, stop, T::one())),
            [start, stop, step] => Ok(Self::new(start, stop, step)),
            _ => Err(OprsError::arity(args.len())),
        }
    }

    /// Iterate the sequence on the calling thread
    pub fn iter(&self) -> Upto<T> {
        Upto {
            next: Some(self.start),
            stop: self.stop,
            step: self.step,
        }
    }
}

impl<T: Step> IntoIterator for RangeArgs<T> {
    type Item = T;
    type IntoIter = Upto<T>;

    fn into_iter(self) -> Upto<T> {
        self.iter()
    }
}

/// Synchronous iterator over a [`RangeArgs`]
#[derive(Clone, Debug)]
pub struct Upto<T> {
    /// Next candidate, `None` once exhausted
    next: Option<T>,
    stop: T,
    step: T,
}

impl<T: Step> Iterator for Upto<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.next?;
        if !T::admits(current, self.stop, self.step) {
            self.next = None;
            return None;
        }
        self.next = current.advance(self.step);
        Some(current)
    }
}

impl<T: Step> FusedIterator for Upto<T> {}
