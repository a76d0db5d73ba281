//! Overflow-aware stepping for range generation
//!
//! The generation rule is "emit `start`, then `start += step`, while
//! `stop - step >= start`". For integers both operations may overflow;
//! the test is evaluated as if the arithmetic were unbounded, and an
//! advance that leaves the type ends the sequence.

use oprs_core::Real;

/// Numbers that can drive a range
pub trait Step: Real {
    /// `stop - step >= start`, without overflow
    fn admits(start: Self, stop: Self, step: Self) -> bool;

    /// `self + step`, or `None` if the result is not representable
    fn advance(self, step: Self) -> Option<Self>;
}

macro_rules! signed_step_impl {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn admits(start: Self, stop: Self, step: Self) -> bool {
                    match stop.checked_sub(step) {
                        Some(limit) => limit >= start,
                        // Overflowed past MAX only when step is negative
                        None => step < 0,
                    }
                }

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! unsigned_step_impl {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn admits(start: Self, stop: Self, step: Self) -> bool {
                    // Underflow means stop - step is negative
                    stop.checked_sub(step).is_some_and(|limit| limit >= start)
                }

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

macro_rules! float_step_impl {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline]
                fn admits(start: Self, stop: Self, step: Self) -> bool {
                    stop - step >= start
                }

                #[inline]
                fn advance(self, step: Self) -> Option<Self> {
                    Some(self + step)
                }
            }
        )*
    };
}

signed_step_impl!(i8, i16, i32, i64, i128, isize);
unsigned_step_impl!(u8, u16, u32, u64, u128, usize);
float_step_impl!(f32, f64);
