//! Numeric bounds shared by the generic helpers
//!
//! `Real` covers every primitive integer and float. Conversions through
//! `as_f64`/`from_f64` follow `as` semantics (truncating, saturating),
//! which is what the float wrappers in `oprs-math` rely on.

use std::fmt::Debug;

use num_traits::{Num, NumCast, PrimInt};

/// A primitive real number
pub trait Real: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Name of the concrete type, used in error messages
    const NAME: &'static str;

    /// Lossy conversion to f64
    fn as_f64(self) -> f64;

    /// Lossy conversion from f64 (truncates toward zero, saturates, NaN -> 0 for integers)
    fn from_f64(value: f64) -> Self;
}

/// A primitive integer
pub trait Integer: Real + PrimInt {}

macro_rules! real_impl {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

macro_rules! integer_impl {
    ($($t:ty),*) => {
        $(impl Integer for $t {})*
    };
}

real_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
integer_impl!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
