//! Integer and real-number helpers

use std::ops::Neg;

use num_traits::PrimInt;
use oprs_core::{Integer, Real};

/// Wrap `val` into `[min, max)` as if indexing a ring buffer
/// `max` must exceed `min`
pub fn wrap_int<T: Integer>(val: T, max: T, min: T) -> T {
    let span = max - min;
    if val >= min {
        min + (val - min) % span
    } else {
        min + (span - (min - val) % span) % span
    }
}

/// Check if `b` divides `a`
#[inline]
pub fn divs<T: Integer>(a: T, b: T) -> bool {
    a % b == T::zero()
}

/// Successor
#[inline]
pub fn succ<T: Real>(a: T) -> T {
    a + T::one()
}

/// Predecessor
#[inline]
pub fn prev<T: Real>(a: T) -> T {
    a - T::one()
}

/// Number of subtractions of `den` needed to exhaust `num` (ceiling division)
pub fn remainders<T: Integer>(num: T, den: T) -> T {
    let count = num / den;
    if num % den != T::zero() {
        count + T::one()
    } else {
        count
    }
}

#[inline]
pub fn modulo<T: Integer>(a: T, b: T) -> T {
    a % b
}

/// Truncated modulus for any real type
pub fn fmod<R: Real>(value: R, modulus: R) -> R {
    let quotient = R::from_f64((value / modulus).as_f64().trunc());
    value - quotient * modulus
}

/// Terms from repeatedly taking `divisor` out of `value`, the last term
/// being whatever is left
pub fn subtractions<T: Real>(mut value: T, divisor: T) -> Vec<T> {
    if divisor == T::zero() {
        return vec![value];
    }
    let mut out = Vec::new();
    while value > T::zero() {
        if value >= divisor {
            out.push(divisor);
            value = value - divisor;
        } else {
            out.push(value);
            value = T::zero();
        }
    }
    out
}

#[inline]
pub fn neg<T: Neg<Output = T>>(a: T) -> T {
    -a
}

/// Shift operator bound to `value`
pub fn shifter<T: PrimInt>(value: T, left: bool) -> impl Fn(usize) -> T {
    move |distance| {
        if left {
            value << distance
        } else {
            value >> distance
        }
    }
}

/// Counter returning `seed`, then `seed + delta`, `seed + 2*delta`, ...
pub fn incrementer<T: Real>(seed: T, delta: T) -> impl FnMut() -> T {
    let mut next = seed;
    move || {
        let current = next;
        next = next + delta;
        current
    }
}

/// Convert between real types, exactly when possible and lossily otherwise
pub fn realf<I: Real, O: Real>(val: I) -> O {
    num_traits::cast::<I, O>(val).unwrap_or_else(|| O::from_f64(val.as_f64()))
}

/// Map `n` from `[min1, max1]` onto `[min2, max2]`
pub fn map_val<N: Real>(n: N, min1: N, max1: N, min2: N, max2: N) -> N {
    min2 + (max2 - min2) * ((n - min1) / (max1 - min1))
}

/// Reusable [`map_val`]
pub fn val_mapper<N: Real>(min1: N, max1: N, min2: N, max2: N) -> impl Fn(N) -> N {
    move |n| map_val(n, min1, max1, min2, max2)
}

#[inline]
pub fn abs<R: Real>(val: R) -> R {
    if val >= R::zero() {
        val
    } else {
        R::zero() - val
    }
}

/// Absolute difference, safe for unsigned types
#[inline]
pub fn diff<R: Real>(a: R, b: R) -> R {
    if a < b {
        b - a
    } else {
        a - b
    }
}

/// Greatest common divisor (Euclid); gcd(0, 0) == 0
pub fn gcd<T: Integer>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    abs(a)
}

/// Least common multiple; zero if either argument is zero
pub fn lcm<T: Integer>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    abs(a / gcd(a, b) * b)
}
