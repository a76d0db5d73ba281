//! f64 math lifted to every primitive number
//!
//! Each wrapper converts its argument with [`Real::as_f64`], applies the
//! f64 method and converts back with [`Real::from_f64`].

use oprs_core::Real;

macro_rules! unary {
    ($($(#[$meta:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<R: Real>(r: R) -> R {
                R::from_f64(r.as_f64().$method())
            }
        )*
    };
}

macro_rules! binary {
    ($($(#[$meta:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name<R: Real>(x: R, y: R) -> R {
                R::from_f64(x.as_f64().$method(y.as_f64()))
            }
        )*
    };
}

unary! {
    sin => sin;
    cos => cos;
    tan => tan;
    asin => asin;
    acos => acos;
    atan => atan;
    sinh => sinh;
    cosh => cosh;
    tanh => tanh;
    asinh => asinh;
    acosh => acosh;
    atanh => atanh;
    cbrt => cbrt;
    ceil => ceil;
    floor => floor;
    trunc => trunc;
    /// Round half away from zero
    round => round;
    exp => exp;
    exp2 => exp2;
    /// e^r - 1, accurate near zero
    exp_m1 => exp_m1;
    /// Natural logarithm
    ln => ln;
    log10 => log10;
    log2 => log2;
    /// ln(1 + r), accurate near zero
    ln_1p => ln_1p;
    sqrt => sqrt;
}

binary! {
    atan2 => atan2;
    copysign => copysign;
    hypot => hypot;
    pow => powf;
}

/// Round half to even
pub fn round_to_even<R: Real>(r: R) -> R {
    let x = r.as_f64();
    let rounded = if (x - x.trunc()).abs() == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        x.round()
    };
    R::from_f64(rounded)
}

/// 10^r
pub fn pow10<R: Real>(r: R) -> R {
    R::from_f64(10f64.powf(r.as_f64()))
}

/// Positive difference, max(x - y, 0)
pub fn dim<R: Real>(x: R, y: R) -> R {
    if x > y {
        x - y
    } else {
        R::zero()
    }
}

pub fn max<R: Real>(x: R, y: R) -> R {
    if y > x {
        y
    } else {
        x
    }
}

pub fn min<R: Real>(x: R, y: R) -> R {
    if y < x {
        y
    } else {
        x
    }
}

/// x * y + z with a single rounding
pub fn fma<R: Real>(x: R, y: R, z: R) -> R {
    R::from_f64(x.as_f64().mul_add(y.as_f64(), z.as_f64()))
}

/// IEEE 754 remainder: x - n*y where n is x/y rounded half to even
pub fn remainder<R: Real>(x: R, y: R) -> R {
    let (x, y) = (x.as_f64(), y.as_f64());
    let n: f64 = round_to_even(x / y);
    R::from_f64(x - n * y)
}

pub fn signbit<R: Real>(r: R) -> bool {
    r.as_f64().is_sign_negative()
}

pub fn is_nan<R: Real>(r: R) -> bool {
    r.as_f64().is_nan()
}

/// Infinity check: `sign > 0` matches +inf only, `sign < 0` -inf only,
/// zero matches either
pub fn is_inf<R: Real>(r: R, sign: i32) -> bool {
    let x = r.as_f64();
    (sign >= 0 && x == f64::INFINITY) || (sign <= 0 && x == f64::NEG_INFINITY)
}

/// Infinity with the sign of `sign`; saturates to MAX/MIN for integers
pub fn inf<R: Real>(sign: i32) -> R {
    if sign >= 0 {
        R::from_f64(f64::INFINITY)
    } else {
        R::from_f64(f64::NEG_INFINITY)
    }
}

/// NaN; zero for integers
pub fn nan<R: Real>() -> R {
    R::from_f64(f64::NAN)
}

/// Split into a fraction in `[0.5, 1)` and a power of two
pub fn frexp<R: Real>(r: R) -> (f64, i32) {
    let x = r.as_f64();
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let (x, bias) = if x.abs() < f64::MIN_POSITIVE {
        (x * 2f64.powi(54), -54)
    } else {
        (x, 0)
    };
    let bits = x.to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32 - 1022;
    let frac = f64::from_bits((bits & !(0x7ff << 52)) | (1022 << 52));
    (frac, exp + bias)
}

/// frac * 2^exp
pub fn ldexp<R: Real>(frac: R, exp: i32) -> R {
    let x = frac.as_f64();
    let half = exp / 2;
    R::from_f64(x * 2f64.powi(half) * 2f64.powi(exp - half))
}

/// Integral and fractional parts, both carrying the sign of `r`
pub fn modf<R: Real>(r: R) -> (R, R) {
    let x = r.as_f64();
    (R::from_f64(x.trunc()), R::from_f64(x.fract()))
}

/// Binary exponent of `r`, so that `r = m * 2^logb(r)` with `1 <= |m| < 2`
pub fn logb<R: Real>(r: R) -> R {
    let x = r.as_f64();
    let e = if x == 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else if x.is_nan() {
        x
    } else {
        f64::from(frexp(x).1 - 1)
    };
    R::from_f64(e)
}

/// [`logb`] as an integer; zero gives `i32::MIN`, infinities and NaN `i32::MAX`
pub fn ilogb<R: Real>(r: R) -> i32 {
    let x = r.as_f64();
    if x == 0.0 {
        i32::MIN
    } else if !x.is_finite() {
        i32::MAX
    } else {
        frexp(x).1 - 1
    }
}

/// Next representable f64 after `x` in the direction of `y`
pub fn nextafter(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == y {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1).copysign(y);
    }
    let bits = x.to_bits();
    if (y > x) == (x > 0.0) {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}
