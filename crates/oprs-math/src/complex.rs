//! Complex arithmetic
//!
//! [`Complex64`] carries the arithmetic operators; the free functions
//! mirror the real wrappers in [`crate::float`] and accept any [`Real`]
//! where a real argument is expected.

use std::f64::consts::{FRAC_PI_2, LN_10};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use oprs_core::Real;

/// Complex number with f64 real and imaginary parts
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline]
    pub fn abs_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    #[inline]
    pub fn inv(self) -> Self {
        let d = self.abs_sq();
        Self {
            re: self.re / d,
            im: -self.im / d,
        }
    }

    /// Multiply by i
    #[inline]
    fn rotate(self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }
}

impl Add for Complex64 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl AddAssign for Complex64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl Sub for Complex64 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl SubAssign for Complex64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl Mul for Complex64 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl MulAssign for Complex64 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Complex64 {
    type Output = Self;
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl Neg for Complex64 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl fmt::Display for Complex64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// Lift any real into the complex plane
pub fn to_complex<R: Real>(r: R) -> Complex64 {
    Complex64::new(r.as_f64(), 0.0)
}

pub fn real<R: Real>(z: Complex64) -> R {
    R::from_f64(z.re)
}

pub fn imag<R: Real>(z: Complex64) -> R {
    R::from_f64(z.im)
}

/// Modulus
pub fn abs<R: Real>(z: Complex64) -> R {
    R::from_f64(z.abs())
}

/// Argument in (-pi, pi]
pub fn phase<R: Real>(z: Complex64) -> R {
    R::from_f64(z.arg())
}

/// Modulus and argument
pub fn polar<R: Real>(z: Complex64) -> (R, R) {
    (abs(z), phase(z))
}

/// Complex number from modulus and argument
pub fn rect<R: Real>(r: R, theta: R) -> Complex64 {
    let (r, theta) = (r.as_f64(), theta.as_f64());
    Complex64::new(r * theta.cos(), r * theta.sin())
}

pub fn conj(z: Complex64) -> Complex64 {
    z.conj()
}

pub fn exp(z: Complex64) -> Complex64 {
    let r = z.re.exp();
    Complex64::new(r * z.im.cos(), r * z.im.sin())
}

/// Principal natural logarithm
pub fn ln(z: Complex64) -> Complex64 {
    Complex64::new(z.abs().ln(), z.arg())
}

pub fn log10(z: Complex64) -> Complex64 {
    ln(z).scale(1.0 / LN_10)
}

/// Principal square root; the imaginary part keeps the sign of `z.im`
pub fn sqrt(z: Complex64) -> Complex64 {
    if z == Complex64::ZERO {
        return Complex64::ZERO;
    }
    let r = z.abs();
    let re = ((r + z.re) / 2.0).sqrt();
    let im = ((r - z.re) / 2.0).sqrt();
    if z.im.is_sign_negative() {
        Complex64::new(re, -im)
    } else {
        Complex64::new(re, im)
    }
}

/// x^y; 0^0 is 1 and 0^y is 0 for any other y with a positive real part
pub fn pow(x: Complex64, y: Complex64) -> Complex64 {
    if x == Complex64::ZERO {
        if y == Complex64::ZERO {
            return Complex64::ONE;
        }
        if y.re < 0.0 {
            return inf();
        }
        if y.re > 0.0 {
            return Complex64::ZERO;
        }
        return nan();
    }
    exp(y * ln(x))
}

pub fn sin(z: Complex64) -> Complex64 {
    Complex64::new(z.re.sin() * z.im.cosh(), z.re.cos() * z.im.sinh())
}

pub fn cos(z: Complex64) -> Complex64 {
    Complex64::new(z.re.cos() * z.im.cosh(), -z.re.sin() * z.im.sinh())
}

pub fn tan(z: Complex64) -> Complex64 {
    sin(z) / cos(z)
}

pub fn cot(z: Complex64) -> Complex64 {
    cos(z) / sin(z)
}

pub fn sinh(z: Complex64) -> Complex64 {
    Complex64::new(z.re.sinh() * z.im.cos(), z.re.cosh() * z.im.sin())
}

pub fn cosh(z: Complex64) -> Complex64 {
    Complex64::new(z.re.cosh() * z.im.cos(), z.re.sinh() * z.im.sin())
}

pub fn tanh(z: Complex64) -> Complex64 {
    sinh(z) / cosh(z)
}

/// asin z = -i ln(iz + sqrt(1 - z^2))
pub fn asin(z: Complex64) -> Complex64 {
    let root = sqrt(Complex64::ONE - z * z);
    -ln(z.rotate() + root).rotate()
}

pub fn acos(z: Complex64) -> Complex64 {
    Complex64::from(FRAC_PI_2) - asin(z)
}

/// atan z = (i/2) (ln(1 - iz) - ln(1 + iz))
pub fn atan(z: Complex64) -> Complex64 {
    let iz = z.rotate();
    (ln(Complex64::ONE - iz) - ln(Complex64::ONE + iz))
        .rotate()
        .scale(0.5)
}

pub fn asinh(z: Complex64) -> Complex64 {
    ln(z + sqrt(z * z + Complex64::ONE))
}

pub fn acosh(z: Complex64) -> Complex64 {
    ln(z + sqrt(z + Complex64::ONE) * sqrt(z - Complex64::ONE))
}

pub fn atanh(z: Complex64) -> Complex64 {
    (ln(Complex64::ONE + z) - ln(Complex64::ONE - z)).scale(0.5)
}

/// Complex infinity
pub fn inf() -> Complex64 {
    Complex64::new(f64::INFINITY, f64::INFINITY)
}

pub fn nan() -> Complex64 {
    Complex64::new(f64::NAN, f64::NAN)
}

/// Either component is infinite
pub fn is_inf(z: Complex64) -> bool {
    z.re.is_infinite() || z.im.is_infinite()
}

/// Some component is NaN and neither is infinite
pub fn is_nan(z: Complex64) -> bool {
    (z.re.is_nan() || z.im.is_nan()) && !is_inf(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{LN_2, PI};

    fn close(a: Complex64, b: Complex64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_arithmetic() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -1.0);
        assert_eq!(a + b, Complex64::new(4.0, 1.0));
        assert_eq!(a - b, Complex64::new(-2.0, 3.0));
        assert_eq!(a * b, Complex64::new(5.0, 5.0));
        assert!(close(a / b * b, a));
        assert_eq!(-a, Complex64::new(-1.0, -2.0));
        assert_eq!(Complex64::I * Complex64::I, -Complex64::ONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex64::new(1.0, 2.0).to_string(), "(1+2i)");
        assert_eq!(Complex64::new(1.5, -2.0).to_string(), "(1.5-2i)");
    }

    #[test]
    fn test_parts_and_polar() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(real::<i32>(z), 3);
        assert_eq!(imag::<f32>(z), 4.0);
        assert_eq!(abs::<f64>(z), 5.0);
        assert_eq!(abs::<u8>(z), 5);
        assert!((phase::<f64>(Complex64::I) - PI / 2.0).abs() < 1e-12);

        let (r, theta): (f64, f64) = polar(z);
        assert!(close(rect(r, theta), z));
        assert_eq!(to_complex(7u8), Complex64::new(7.0, 0.0));
        assert_eq!(conj(z), Complex64::new(3.0, -4.0));
    }

    #[test]
    fn test_euler() {
        assert!(close(exp(Complex64::new(0.0, PI)), -Complex64::ONE));
        assert!(close(ln(Complex64::new(-1.0, 0.0)), Complex64::new(0.0, PI)));
        assert!(close(log10(Complex64::from(1000.0)), Complex64::from(3.0)));
    }

    #[test]
    fn test_ln_branch_cut_sign() {
        // Negating ONE yields im == -0.0, which lands below the cut
        assert!(close(ln(-Complex64::ONE), Complex64::new(0.0, -PI)));
        assert!(close(ln(Complex64::new(-1.0, -0.0)), Complex64::new(0.0, -PI)));
        assert!(close(ln(Complex64::new(-2.0, 0.0)), Complex64::new(LN_2, PI)));
    }

    #[test]
    fn test_sqrt_branch() {
        assert_eq!(sqrt(Complex64::from(-4.0)), Complex64::new(0.0, 2.0));
        assert_eq!(sqrt(Complex64::new(-4.0, -0.0)), Complex64::new(0.0, -2.0));
        assert_eq!(sqrt(Complex64::ZERO), Complex64::ZERO);
        let z = Complex64::new(-3.0, 4.0);
        assert!(close(sqrt(z) * sqrt(z), z));
    }

    #[test]
    fn test_pow() {
        assert!(close(pow(Complex64::I, Complex64::from(2.0)), -Complex64::ONE));
        assert_eq!(pow(Complex64::ZERO, Complex64::ZERO), Complex64::ONE);
        assert_eq!(pow(Complex64::ZERO, Complex64::from(2.0)), Complex64::ZERO);
        assert!(is_inf(pow(Complex64::ZERO, Complex64::from(-1.0))));
        assert!(is_nan(pow(Complex64::ZERO, Complex64::I)));
    }

    #[test]
    fn test_trig_identities() {
        let z = Complex64::new(0.3, -0.7);
        let s = sin(z);
        let c = cos(z);
        assert!(close(s * s + c * c, Complex64::ONE));
        assert!(close(tan(z) * cot(z), Complex64::ONE));

        let ch = cosh(z);
        let sh = sinh(z);
        assert!(close(ch * ch - sh * sh, Complex64::ONE));
        assert!(close(tanh(z), sh / ch));
    }

    #[test]
    fn test_classification() {
        assert!(is_inf(inf()));
        assert!(!is_nan(inf()));
        assert!(is_nan(nan()));
        assert!(is_inf(Complex64::new(f64::NAN, f64::NEG_INFINITY)));
        assert!(!is_nan(Complex64::new(f64::NAN, f64::INFINITY)));
    }

    proptest! {
        #[test]
        fn prop_inverse_trig(re in -0.9f64..0.9, im in -0.9f64..0.9) {
            let z = Complex64::new(re, im);
            prop_assert!(close(sin(asin(z)), z));
            prop_assert!(close(cos(acos(z)), z));
            prop_assert!(close(tan(atan(z)), z));
            prop_assert!(close(sinh(asinh(z)), z));
            prop_assert!(close(cosh(acosh(z)), z));
            prop_assert!(close(tanh(atanh(z)), z));
        }

        #[test]
        fn prop_exp_ln(re in -5.0f64..5.0, im in -3.0f64..3.0) {
            let z = Complex64::new(re, im);
            prop_assert!(close(exp(ln(exp(z))), exp(z)));
            prop_assert!(close(ln(exp(z)), z));
        }
    }
}
