//! Special functions

use std::f64::consts::PI;

use oprs_core::Real;

/// Lanczos parameters (g = 7, n = 9)
const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Error function, Abramowitz and Stegun 7.1.26
///
/// Absolute error below 1.5e-7.
pub fn erf<R: Real>(r: R) -> R {
    R::from_f64(erf_f64(r.as_f64()))
}

/// Complementary error function, 1 - erf(r)
pub fn erfc<R: Real>(r: R) -> R {
    R::from_f64(1.0 - erf_f64(r.as_f64()))
}

/// Gamma function
///
/// Zero yields a signed infinity, negative integers yield NaN.
pub fn gamma<R: Real>(r: R) -> R {
    R::from_f64(gamma_f64(r.as_f64()))
}

/// Natural log of |gamma(r)| and the sign of gamma(r)
pub fn lgamma<R: Real>(r: R) -> (R, i32) {
    let (value, sign) = lgamma_f64(r.as_f64());
    (R::from_f64(value), sign)
}

fn erf_f64(x: f64) -> f64 {
    let a1 = 0.254_829_592;
    let a2 = -0.284_496_736;
    let a3 = 1.421_413_741;
    let a4 = -1.453_152_027;
    let a5 = 1.061_405_429;
    let p = 0.327_591_1;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

    sign * y
}

fn is_non_positive_integer(x: f64) -> bool {
    x <= 0.0 && x == x.floor()
}

/// Lanczos series sum and t = x + g + 0.5 for the shifted argument
fn lanczos(x: f64) -> (f64, f64) {
    let x = x - 1.0;
    let t = x + LANCZOS_G + 0.5;
    let sum = LANCZOS_COEFFS
        .iter()
        .enumerate()
        .skip(1)
        .fold(LANCZOS_COEFFS[0], |acc, (i, c)| acc + c / (x + i as f64));
    (sum, t)
}

fn gamma_f64(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY.copysign(x);
    }
    if is_non_positive_integer(x) || x == f64::NEG_INFINITY {
        return f64::NAN;
    }
    if x < 0.5 {
        return PI / ((PI * x).sin() * gamma_f64(1.0 - x));
    }
    if x > 171.7 {
        return f64::INFINITY;
    }
    let (sum, t) = lanczos(x);
    // split the power so t^(x - 0.5) does not overflow before e^-t shrinks it
    let half = t.powf((x - 0.5) / 2.0);
    (2.0 * PI).sqrt() * half * (-t).exp() * half * sum
}

fn lgamma_f64(x: f64) -> (f64, i32) {
    if x.is_nan() {
        return (f64::NAN, 1);
    }
    if x.is_infinite() || is_non_positive_integer(x) {
        return (f64::INFINITY, 1);
    }
    if x < 0.5 {
        let s = (PI * x).sin();
        let (rest, _) = lgamma_f64(1.0 - x);
        let sign = if s < 0.0 { -1 } else { 1 };
        return ((PI / s.abs()).ln() - rest, sign);
    }
    let (sum, t) = lanczos(x);
    let value = 0.5 * (2.0 * PI).ln() + (x - 0.5) * t.ln() - t + sum.ln();
    (value, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    #[test]
    fn test_erf() {
        assert!(close(erf(0.0), 0.0, 1e-7));
        assert!(close(erf(1.0), 0.842_700_792_949_715, 2e-7));
        assert!(close(erf(-1.0), -0.842_700_792_949_715, 2e-7));
        assert!(close(erf(3.0), 0.999_977_909_503_001, 2e-7));
        assert!(close(erfc(0.5), 0.479_500_122_186_953_5, 2e-7));
        assert_eq!(erf(10i32), 1);
    }

    #[test]
    fn test_gamma_factorials() {
        let mut factorial = 1.0;
        for n in 1..15 {
            assert!(close(gamma(n as f64), factorial, 1e-12), "gamma({n})");
            factorial *= n as f64;
        }
        assert!(close(gamma(0.5), PI.sqrt(), 1e-12));
        assert!(close(gamma(-0.5), -2.0 * PI.sqrt(), 1e-12));
    }

    #[test]
    fn test_gamma_poles() {
        assert_eq!(gamma(0.0), f64::INFINITY);
        assert_eq!(gamma(-0.0), f64::NEG_INFINITY);
        assert!(gamma(-3.0f64).is_nan());
        assert!(gamma(171.0f64).is_finite());
        assert_eq!(gamma(200.0), f64::INFINITY);
    }

    #[test]
    fn test_lgamma() {
        let (value, sign) = lgamma(10.0);
        assert!(close(value, 362_880f64.ln(), 1e-12));
        assert_eq!(sign, 1);

        let (value, sign) = lgamma(-0.5);
        assert!(close(value, (2.0 * PI.sqrt()).ln(), 1e-12));
        assert_eq!(sign, -1);

        let (value, _) = lgamma(500.0f64);
        assert!(value.is_finite());
        assert_eq!(lgamma(-2.0), (f64::INFINITY, 1));
    }
}
