//! Number parsing checked against the target type

use std::num::IntErrorKind;

use num_traits::Float;
use oprs_core::{Integer, OprsError, OprsResult, Real};

/// Parse `s` in the given radix (2 to 36) into `T`
///
/// Surrounding whitespace and a leading sign are accepted, as is the
/// conventional prefix for radix 2 (`0b`), 8 (`0o`) and 16 (`0x`).
pub fn parse_intn<T: Integer>(radix: u32, s: &str) -> OprsResult<T> {
    if !(2..=36).contains(&radix) {
        return Err(OprsError::InvalidRadix(radix));
    }

    let trimmed = s.trim();
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits = strip_radix_prefix(body, radix);
    if digits.starts_with(['+', '-']) {
        return Err(parse_int_error(s, radix, "misplaced sign"));
    }
    let literal = format!("{sign}{digits}");

    let out_of_range = || OprsError::OutOfRange {
        literal: s.to_string(),
        target: T::NAME,
    };

    match i128::from_str_radix(&literal, radix) {
        Ok(wide) => num_traits::cast::<i128, T>(wide).ok_or_else(out_of_range),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            let wide = u128::from_str_radix(&literal, radix).map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow => out_of_range(),
                _ => parse_int_error(s, radix, &e.to_string()),
            })?;
            num_traits::cast::<u128, T>(wide).ok_or_else(out_of_range)
        }
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Err(out_of_range()),
        Err(e) => Err(parse_int_error(s, radix, &e.to_string())),
    }
}

/// Parse a decimal integer
pub fn parse_int<T: Integer>(s: &str) -> OprsResult<T> {
    parse_intn(10, s)
}

/// Parse a binary integer
pub fn parse_bin<T: Integer>(s: &str) -> OprsResult<T> {
    parse_intn(2, s)
}

/// Parse an octal integer
pub fn parse_oct<T: Integer>(s: &str) -> OprsResult<T> {
    parse_intn(8, s)
}

/// Parse a hexadecimal integer
pub fn parse_hex<T: Integer>(s: &str) -> OprsResult<T> {
    parse_intn(16, s)
}

/// Parse a float; finite values that overflow the target are out of range
pub fn parse_float<F: Real + Float>(s: &str) -> OprsResult<F> {
    let value: f64 = s.trim().parse().map_err(|e: std::num::ParseFloatError| {
        OprsError::ParseFloat {
            literal: s.to_string(),
            reason: e.to_string(),
        }
    })?;
    let out = F::from_f64(value);
    if value.is_finite() && out.is_infinite() {
        return Err(OprsError::OutOfRange {
            literal: s.to_string(),
            target: F::NAME,
        });
    }
    Ok(out)
}

pub fn must_parse_intn<T: Integer>(radix: u32, s: &str) -> T {
    parse_intn(radix, s).unwrap_or_else(|e| panic!("{e}"))
}

pub fn must_parse_int<T: Integer>(s: &str) -> T {
    must_parse_intn(10, s)
}

pub fn must_parse_bin<T: Integer>(s: &str) -> T {
    must_parse_intn(2, s)
}

pub fn must_parse_oct<T: Integer>(s: &str) -> T {
    must_parse_intn(8, s)
}

pub fn must_parse_hex<T: Integer>(s: &str) -> T {
    must_parse_intn(16, s)
}

pub fn must_parse_float<F: Real + Float>(s: &str) -> F {
    parse_float(s).unwrap_or_else(|e| panic!("{e}"))
}

fn strip_radix_prefix(body: &str, radix: u32) -> &str {
    let prefix = match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => return body,
    };
    match body.get(..2) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &body[2..],
        _ => body,
    }
}

fn parse_int_error(literal: &str, radix: u32, reason: &str) -> OprsError {
    OprsError::ParseInt {
        literal: literal.to_string(),
        radix,
        reason: reason.to_string(),
    }
}
