//! Operator wrappers
//!
//! Plain functions for the binary operators so they can be passed where a
//! closure is expected (`fold(0, add)`, `bind(lt, 3)`, ...).

use std::ops::{Add, Div, Mul, Rem, Sub};

/// a + b
#[inline]
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// a - b
#[inline]
pub fn sub<T: Sub<Output = T>>(a: T, b: T) -> T {
    a - b
}

/// a * b
#[inline]
pub fn mul<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

/// a / b
#[inline]
pub fn div<T: Div<Output = T>>(a: T, b: T) -> T {
    a / b
}

/// a % b
#[inline]
pub fn rem<T: Rem<Output = T>>(a: T, b: T) -> T {
    a % b
}

#[inline]
pub fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a < b
}

#[inline]
pub fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a <= b
}

#[inline]
pub fn gt<T: PartialOrd>(a: T, b: T) -> bool {
    a > b
}

#[inline]
pub fn ge<T: PartialOrd>(a: T, b: T) -> bool {
    a >= b
}

#[inline]
pub fn eq<T: PartialEq>(a: T, b: T) -> bool {
    a == b
}

#[inline]
pub fn ne<T: PartialEq>(a: T, b: T) -> bool {
    a != b
}
