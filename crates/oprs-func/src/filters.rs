//! Ready-made predicates

use num_traits::PrimInt;

#[inline]
pub fn is_even<T: PrimInt>(n: &T) -> bool {
    *n % (T::one() + T::one()) == T::zero()
}

/// Odd, including negative odd numbers
#[inline]
pub fn is_odd<T: PrimInt>(n: &T) -> bool {
    !is_even(n)
}

#[inline]
pub fn is_true(b: &bool) -> bool {
    *b
}

#[inline]
pub fn is_false(b: &bool) -> bool {
    !*b
}

/// Equality predicate for a fixed value
pub fn is<T: PartialEq>(val: T) -> impl Fn(&T) -> bool {
    move |arg| *arg == val
}

/// Inequality predicate for a fixed value
pub fn isnt<T: PartialEq>(val: T) -> impl Fn(&T) -> bool {
    move |arg| *arg != val
}

/// Equality predicate for a fixed value under a custom equivalence
pub fn is_func<T>(val: T, eq: impl Fn(&T, &T) -> bool) -> impl Fn(&T) -> bool {
    move |arg| eq(arg, &val)
}
