//! Predicate combinators

use oprs_core::Pred;

/// Pick one of two values
#[inline]
pub fn ternary<T>(pred: bool, when_true: T, when_false: T) -> T {
    if pred {
        when_true
    } else {
        when_false
    }
}

/// Map a predicate's outcome onto one of two values
pub fn pred<T: ?Sized, U: Clone>(
    pred: impl Fn(&T) -> bool,
    when_true: U,
    when_false: U,
) -> impl Fn(&T) -> U {
    move |arg| {
        if pred(arg) {
            when_true.clone()
        } else {
            when_false.clone()
        }
    }
}

/// Keep the left element of a pair-returning function
pub fn drop_right<I, L, R>(f: impl Fn(I) -> (L, R)) -> impl Fn(I) -> L {
    move |arg| f(arg).0
}

/// Keep the right element of a pair-returning function
pub fn drop_left<I, L, R>(f: impl Fn(I) -> (L, R)) -> impl Fn(I) -> R {
    move |arg| f(arg).1
}

/// Negate a predicate
pub fn not<T: ?Sized>(pred: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |arg| !pred(arg)
}

/// AND of two predicates over different types
pub fn and<L: ?Sized, R: ?Sized>(
    one: impl Fn(&L) -> bool,
    two: impl Fn(&R) -> bool,
) -> impl Fn(&L, &R) -> bool {
    move |l, r| one(l) && two(r)
}

/// OR of two predicates over different types
pub fn or<L: ?Sized, R: ?Sized>(
    one: impl Fn(&L) -> bool,
    two: impl Fn(&R) -> bool,
) -> impl Fn(&L, &R) -> bool {
    move |l, r| one(l) || two(r)
}

/// Exclusive OR of two predicates over different types
pub fn xor<L: ?Sized, R: ?Sized>(
    one: impl Fn(&L) -> bool,
    two: impl Fn(&R) -> bool,
) -> impl Fn(&L, &R) -> bool {
    move |l, r| one(l) != two(r)
}

/// AND gate
pub fn both<T: ?Sized>(
    one: impl Fn(&T) -> bool,
    two: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |arg| one(arg) && two(arg)
}

/// NOR gate
pub fn neither<T: ?Sized>(
    one: impl Fn(&T) -> bool,
    two: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |arg| !(one(arg) || two(arg))
}

/// OR gate
pub fn either<T: ?Sized>(
    one: impl Fn(&T) -> bool,
    two: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    move |arg| one(arg) || two(arg)
}

/// NAND gate
pub fn not_both<T: ?Sized>(
    one: impl Fn(&T) -> bool,
    two: impl Fn(&T) -> bool,
) -> impl Fn(&T) -> bool {
    not(both(one, two))
}

/// True iff every predicate holds (vacuously true when empty)
pub fn all<T>(preds: Vec<Pred<T>>) -> impl Fn(&T) -> bool {
    move |arg| preds.iter().all(|p| p(arg))
}

/// True iff some predicate holds (false when empty)
pub fn any<T>(preds: Vec<Pred<T>>) -> impl Fn(&T) -> bool {
    move |arg| preds.iter().any(|p| p(arg))
}

/// True iff exactly one predicate holds
pub fn one<T>(preds: Vec<Pred<T>>) -> impl Fn(&T) -> bool {
    move |arg| preds.iter().filter(|p| p(arg)).take(2).count() == 1
}

/// Lift a predicate to a non-empty slice: true iff the slice is non-empty
/// and every element satisfies it
pub fn are_all<I>(pred: impl Fn(&I) -> bool) -> impl Fn(&[I]) -> bool {
    move |args| !args.is_empty() && args.iter().all(&pred)
}
