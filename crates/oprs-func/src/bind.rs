//! Partial application, currying and composition
//!
//! `bind*` fixes the right operand of a binary function, `method*` fixes
//! the left one.

use std::fmt::Display;
use std::rc::Rc;

/// Fix the right operand
pub fn bind<L, R: Clone, T>(f: impl Fn(L, R) -> T, val: R) -> impl Fn(L) -> T {
    move |arg| f(arg, val.clone())
}

/// Fix the right operand to whatever `var` produces at call time
pub fn bind_var<L, R, T>(f: impl Fn(L, R) -> T, var: impl Fn() -> R) -> impl Fn(L) -> T {
    move |arg| f(arg, var())
}

/// Fix the left operand
pub fn method<L: Clone, R, T>(val: L, f: impl Fn(L, R) -> T) -> impl Fn(R) -> T {
    move |arg| f(val.clone(), arg)
}

/// Fix the left operand to whatever `var` produces at call time
pub fn method_var<L, R, T>(var: impl Fn() -> L, f: impl Fn(L, R) -> T) -> impl Fn(R) -> T {
    move |arg| f(var(), arg)
}

/// One unary function per right operand
pub fn bind_each<L, R, T, F>(f: F, vals: impl IntoIterator<Item = R>) -> Vec<Box<dyn Fn(L) -> T>>
where
    L: 'static,
    R: Clone + 'static,
    T: 'static,
    F: Fn(L, R) -> T + 'static,
{
    let f = Rc::new(f);
    vals.into_iter()
        .map(|val| {
            let f = Rc::clone(&f);
            Box::new(move |arg: L| f(arg, val.clone())) as Box<dyn Fn(L) -> T>
        })
        .collect()
}

/// One unary function per left operand
pub fn method_each<L, R, T, F>(f: F, vals: impl IntoIterator<Item = L>) -> Vec<Box<dyn Fn(R) -> T>>
where
    L: Clone + 'static,
    R: 'static,
    T: 'static,
    F: Fn(L, R) -> T + 'static,
{
    let f = Rc::new(f);
    vals.into_iter()
        .map(|val| {
            let f = Rc::clone(&f);
            Box::new(move |arg: R| f(val.clone(), arg)) as Box<dyn Fn(R) -> T>
        })
        .collect()
}

/// f(l, r) -> f(l)(r)
pub fn curry_l<L, R, T, F>(f: F) -> impl Fn(L) -> Box<dyn Fn(R) -> T>
where
    L: Clone + 'static,
    R: 'static,
    T: 'static,
    F: Fn(L, R) -> T + 'static,
{
    let f = Rc::new(f);
    move |left: L| {
        let f = Rc::clone(&f);
        Box::new(move |right: R| f(left.clone(), right)) as Box<dyn Fn(R) -> T>
    }
}

/// f(l, r) -> f(r)(l)
pub fn curry_r<L, R, T, F>(f: F) -> impl Fn(R) -> Box<dyn Fn(L) -> T>
where
    L: 'static,
    R: Clone + 'static,
    T: 'static,
    F: Fn(L, R) -> T + 'static,
{
    let f = Rc::new(f);
    move |right: R| {
        let f = Rc::clone(&f);
        Box::new(move |left: L| f(left, right.clone())) as Box<dyn Fn(L) -> T>
    }
}

/// Swap the operands of a binary function
pub fn flip<L, R, T>(op: impl Fn(L, R) -> T) -> impl Fn(R, L) -> T {
    move |r, l| op(l, r)
}

/// Compose two unary functions, `one` first
pub fn pipe<L, R, T>(one: impl Fn(L) -> R, two: impl Fn(R) -> T) -> impl Fn(L) -> T {
    move |arg| two(one(arg))
}

/// Run `op` before every call to `f`
pub fn before<I, O>(f: impl Fn(I) -> O, op: impl Fn()) -> impl Fn(I) -> O {
    move |arg| {
        op();
        f(arg)
    }
}

/// Run `op` after every call to `f`
pub fn after<I, O>(f: impl Fn(I) -> O, op: impl Fn()) -> impl Fn(I) -> O {
    move |arg| {
        let out = f(arg);
        op();
        out
    }
}

/// Lift an element function to a whole-vector function
pub fn integrate<I, O>(f: impl Fn(I) -> O) -> impl Fn(Vec<I>) -> Vec<O> {
    move |args| args.into_iter().map(&f).collect()
}

/// Identity
#[inline]
pub fn returner<T>(arg: T) -> T {
    arg
}

/// Turn a fallible function into one that panics on error
pub fn must<I, O, E: Display>(f: impl Fn(I) -> Result<O, E>) -> impl Fn(I) -> O {
    move |arg| match f(arg) {
        Ok(out) => out,
        Err(e) => panic!("{e}"),
    }
}

/// Call a slice-taking function with a single argument
pub fn onead<I, O>(f: impl Fn(&[I]) -> O) -> impl Fn(I) -> O {
    move |arg| f(std::slice::from_ref(&arg))
}
