//! Boxed closure aliases
//!
//! Combinators return `impl Fn` where they can. These aliases name the boxed
//! forms for when closures of different origin must share one type (e.g. a
//! `Vec<Pred<T>>` handed to `all`).

/// Unary operator
pub type Op<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Binary operator
pub type BinOp<L, R, T> = Box<dyn Fn(L, R) -> T + Send + Sync>;

/// Predicate over a borrowed value
pub type Pred<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Conversion between two types
pub type Caster<I, O> = Box<dyn Fn(I) -> O + Send + Sync>;

/// Nullary producer
pub type Var<T> = Box<dyn Fn() -> T + Send + Sync>;

/// Box a predicate so it can be stored alongside others
pub fn boxed_pred<T, F>(f: F) -> Pred<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Box::new(f)
}
