//! Casting helpers
//!
//! Numeric casts use `as` semantics (wrapping for integers, saturating
//! float to integer) through `num_traits::AsPrimitive`.

use std::any::{Any, TypeId};
use std::fmt::{Debug, Display};

use num_traits::AsPrimitive;
use oprs_memory::{is_zero, Lener};

/// True iff `arg` differs from its type's default
#[inline]
pub fn to_bool<T: Default + PartialEq>(arg: &T) -> bool {
    !is_zero(arg)
}

/// True iff `arg` is non-empty
#[inline]
pub fn to_bool_len<C: Lener + ?Sized>(arg: &C) -> bool {
    arg.length() != 0
}

/// Convert between primitive numbers with `as` semantics
#[inline]
pub fn cast<O, I>(arg: I) -> O
where
    O: Copy + 'static,
    I: AsPrimitive<O>,
{
    arg.as_()
}

macro_rules! cast_fns {
    ($($name:ident => $t:ty),* $(,)?) => {
        $(
            #[doc = concat!("Cast to `", stringify!($t), "` with `as` semantics")]
            #[inline]
            pub fn $name<T: AsPrimitive<$t>>(arg: T) -> $t {
                arg.as_()
            }
        )*
    };
}

cast_fns! {
    to_u8 => u8,
    to_u16 => u16,
    to_u32 => u32,
    to_u64 => u64,
    to_usize => usize,
    to_i8 => i8,
    to_i16 => i16,
    to_i32 => i32,
    to_i64 => i64,
    to_isize => isize,
    to_f32 => f32,
    to_f64 => f64,
}

pub fn to_display_string<T: Display + ?Sized>(arg: &T) -> String {
    arg.to_string()
}

/// Debug rendering, including type structure
pub fn to_debug_string<T: Debug + ?Sized>(arg: &T) -> String {
    format!("{arg:?}")
}

/// UTF-8 bytes of a string
pub fn bytes_of(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Unicode scalar values of a string
pub fn runes_of(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Check if `arg` has type `Want`
pub fn type_is<Want: 'static, Have: 'static>(_arg: &Have) -> bool {
    TypeId::of::<Want>() == TypeId::of::<Have>()
}

/// Recover a concrete value from a type-erased one
pub fn downcast<T: Clone + 'static>(arg: &dyn Any) -> Option<T> {
    arg.downcast_ref::<T>().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bool() {
        assert!(to_bool(&1u8));
        assert!(!to_bool(&0i64));
        assert!(!to_bool(&String::new()));
        assert!(to_bool(&"x".to_string()));
        assert!(!to_bool(&0.0f32));
    }

    #[test]
    fn test_to_bool_len() {
        assert!(!to_bool_len(&Vec::<u8>::new()));
        assert!(to_bool_len(&vec![0]));
        assert!(to_bool_len("abc"));
        assert!(!to_bool_len(&[0u8; 0][..]));
    }

    #[test]
    fn test_numeric_casts() {
        assert_eq!(to_u8(300i32), 44);
        assert_eq!(to_i8(200u8), -56);
        assert_eq!(to_i32(3.99f64), 3);
        assert_eq!(to_u8(-1.5f32), 0);
        assert_eq!(to_f64(7u64), 7.0);
        assert_eq!(cast::<u16, _>(65_537u32), 1);
    }

    #[test]
    fn test_strings() {
        assert_eq!(to_display_string(&42), "42");
        assert_eq!(to_debug_string("hi"), "\"hi\"");
        assert_eq!(bytes_of("é"), vec![0xc3, 0xa9]);
        assert_eq!(runes_of("héllo"), vec!['h', 'é', 'l', 'l', 'o']);
    }

    #[test]
    fn test_type_is_and_downcast() {
        assert!(type_is::<u8, _>(&1u8));
        assert!(!type_is::<u16, _>(&1u8));

        let boxed: Box<dyn Any> = Box::new(5i32);
        assert_eq!(downcast::<i32>(boxed.as_ref()), Some(5));
        assert_eq!(downcast::<u32>(boxed.as_ref()), None);
    }
}
