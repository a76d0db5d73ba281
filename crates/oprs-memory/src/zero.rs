//! Zero-value helpers

use std::collections::{BTreeMap, HashMap, VecDeque};

/// Types with a length
pub trait Lener {
    fn length(&self) -> usize;
}

impl<T> Lener for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Lener for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Lener for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Lener for str {
    fn length(&self) -> usize {
        self.len()
    }
}

impl Lener for String {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Lener for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Lener for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Lener for crate::BoundedSeq<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

/// True iff `value` equals its type's default
#[inline]
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Replace `slot` with `value` if it currently holds the default value
pub fn denull<T: Default + PartialEq>(slot: &mut T, value: T) {
    if is_zero(slot) {
        *slot = value;
    }
}

/// Replace `slot` with `value` if it is empty
pub fn denull_len<C: Lener>(slot: &mut C, value: C) {
    if slot.length() == 0 {
        *slot = value;
    }
}
