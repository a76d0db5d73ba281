//! Capacity-bounded sequences
//!
//! INVARIANT: capacity >= len, and capacity never changes after allocation.

use std::ops::Deref;

/// An ordered sequence with a fixed maximum capacity
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundedSeq<T> {
    /// Live elements, never longer than `capacity`
    pub(crate) items: Vec<T>,
    /// Maximum number of elements
    capacity: usize,
}

impl<T> BoundedSeq<T> {
    /// Create an empty sequence that can hold `capacity` elements
    pub fn new(capacity: usize) -> Self {
        BoundedSeq {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a sequence holding `items`
    /// The capacity is raised to `items.len()` if it is smaller
    pub fn with_items(mut items: Vec<T>, capacity: usize) -> Self {
        let capacity = capacity.max(items.len());
        items.reserve_exact(capacity - items.len());
        BoundedSeq { items, capacity }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements that still fit
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Append one element
    /// Hands the element back if the sequence is full
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the last element
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Drop every element, keeping the capacity
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for BoundedSeq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsRef<[T]> for BoundedSeq<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<BoundedSeq<T>> for Vec<T> {
    fn from(seq: BoundedSeq<T>) -> Self {
        seq.items
    }
}

impl<'a, T> IntoIterator for &'a BoundedSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
