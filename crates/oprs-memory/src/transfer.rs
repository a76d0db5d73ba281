//! Bounded transfer
//!
//! Copy (or move) elements from the front of a source into the back of a
//! [`BoundedSeq`] until the source runs out or the destination is full.
//! Every function returns the number of elements transferred, which is
//! `min(src.len(), dst.remaining())`. None of them can fail.

use std::ops::{Bound, RangeBounds};

use crate::BoundedSeq;

/// Copy from `src` into `dst` without touching `src`
pub fn capy<T: Clone>(dst: &mut BoundedSeq<T>, src: &[T]) -> usize {
    let n = dst.remaining().min(src.len());
    dst.items.extend_from_slice(&src[..n]);
    n
}

/// Copy from `src` into `dst`, then advance `src` past the copied prefix
pub fn move_slice<'a, T: Clone>(dst: &mut BoundedSeq<T>, src: &mut &'a [T]) -> usize {
    let rest: &'a [T] = *src;
    let n = capy(dst, rest);
    *src = &rest[n..];
    n
}

/// Move owned elements from the front of `src` into `dst`
/// Unlike [`move_slice`] this needs no `Clone`
pub fn drain_into<T>(dst: &mut BoundedSeq<T>, src: &mut Vec<T>) -> usize {
    let n = dst.remaining().min(src.len());
    dst.items.extend(src.drain(..n));
    n
}

/// Copy a sub-range of `dst`'s own elements onto its tail
///
/// This is the overlapping case: source and destination share storage.
/// Elements are copied one at a time in ascending order, and only indices
/// that were live before the call are read, so nothing read has been
/// written by this call. The range is clamped to the current length.
pub fn capy_within<T, R>(dst: &mut BoundedSeq<T>, range: R) -> usize
where
    T: Clone,
    R: RangeBounds<usize>,
{
    let len = dst.len();
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    }
    .min(len);

    if start >= end {
        return 0;
    }

    let n = dst.remaining().min(end - start);
    for i in start..start + n {
        let item = dst.items[i].clone();
        dst.items.push(item);
    }
    n
}
