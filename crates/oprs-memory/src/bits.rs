//! Bit helpers for primitive integers

use num_traits::PrimInt;

/// Size of `T` in bits
#[inline]
pub const fn size_of_bits<T>() -> usize {
    std::mem::size_of::<T>() * 8
}

/// Check if the most significant bit is set
#[inline]
pub fn msb<T: PrimInt>(value: T) -> bool {
    value.leading_zeros() == 0
}

/// Check if the least significant bit is set
#[inline]
pub fn lsb<T: PrimInt>(value: T) -> bool {
    value & T::one() == T::one()
}
