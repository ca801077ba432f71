//! Sort key types and order-preserving bit transforms
//!
//! The radix pipeline only ever moves `u32` words. Signed and float keys
//! participate by mapping their bit patterns to an unsigned form whose
//! plain integer order matches the semantic order of the original value:
//! floats through a whole-array bit flip before the first pass (undone
//! after the last), signed integers through sign-aware digit extraction on
//! the final pass only.

use bytemuck::Pod;

use crate::pipeline::BITS_PER_PASS;

/// Numeric interpretation of a 32-bit key's bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Plain unsigned integer order.
    Unsigned,
    /// Two's-complement signed integer order.
    Signed,
    /// IEEE-754 single-precision order (total order over bit patterns;
    /// -0.0 sorts before +0.0, negative NaNs first, positive NaNs last).
    Float,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
}

/// A 32-bit key type the radix pipeline can sort.
///
/// Implemented for `u32`, `i32` and `f32`; the trait is sealed because the
/// pipeline is specific to 32-bit words.
pub trait SortKey: sealed::Sealed + Pod {
    /// How this type's bit pattern is interpreted when ordering.
    const KIND: KeyKind;
}

impl SortKey for u32 {
    const KIND: KeyKind = KeyKind::Unsigned;
}

impl SortKey for i32 {
    const KIND: KeyKind = KeyKind::Signed;
}

impl SortKey for f32 {
    const KIND: KeyKind = KeyKind::Float;
}

/// Map a float bit pattern to its order-preserving unsigned form.
///
/// Negative floats have every bit complemented (reversing their
/// descending-magnitude layout), positive floats just get the sign bit
/// set, so unsigned comparison of the results matches float order.
#[inline]
pub(crate) fn flip_float(bits: u32) -> u32 {
    let mask = if bits >> 31 != 0 {
        0xffff_ffff
    } else {
        0x8000_0000
    };
    bits ^ mask
}

/// Inverse of [`flip_float`]: restore the original float bit pattern.
#[inline]
pub(crate) fn unflip_float(bits: u32) -> u32 {
    let mask = if bits >> 31 != 0 {
        0x8000_0000
    } else {
        0xffff_ffff
    };
    bits ^ mask
}

/// Plain unsigned 4-bit digit at `shift`.
#[inline]
pub(crate) fn digit_unsigned(bits: u32, shift: u32) -> u32 {
    (bits >> shift) & ((1 << BITS_PER_PASS) - 1)
}

/// Sign-aware 4-bit digit for the pass covering the sign bit: the top bit
/// of the digit is kept as the sign and the remaining bits are
/// complemented, so that after the shared descending reflection negative
/// values land in lower buckets than non-negative ones.
#[inline]
pub(crate) fn digit_signed(bits: u32, shift: u32) -> u32 {
    let field = bits >> shift;
    let low = (1 << (BITS_PER_PASS - 1)) - 1;
    ((field & low) ^ low) | (field & (1 << (BITS_PER_PASS - 1)))
}
