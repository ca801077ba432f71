//! Group-local prefix-sum utility
//!
//! Shared by the offset-scan stage (across per-group counts of one digit
//! row) and the permute stage (across partition flags of one block). On
//! the GPU this is a double-buffered log-depth Hillis-Steele scan between
//! barriers; under sequential lane emulation the same result is a single
//! running sum.

/// Exclusive prefix sum in place; returns the total of the original values.
#[inline]
pub(crate) fn exclusive_scan(values: &mut [u32]) -> u32 {
    let mut sum = 0u32;
    for v in values.iter_mut() {
        let count = *v;
        *v = sum;
        sum += count;
    }
    sum
}
