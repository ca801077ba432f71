//! Block partition shared by the histogram, permute and flip stages
//!
//! The partition is never stored: each stage recomputes it from the
//! element count and its group index. Keeping the formula in one place is
//! what guarantees the histogram and permute stages agree bit-for-bit on
//! which elements belong to which group.

use std::ops::Range;

use super::{BLOCK_SIZE, WORKGROUP_COUNT};

/// Total number of blocks covering `n` elements.
#[inline]
pub(crate) fn block_count(n: usize) -> usize {
    n.div_ceil(BLOCK_SIZE)
}

/// Blocks each group is responsible for (the last groups may get none).
#[inline]
pub(crate) fn blocks_per_group(n: usize) -> usize {
    block_count(n).div_ceil(WORKGROUP_COUNT)
}

/// Elements each group spans; contiguous near-equal ranges.
#[inline]
pub(crate) fn group_span(n: usize) -> usize {
    blocks_per_group(n) * BLOCK_SIZE
}

/// Block indices assigned to `group`.
#[inline]
pub(crate) fn group_blocks(n: usize, group: usize) -> Range<usize> {
    let per_group = blocks_per_group(n);
    let first = (per_group * group).min(block_count(n));
    let last = (first + per_group).min(block_count(n));
    first..last
}

/// Element range of one block, clamped to `n`. The clamp is the bounds
/// gate: tail padding past `n` is never read or counted.
#[inline]
pub(crate) fn block_bounds(n: usize, block: usize) -> Range<usize> {
    let start = block * BLOCK_SIZE;
    start..(start + BLOCK_SIZE).min(n)
}
