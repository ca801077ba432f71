//! Permute stage: stable local sort and global scatter
//!
//! Each group re-derives the block assignment the histogram stage used,
//! stable-sorts every block by the pass digit inside its scratch arena,
//! and scatters each element to `carry[bucket] + local rank`, where the
//! carry starts at the group's global base offsets and advances block by
//! block. Writes go only to the pass output buffers; the input pair is
//! never mutated, which is what keeps ping-pong buffering sound while
//! groups run concurrently.

use super::block::{block_bounds, group_blocks};
use super::dispatch::{dispatch, ScatterBuf};
use super::scan::exclusive_scan;
use super::{PassConfig, BITS_PER_PASS, BLOCK_SIZE, RADICES, WORKGROUP_COUNT};

/// Fixed per-group scratch arena, allocated once and reused across
/// blocks, passes, and sort invocations.
pub(crate) struct GroupScratch {
    keys: Box<[u32]>,
    values: Box<[u32]>,
    keys_alt: Box<[u32]>,
    values_alt: Box<[u32]>,
    /// Partition flags, overwritten with ranks by the scan.
    flags: Box<[u32]>,
    /// Running write base per bucket for this group.
    carry: [u32; RADICES],
}

impl GroupScratch {
    pub(crate) fn new() -> Self {
        let block = || vec![0u32; BLOCK_SIZE].into_boxed_slice();
        Self {
            keys: block(),
            values: block(),
            keys_alt: block(),
            values_alt: block(),
            flags: block(),
            carry: [0; RADICES],
        }
    }
}

/// Scatter every key (and payload) from `keys_in` to its sorted position
/// for this pass's digit, using the global base offsets produced by the
/// offset scan.
pub(crate) fn permute_pass(
    keys_in: &[u32],
    values_in: &[u32],
    keys_out: &ScatterBuf,
    values_out: &ScatterBuf,
    histogram: &[u32],
    cfg: &PassConfig,
    scratch: &mut [GroupScratch],
) {
    debug_assert_eq!(scratch.len(), WORKGROUP_COUNT);
    dispatch(scratch, |group, arena| {
        permute_group(
            group, arena, keys_in, values_in, keys_out, values_out, histogram, cfg,
        );
    });
}

#[allow(clippy::too_many_arguments)]
fn permute_group(
    group: usize,
    arena: &mut GroupScratch,
    keys_in: &[u32],
    values_in: &[u32],
    keys_out: &ScatterBuf,
    values_out: &ScatterBuf,
    histogram: &[u32],
    cfg: &PassConfig,
) {
    let n = keys_in.len();

    for bucket in 0..RADICES {
        arena.carry[bucket] = histogram[bucket * WORKGROUP_COUNT + group];
    }

    for block in group_blocks(n, group) {
        let bounds = block_bounds(n, block);
        let filled = bounds.len();

        // Load the block; lanes past n get the sentinel key and a zero
        // payload. The sentinel sorts into the top bucket behind every
        // real element, so padding never perturbs a valid element's rank.
        arena.keys[..filled].copy_from_slice(&keys_in[bounds.clone()]);
        arena.keys[filled..].fill(cfg.sentinel());
        if cfg.has_values {
            arena.values[..filled].copy_from_slice(&values_in[bounds]);
            arena.values[filled..].fill(0);
        }

        sort_block(arena, cfg);

        // Bucket starts within the sorted block give each element's local
        // rank as `position - start`; only the `filled` real elements are
        // counted or written.
        let mut counts = [0u32; RADICES];
        for &key in &arena.keys[..filled] {
            counts[cfg.bucket(key) as usize] += 1;
        }
        let mut starts = counts;
        exclusive_scan(&mut starts);

        for (position, &key) in arena.keys[..filled].iter().enumerate() {
            let bucket = cfg.bucket(key) as usize;
            let dst = (arena.carry[bucket] + position as u32 - starts[bucket]) as usize;
            // Disjointness: carry ranges of distinct (bucket, group) pairs
            // never overlap, by construction of the offset table.
            unsafe { keys_out.write(dst, key) };
            if cfg.has_values {
                unsafe { values_out.write(dst, arena.values[position]) };
            }
        }

        for (carry, count) in arena.carry.iter_mut().zip(counts) {
            *carry += count;
        }
    }
}

/// Stable in-arena sort of one block by the 4-bit pass digit: four rounds
/// of bit-by-bit stable partition, least significant digit bit first. Each
/// round's destinations come from an exclusive scan over the "bit clear"
/// flags, and relocation double-buffers between the two key arrays so
/// relative order inside each partition is preserved.
fn sort_block(arena: &mut GroupScratch, cfg: &PassConfig) {
    for bit in 0..BITS_PER_PASS {
        for (flag, &key) in arena.flags.iter_mut().zip(arena.keys.iter()) {
            *flag = ((cfg.bucket(key) >> bit) & 1) ^ 1;
        }
        let front_total = exclusive_scan(&mut arena.flags);

        for (position, &key) in arena.keys.iter().enumerate() {
            let rank = arena.flags[position];
            let dst = if (cfg.bucket(key) >> bit) & 1 == 0 {
                rank
            } else {
                position as u32 - rank + front_total
            } as usize;
            arena.keys_alt[dst] = key;
            if cfg.has_values {
                arena.values_alt[dst] = arena.values[position];
            }
        }

        std::mem::swap(&mut arena.keys, &mut arena.keys_alt);
        if cfg.has_values {
            std::mem::swap(&mut arena.values, &mut arena.values_alt);
        }
    }
}
