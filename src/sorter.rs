//! Pipeline driver and public sorting API

use log::debug;

use crate::error::{Error, Result};
use crate::key::{KeyKind, SortKey};
use crate::pipeline::permute::GroupScratch;
use crate::pipeline::{
    execute_pass, flip::flip_pass, PassConfig, BITS_PER_PASS, PASS_COUNT, RADICES,
    WORKGROUP_COUNT,
};

/// Direction of the sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

/// Grouped-thread LSD radix sorter for 32-bit keys.
///
/// Owns the second half of each ping-pong buffer pair, the histogram
/// matrix, and the per-group scratch arenas; all of it is sized once and
/// reused across invocations, so a long-lived sorter performs no
/// allocation per sort beyond first-time growth.
///
/// ```
/// use radixr::{RadixSorter, SortOrder};
///
/// let mut sorter = RadixSorter::new();
/// let mut keys = vec![5u32, 3, 3, 1, 4];
/// sorter.sort(&mut keys, SortOrder::Ascending).unwrap();
/// assert_eq!(keys, [1, 3, 3, 4, 5]);
/// ```
pub struct RadixSorter {
    spare_keys: Vec<u32>,
    spare_values: Vec<u32>,
    histogram: Vec<u32>,
    scratch: Vec<GroupScratch>,
}

impl RadixSorter {
    /// Create a sorter with no preallocated key capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a sorter whose ping-pong buffers are presized for arrays up
    /// to `max_len` keys, so later sorts of that size never allocate.
    pub fn with_capacity(max_len: usize) -> Self {
        Self {
            spare_keys: Vec::with_capacity(max_len),
            spare_values: Vec::with_capacity(max_len),
            histogram: vec![0; RADICES * WORKGROUP_COUNT],
            scratch: (0..WORKGROUP_COUNT).map(|_| GroupScratch::new()).collect(),
        }
    }

    /// Sort `keys` in place.
    pub fn sort<K: SortKey>(&mut self, keys: &mut [K], order: SortOrder) -> Result<()> {
        self.run(bytemuck::cast_slice_mut(keys), None, order, K::KIND)
    }

    /// Sort `keys` in place, reordering `values` by the same permutation.
    ///
    /// The permutation is stable: equal keys keep their payloads in the
    /// original relative order.
    pub fn sort_pairs<K: SortKey>(
        &mut self,
        keys: &mut [K],
        values: &mut [u32],
        order: SortOrder,
    ) -> Result<()> {
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        self.run(bytemuck::cast_slice_mut(keys), Some(values), order, K::KIND)
    }

    /// Return the stable permutation of indices that sorts `keys`,
    /// leaving `keys` untouched.
    pub fn argsort<K: SortKey>(&mut self, keys: &[K], order: SortOrder) -> Result<Vec<u32>> {
        let mut key_bits: Vec<u32> = bytemuck::cast_slice(keys).to_vec();
        let mut indices: Vec<u32> = (0..keys.len() as u32).collect();
        self.run(&mut key_bits, Some(&mut indices), order, K::KIND)?;
        Ok(indices)
    }

    fn run(
        &mut self,
        keys: &mut [u32],
        mut values: Option<&mut [u32]>,
        order: SortOrder,
        kind: KeyKind,
    ) -> Result<()> {
        let n = keys.len();
        if n > u32::MAX as usize {
            return Err(Error::TooLarge { len: n });
        }
        if n <= 1 {
            return Ok(());
        }

        let descending = order == SortOrder::Descending;
        let is_float = kind == KeyKind::Float;
        let is_signed = kind == KeyKind::Signed;
        let has_values = values.is_some();
        debug!("radix sort: n={n} kind={kind:?} order={order:?} payload={has_values}");

        self.spare_keys.resize(n, 0);
        if has_values {
            self.spare_values.resize(n, 0);
        }

        if is_float {
            flip_pass(keys, false);
        }

        // Ping-pong: even passes read the caller's buffers, odd passes
        // read them back out of the spare pair. Eight passes is even, so
        // the result lands back in the caller's buffers.
        for pass in 0..PASS_COUNT {
            let shift = pass * BITS_PER_PASS;
            let cfg = PassConfig {
                shift,
                descending,
                signed_pass: is_signed && shift + BITS_PER_PASS == 32,
                has_values,
            };
            let forward = pass % 2 == 0;
            match (&mut values, forward) {
                (Some(v), true) => execute_pass(
                    keys,
                    &**v,
                    &mut self.spare_keys,
                    &mut self.spare_values,
                    &mut self.histogram,
                    &mut self.scratch,
                    &cfg,
                ),
                (Some(v), false) => execute_pass(
                    &self.spare_keys,
                    &self.spare_values,
                    keys,
                    &mut **v,
                    &mut self.histogram,
                    &mut self.scratch,
                    &cfg,
                ),
                (None, true) => execute_pass(
                    keys,
                    &[],
                    &mut self.spare_keys,
                    &mut [],
                    &mut self.histogram,
                    &mut self.scratch,
                    &cfg,
                ),
                (None, false) => execute_pass(
                    &self.spare_keys,
                    &[],
                    keys,
                    &mut [],
                    &mut self.histogram,
                    &mut self.scratch,
                    &cfg,
                ),
            }
        }

        if is_float {
            flip_pass(keys, true);
        }

        Ok(())
    }
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new()
    }
}
