//! # radixr
//!
//! **GPU-style grouped-thread LSD radix sort for 32-bit keys.**
//!
//! radixr sorts large arrays of `u32`, `i32`, or `f32` keys, each
//! optionally paired with a 32-bit payload, using an 8-pass
//! least-significant-digit radix sort shaped as a grouped-thread compute
//! pipeline: digit histogramming, a cross-group offset scan, and a stable
//! local-sort-plus-scatter stage, ping-ponging between two buffer pairs.
//!
//! - **Stable**: equal keys keep their payloads in input order
//! - **Total order for floats**: NaNs and signed zeros sort by an
//!   order-preserving bit transform (`f32::total_cmp` order)
//! - **Descending without a reverse pass**: the radix digit itself is
//!   reflected at bucket-assignment time
//! - **No per-sort allocation**: a long-lived [`RadixSorter`] reuses its
//!   buffers across invocations
//!
//! ## Quick start
//!
//! ```
//! use radixr::{RadixSorter, SortOrder};
//!
//! let mut sorter = RadixSorter::new();
//!
//! let mut keys = vec![5u32, 3, 3, 1, 4];
//! let mut values = vec![0u32, 1, 2, 3, 4];
//! sorter.sort_pairs(&mut keys, &mut values, SortOrder::Ascending)?;
//!
//! assert_eq!(keys, [1, 3, 3, 4, 5]);
//! assert_eq!(values, [3, 1, 2, 4, 0]);
//! # Ok::<(), radixr::Error>(())
//! ```
//!
//! ## Feature flags
//!
//! - `rayon` (default): thread groups of the histogram, permute, and
//!   key-transform stages run in parallel; without it the same pipeline
//!   executes serially, group by group.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
mod pipeline;
mod sorter;

pub use error::{Error, Result};
pub use key::{KeyKind, SortKey};
pub use sorter::{RadixSorter, SortOrder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::key::{KeyKind, SortKey};
    pub use crate::sorter::{RadixSorter, SortOrder};
}
