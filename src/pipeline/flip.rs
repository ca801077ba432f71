//! Float key transform stage
//!
//! A whole-array pass over the current key buffer, run once before the
//! first digit pass (forward) and once after the last (inverse). Touches
//! keys only, never payload. Groups mutate disjoint contiguous spans of
//! the same block partition the counting stages use, in place.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::block::group_span;
use crate::key::{flip_float, unflip_float};

/// Apply the order-preserving float transform (or its inverse) to every
/// key in place.
pub(crate) fn flip_pass(keys: &mut [u32], inverse: bool) {
    if keys.is_empty() {
        return;
    }
    let span = group_span(keys.len());

    #[cfg(feature = "rayon")]
    {
        keys.par_chunks_mut(span)
            .for_each(|chunk| flip_chunk(chunk, inverse));
    }

    #[cfg(not(feature = "rayon"))]
    {
        for chunk in keys.chunks_mut(span) {
            flip_chunk(chunk, inverse);
        }
    }
}

fn flip_chunk(chunk: &mut [u32], inverse: bool) {
    if inverse {
        for key in chunk {
            *key = unflip_float(*key);
        }
    } else {
        for key in chunk {
            *key = flip_float(*key);
        }
    }
}
