//! Defect injection helpers.
//!
//! The dimension generators deliberately corrupt a handful of rows after
//! building them (nulled contact fields, zero prices, missing costs) so that
//! downstream cleaning logic has something to find. Each corruption targets a
//! set of distinct row indices drawn without replacement; independent draws
//! for different fields may overlap.

use rand::seq::index;
use rand::Rng;

/// Pick `count` distinct row indices in `0..len`, in draw order.
///
/// Callers must validate `len >= count` up front (see the `RowCount` error
/// variant); the underlying sampler panics otherwise.
pub fn sample_rows(rng: &mut impl Rng, len: usize, count: usize) -> Vec<usize> {
    index::sample(rng, len, count).into_vec()
}
