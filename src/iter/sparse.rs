//! Iteration over already-compressed index/value storage.

use super::IndexValueIterator;
use crate::entry::IndexValue;

/// Walks the parallel index and value slices of compressed sparse storage.
///
/// The backing store is expected to hold only nonzero values in strictly
/// increasing index order (as [`SparseVector`](crate::vector::SparseVector)
/// guarantees), so no skip loop is needed; every position is yielded as-is.
#[derive(Debug, Clone)]
pub struct SparseSliceIterator<'a> {
    indices: &'a [u64],
    values: &'a [f64],
    cursor: usize,
}

impl<'a> SparseSliceIterator<'a> {
    /// Wrap parallel index and value slices.
    ///
    /// # Panics
    /// Panics if the slices have different lengths.
    pub fn new(indices: &'a [u64], values: &'a [f64]) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "index and value slices must have the same length"
        );
        Self {
            indices,
            values,
            cursor: 0,
        }
    }
}

impl IndexValueIterator for SparseSliceIterator<'_> {
    fn is_valid(&self) -> bool {
        self.cursor < self.indices.len()
    }

    fn get(&self) -> IndexValue {
        debug_assert!(self.is_valid(), "get() on an exhausted iterator");
        IndexValue::new(self.indices[self.cursor], self.values[self.cursor])
    }

    fn advance(&mut self) {
        debug_assert!(self.is_valid(), "advance() on an exhausted iterator");
        self.cursor += 1;
    }
}
