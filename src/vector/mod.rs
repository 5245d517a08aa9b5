//! Compressed sparse vector built from index-value entry streams.

use std::fmt;

use num_traits::AsPrimitive;
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entry::IndexValue;
use crate::iter::{DenseViewIterator, Entries, IndexValueIterator, SparseSliceIterator};

/// Errors that can occur while building a sparse vector.
#[derive(Debug, Error)]
pub enum SparseVectorError {
    /// Entry indices must be strictly increasing.
    #[error("entry index {index} does not increase past previous index {previous}")]
    UnorderedIndex {
        /// Offending entry index.
        index: u64,
        /// Index of the entry stored immediately before it.
        previous: u64,
    },
    /// Sparse storage holds only nonzero values.
    #[error("explicit zero value at index {index}")]
    ExplicitZero {
        /// Index at which the zero value was supplied.
        index: u64,
    },
}

/// Sparse vector storing nonzero entries as parallel index/value arrays.
///
/// Indices are strictly increasing and values are never exactly `0.0`;
/// `dimension` is the logical dense length the entries are drawn from.
/// Construction goes through the entry protocol ([`from_entries`]), a dense
/// slice ([`from_dense`]), or incremental [`push`] calls, and stored entries
/// are re-exposed through the same protocol via [`iter`].
///
/// [`from_entries`]: SparseVector::from_entries
/// [`from_dense`]: SparseVector::from_dense
/// [`push`]: SparseVector::push
/// [`iter`]: SparseVector::iter
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseVector {
    indices: Vec<u64>,
    values: Vec<f64>,
    dimension: u64,
}

impl SparseVector {
    /// Create an empty vector of dimension 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain an entry iterator into a sparse vector.
    ///
    /// The logical dimension becomes one past the last stored index (0 when
    /// the stream is empty); widen it with [`with_dimension`] if the source
    /// had trailing zeros.
    ///
    /// [`with_dimension`]: SparseVector::with_dimension
    pub fn from_entries<I>(mut entries: I) -> Result<Self, SparseVectorError>
    where
        I: IndexValueIterator,
    {
        let mut vector = Self::new();
        while entries.is_valid() {
            let IndexValue { index, value } = entries.get();
            vector.push(index, value)?;
            entries.advance();
        }
        debug!(
            nnz = vector.nnz(),
            dimension = vector.dimension,
            "built sparse vector from entry stream"
        );
        Ok(vector)
    }

    /// Compress a dense slice, dropping every exact-zero element.
    pub fn from_dense<T>(dense: &[T]) -> Self
    where
        T: AsPrimitive<f64>,
    {
        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut iter = DenseViewIterator::new(dense);
        while iter.is_valid() {
            let pair = iter.get();
            indices.push(pair.index);
            values.push(pair.value);
            iter.advance();
        }
        debug!(
            nnz = indices.len(),
            dimension = dense.len(),
            "compressed dense slice into sparse vector"
        );
        Self {
            indices,
            values,
            dimension: dense.len() as u64,
        }
    }

    /// Append a single nonzero entry.
    ///
    /// The index must lie strictly past every stored index; the dimension
    /// grows to cover it.
    pub fn push(&mut self, index: u64, value: f64) -> Result<(), SparseVectorError> {
        if value == 0.0 {
            return Err(SparseVectorError::ExplicitZero { index });
        }
        if let Some(&previous) = self.indices.last() {
            if index <= previous {
                return Err(SparseVectorError::UnorderedIndex { index, previous });
            }
        }
        self.indices.push(index);
        self.values.push(value);
        self.dimension = self.dimension.max(index + 1);
        Ok(())
    }

    /// Widen the logical dimension, e.g. to account for trailing zeros.
    ///
    /// # Panics
    /// Panics if `dimension` does not cover the stored indices.
    pub fn with_dimension(mut self, dimension: u64) -> Self {
        let required = self.indices.last().map_or(0, |last| last + 1);
        assert!(
            dimension >= required,
            "dimension {} does not cover stored indices (need at least {})",
            dimension,
            required
        );
        self.dimension = dimension;
        self
    }

    /// Logical dense length.
    pub fn dimension(&self) -> u64 {
        self.dimension
    }

    /// Number of nonzero entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` when the vector stores no entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Stored indices, strictly increasing (useful for serialization).
    pub fn indices(&self) -> &[u64] {
        &self.indices
    }

    /// Stored values, parallel to [`indices`](SparseVector::indices).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at a dense offset, `0.0` for positions with no stored entry.
    pub fn value_at(&self, index: u64) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate the stored entries through the pull protocol.
    pub fn iter(&self) -> SparseSliceIterator<'_> {
        SparseSliceIterator::new(&self.indices, &self.values)
    }

    /// Iterate the stored entries as a standard [`Iterator`].
    pub fn entries(&self) -> Entries<SparseSliceIterator<'_>> {
        self.iter().entries()
    }

    /// Dot product against a dense operand.
    ///
    /// Entries at offsets beyond the operand's length contribute nothing.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.indices
            .iter()
            .zip(&self.values)
            .map(|(&index, &value)| dense.get(index as usize).map_or(0.0, |&d| d * value))
            .sum()
    }

    /// Materialize the vector as `dimension` dense slots.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.dimension as usize];
        for (&index, &value) in self.indices.iter().zip(&self.values) {
            out[index as usize] = value;
        }
        out
    }
}

impl fmt::Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (pos, pair) in self.entries().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "]")
    }
}
