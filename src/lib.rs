//! # Sparse Index-Value Iteration
//!
//! Building blocks for sparse-vector code: iterate any dense numeric
//! sequence as if it were sparse, yielding each nonzero element together
//! with its true offset in the dense source.
//!
//! ## Components
//!
//! 1. **Entry protocol**: [`IndexValueIterator`] — pull-style
//!    `is_valid` / `get` / `advance` iteration over [`IndexValue`] pairs
//! 2. **Dense view**: [`DenseViewIterator`] — borrows a dense numeric slice
//!    and skips exact-zero elements while tracking dense offsets
//! 3. **Compressed view**: [`SparseSliceIterator`] — walks parallel
//!    index/value storage
//! 4. **Consumer**: [`SparseVector`] — compressed storage built from and
//!    re-exposed through the entry protocol
//!
//! ## Usage Example
//!
//! ```
//! use sparseview::{DenseViewIterator, IndexValueIterator, SparseVector};
//!
//! let dense = [0.0, 0.0, 3.0, 0.0, 5.0];
//! let iter = DenseViewIterator::new(&dense);
//! assert_eq!(iter.get().index, 2);
//!
//! let vector = SparseVector::from_dense(&dense);
//! assert_eq!(vector.nnz(), 2);
//! assert_eq!(vector.dot(&[1.0, 1.0, 1.0, 1.0, 1.0]), 8.0);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod entry; // Index-value pair type
pub mod iter; // Entry protocol and concrete iterators
pub mod vector; // Compressed sparse-vector consumer

// Re-exports for convenience
pub use entry::IndexValue;
pub use iter::{DenseViewIterator, Entries, IndexValueIterator, SparseSliceIterator};
pub use vector::{SparseVector, SparseVectorError};
