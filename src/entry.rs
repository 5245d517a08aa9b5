//! The index-value pair exchanged between iterators and consumers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One nonzero entry of a sparse sequence.
///
/// Couples the 0-based offset an element occupies in its dense source with
/// the element's value, widened to double precision at read time regardless
/// of the source element type.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexValue {
    /// 0-based offset within the dense source sequence.
    pub index: u64,
    /// Stored value, converted to `f64`.
    pub value: f64,
}

impl IndexValue {
    /// Create a pair from an offset and an already-converted value.
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.index, self.value)
    }
}
