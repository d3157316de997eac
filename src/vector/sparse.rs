// Sparse vector storage keyed by index

use std::collections::HashMap;
use std::collections::hash_map::Keys;
use std::fmt;
use std::iter::Copied;

use num_traits::Float;

use crate::core::norms::NormCache;
use crate::core::traits::{LinearVector, VectorAccess, check_index};
use crate::error::LvError;

/// Active-index pass over a `SparseVector`, in hash-map order.
pub type SparseIndices<'a, T> = Copied<Keys<'a, usize, T>>;

/// Map-backed vector: only stored entries are active.
///
/// Any write creates an entry, including writes of zero, and entries are never removed; a
/// stored zero is still visited by the engine. Iteration order is the map's and is not sorted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "SparseParts<T>",
        bound(deserialize = "T: Float + serde::Deserialize<'de>")
    )
)]
pub struct SparseVector<T: Float> {
    dimension: usize,
    entries: HashMap<usize, T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    cache: NormCache<T>,
}

impl<T: Float> SparseVector<T> {
    /// Empty vector of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            dimension,
            entries: HashMap::with_capacity(capacity),
            cache: NormCache::new(),
        }
    }

    /// Empty vector from a signed dimension; negative values are rejected.
    pub fn try_new(dimension: i64) -> Result<Self, LvError> {
        if dimension < 0 {
            return Err(LvError::NegativeDimension(dimension));
        }
        Ok(Self::new(dimension as usize))
    }

    /// Build from `(index, value)` pairs. Repeated indices accumulate. Nothing is built if any
    /// index is out of range.
    pub fn from_pairs<I>(dimension: usize, pairs: I) -> Result<Self, LvError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let pairs: Vec<(usize, T)> = pairs.into_iter().collect();
        for &(index, _) in &pairs {
            check_index(index, dimension)?;
        }
        let mut v = Self::with_capacity(dimension, pairs.len());
        for (index, value) in pairs {
            v.raw_update(index, value);
        }
        Ok(v)
    }

    /// Store only the non-zero entries of `values`.
    pub fn from_dense(values: &[T]) -> Self {
        let mut v = Self::new(values.len());
        for (i, &x) in values.iter().enumerate().filter(|(_, x)| **x != T::zero()) {
            v.entries.insert(i, x);
        }
        v
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored `(index, value)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&i, &x)| (i, x))
    }
}

impl<T: Float> VectorAccess for SparseVector<T> {
    type Scalar = T;
    type ActiveIndices<'a>
        = SparseIndices<'a, T>
    where
        Self: 'a;

    fn size(&self) -> usize {
        self.dimension
    }

    fn raw_value(&self, index: usize) -> T {
        self.entries.get(&index).copied().unwrap_or_else(T::zero)
    }

    fn raw_update(&mut self, index: usize, delta: T) {
        let slot = self.entries.entry(index).or_insert_with(T::zero);
        *slot = *slot + delta;
    }

    fn raw_reset(&mut self, index: usize, value: T) {
        self.entries.insert(index, value);
    }

    fn active_indices(&self) -> SparseIndices<'_, T> {
        self.entries.keys().copied()
    }

    fn norm_cache(&self) -> &NormCache<T> {
        &self.cache
    }
}

/// Serialized form of a `SparseVector`, checked against its dimension on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SparseParts<T> {
    dimension: usize,
    entries: HashMap<usize, T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<SparseParts<T>> for SparseVector<T> {
    type Error = LvError;

    fn try_from(parts: SparseParts<T>) -> Result<Self, LvError> {
        Self::from_pairs(parts.dimension, parts.entries)
    }
}

impl<T: Float + fmt::Debug> fmt::Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_active(f)
    }
}
