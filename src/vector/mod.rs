//! Vector module: dense and sparse storages and a tagged union over both.

pub mod dense;
pub use dense::DenseVector;
pub mod sparse;
pub use sparse::{SparseIndices, SparseVector};

use std::fmt;
use std::ops::Range;

use num_traits::Float;

use crate::context::vector_context::StorageKind;
use crate::core::norms::NormCache;
use crate::core::traits::VectorAccess;

/// Either storage behind one type, for callers that pick the layout at run time.
#[derive(Debug, Clone)]
pub enum AnyVector<T: Float> {
    Dense(DenseVector<T>),
    Sparse(SparseVector<T>),
}

/// Active-index pass over an `AnyVector`.
pub enum AnyIndices<'a, T> {
    Dense(Range<usize>),
    Sparse(SparseIndices<'a, T>),
}

impl<T> Iterator for AnyIndices<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            AnyIndices::Dense(it) => it.next(),
            AnyIndices::Sparse(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            AnyIndices::Dense(it) => it.size_hint(),
            AnyIndices::Sparse(it) => it.size_hint(),
        }
    }
}

impl<T: Float> AnyVector<T> {
    pub fn storage_kind(&self) -> StorageKind {
        match self {
            AnyVector::Dense(_) => StorageKind::Dense,
            AnyVector::Sparse(_) => StorageKind::Sparse,
        }
    }
}

impl<T: Float> VectorAccess for AnyVector<T> {
    type Scalar = T;
    type ActiveIndices<'a>
        = AnyIndices<'a, T>
    where
        Self: 'a;

    fn size(&self) -> usize {
        match self {
            AnyVector::Dense(v) => v.size(),
            AnyVector::Sparse(v) => v.size(),
        }
    }

    fn raw_value(&self, index: usize) -> T {
        match self {
            AnyVector::Dense(v) => v.raw_value(index),
            AnyVector::Sparse(v) => v.raw_value(index),
        }
    }

    fn raw_update(&mut self, index: usize, delta: T) {
        match self {
            AnyVector::Dense(v) => v.raw_update(index, delta),
            AnyVector::Sparse(v) => v.raw_update(index, delta),
        }
    }

    fn raw_reset(&mut self, index: usize, value: T) {
        match self {
            AnyVector::Dense(v) => v.raw_reset(index, value),
            AnyVector::Sparse(v) => v.raw_reset(index, value),
        }
    }

    fn active_indices(&self) -> AnyIndices<'_, T> {
        match self {
            AnyVector::Dense(v) => AnyIndices::Dense(v.active_indices()),
            AnyVector::Sparse(v) => AnyIndices::Sparse(v.active_indices()),
        }
    }

    fn norm_cache(&self) -> &NormCache<T> {
        match self {
            AnyVector::Dense(v) => v.norm_cache(),
            AnyVector::Sparse(v) => v.norm_cache(),
        }
    }
}

impl<T: Float> From<DenseVector<T>> for AnyVector<T> {
    fn from(v: DenseVector<T>) -> Self {
        AnyVector::Dense(v)
    }
}

impl<T: Float> From<SparseVector<T>> for AnyVector<T> {
    fn from(v: SparseVector<T>) -> Self {
        AnyVector::Sparse(v)
    }
}

impl<T: Float + fmt::Debug> fmt::Display for AnyVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyVector::Dense(v) => fmt::Display::fmt(v, f),
            AnyVector::Sparse(v) => fmt::Display::fmt(v, f),
        }
    }
}
