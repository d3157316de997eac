//! Dense vector storage on top of a contiguous `Vec<T>`.
//!
//! Every index is active, so the generic engine visits `0..size` in ascending order. Conversion
//! to and from single-column `faer::Mat` lets the same data feed faer-based solvers.

use std::fmt;
use std::ops::Range;

use faer::Mat;
use num_traits::Float;

use crate::core::norms::NormCache;
use crate::core::traits::{LinearVector, VectorAccess};
use crate::error::LvError;

/// Array-backed vector.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseVector<T: Float> {
    data: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    cache: NormCache<T>,
}

impl<T: Float> DenseVector<T> {
    /// Zero vector of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self::from_vec(vec![T::zero(); dimension])
    }

    /// Zero vector from a signed dimension; negative values are rejected.
    pub fn try_new(dimension: i64) -> Result<Self, LvError> {
        if dimension < 0 {
            return Err(LvError::NegativeDimension(dimension));
        }
        Ok(Self::new(dimension as usize))
    }

    /// Take ownership of existing values.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            cache: NormCache::new(),
        }
    }

    /// Copy the single column of `m`.
    pub fn from_column(m: &Mat<T>) -> Result<Self, LvError> {
        if m.ncols() != 1 {
            return Err(LvError::InvalidArgument(format!(
                "expected a single column, got {}x{}",
                m.nrows(),
                m.ncols()
            )));
        }
        Ok(Self::from_vec((0..m.nrows()).map(|i| m[(i, 0)]).collect()))
    }

    /// Copy into an n×1 faer matrix.
    pub fn to_column(&self) -> Mat<T> {
        Mat::from_fn(self.data.len(), 1, |i, _| self.data[i])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Float> VectorAccess for DenseVector<T> {
    type Scalar = T;
    type ActiveIndices<'a>
        = Range<usize>
    where
        Self: 'a;

    fn size(&self) -> usize {
        self.data.len()
    }

    fn raw_value(&self, index: usize) -> T {
        self.data[index]
    }

    fn raw_update(&mut self, index: usize, delta: T) {
        self.data[index] = self.data[index] + delta;
    }

    fn raw_reset(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    fn active_indices(&self) -> Range<usize> {
        0..self.data.len()
    }

    fn norm_cache(&self) -> &NormCache<T> {
        &self.cache
    }
}

impl<T: Float> From<Vec<T>> for DenseVector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Float> AsRef<[T]> for DenseVector<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Float + fmt::Debug> fmt::Display for DenseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_active(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_dimension_is_rejected() {
        assert_eq!(DenseVector::<f64>::try_new(-1).unwrap_err(), LvError::NegativeDimension(-1));
        assert_eq!(DenseVector::<f64>::try_new(0).unwrap().size(), 0);
        assert_eq!(DenseVector::<f32>::try_new(4).unwrap().get_w(), vec![0.0; 4]);
    }

    #[test]
    fn dense_iterates_every_index_in_order() {
        let v = DenseVector::from_vec(vec![0.0, 2.0, 0.0]);
        assert_eq!(v.active_indices().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(v.to_string(), "0:0.0, 1:2.0, 2:0.0");
    }

    #[test]
    fn faer_column_round_trip() {
        let v = DenseVector::from_vec(vec![1.0, -2.0, 3.5]);
        let col = v.to_column();
        assert_eq!(col.nrows(), 3);
        assert_eq!(col.ncols(), 1);
        assert_eq!(col[(1, 0)], -2.0);
        let back = DenseVector::from_column(&col).unwrap();
        assert_eq!(back.as_slice(), v.as_slice());

        let wide = Mat::<f64>::zeros(2, 2);
        assert!(matches!(DenseVector::from_column(&wide), Err(LvError::InvalidArgument(_))));
    }
}
