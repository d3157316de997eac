//! In-place arithmetic combinators shared by every vector storage.
//!
//! Scalar forms write with absolute-writes; vector forms accumulate the other vector's active
//! entries. Every combinator returns `&mut Self` so calls chain. The vector forms validate the
//! other vector's active indices before the first write, so a failed call leaves `self` as it was.

use num_traits::Zero;
use tracing::debug;

use crate::core::norms::VectorNorms;
use crate::core::traits::VectorAccess;
use crate::error::LvError;

fn check_fits<O: VectorAccess + ?Sized>(other: &O, size: usize) -> Result<(), LvError> {
    match other.active_indices().find(|&i| i >= size) {
        Some(index) => Err(LvError::IndexOutOfBounds { index, size }),
        None => Ok(()),
    }
}

/// Arithmetic over any `VectorAccess` type.
pub trait VectorArithmetic: VectorAccess {
    /// Multiply every active value by `factor`.
    fn times_equals(&mut self, factor: Self::Scalar) -> &mut Self {
        let active: Vec<usize> = self.active_indices().collect();
        for i in active {
            let v = self.raw_value(i) * factor;
            self.raw_reset(i, v);
        }
        self
    }

    /// Add `value` to every index in `[0, size)`, not just the active ones.
    fn plus_equals(&mut self, value: Self::Scalar) -> &mut Self {
        for i in 0..self.size() {
            let v = self.raw_value(i) + value;
            self.raw_reset(i, v);
        }
        self
    }

    /// Subtract `value` from the active indices only.
    fn minus_equals(&mut self, value: Self::Scalar) -> &mut Self {
        let active: Vec<usize> = self.active_indices().collect();
        for i in active {
            let v = self.raw_value(i) - value;
            self.raw_reset(i, v);
        }
        self
    }

    /// `self += other`
    fn plus_equals_vector<O>(&mut self, other: &O) -> Result<&mut Self, LvError>
    where
        O: VectorAccess<Scalar = Self::Scalar> + ?Sized,
    {
        check_fits(other, self.size())?;
        for i in other.active_indices() {
            self.raw_update(i, other.raw_value(i));
        }
        Ok(self)
    }

    /// `self -= other`
    fn minus_equals_vector<O>(&mut self, other: &O) -> Result<&mut Self, LvError>
    where
        O: VectorAccess<Scalar = Self::Scalar> + ?Sized,
    {
        check_fits(other, self.size())?;
        for i in other.active_indices() {
            self.raw_update(i, -other.raw_value(i));
        }
        Ok(self)
    }

    /// `self += factor * other`
    fn plus_equals_vector_times<O>(
        &mut self,
        other: &O,
        factor: Self::Scalar,
    ) -> Result<&mut Self, LvError>
    where
        O: VectorAccess<Scalar = Self::Scalar> + ?Sized,
    {
        check_fits(other, self.size())?;
        for i in other.active_indices() {
            self.raw_update(i, other.raw_value(i) * factor);
        }
        Ok(self)
    }

    /// `self -= factor * other`
    fn minus_equals_vector_times<O>(
        &mut self,
        other: &O,
        factor: Self::Scalar,
    ) -> Result<&mut Self, LvError>
    where
        O: VectorAccess<Scalar = Self::Scalar> + ?Sized,
    {
        check_fits(other, self.size())?;
        for i in other.active_indices() {
            self.raw_update(i, -other.raw_value(i) * factor);
        }
        Ok(self)
    }

    /// Scale the active values so their absolute sum is one. The zero vector is left alone.
    fn abs_normalize(&mut self) -> &mut Self {
        let norm = self.l1_norm();
        if norm > Self::Scalar::zero() {
            let active: Vec<usize> = self.active_indices().collect();
            for i in active {
                let v = self.raw_value(i) / norm;
                self.raw_reset(i, v);
            }
        } else {
            debug!(size = self.size(), "abs_normalize skipped: zero L1 norm");
        }
        self
    }

    /// Inner product over the active indices of `other`.
    fn dot<O>(&self, other: &O) -> Result<Self::Scalar, LvError>
    where
        O: VectorAccess<Scalar = Self::Scalar> + ?Sized,
    {
        check_fits(other, self.size())?;
        Ok(other
            .active_indices()
            .fold(Self::Scalar::zero(), |acc, i| acc + self.raw_value(i) * other.raw_value(i)))
    }
}

impl<V: VectorAccess + ?Sized> VectorArithmetic for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::LinearVector;
    use crate::vector::{DenseVector, SparseVector};

    #[test]
    fn times_equals_touches_active_only() {
        let mut v = SparseVector::from_pairs(6, [(1, 2.0), (4, -3.0)]).unwrap();
        v.times_equals(2.0);
        assert_eq!(v.get_w(), vec![0.0, 4.0, 0.0, 0.0, -6.0, 0.0]);
        assert_eq!(v.nnz(), 2);
    }

    #[test]
    fn plus_equals_scalar_activates_everything() {
        let mut v = SparseVector::from_pairs(4, [(2, 1.0)]).unwrap();
        v.plus_equals(0.5);
        assert_eq!(v.nnz(), 4);
        assert_eq!(v.get_w(), vec![0.5, 0.5, 1.5, 0.5]);
    }

    #[test]
    fn minus_equals_scalar_is_active_only() {
        let mut v = SparseVector::from_pairs(4, [(2, 1.0)]).unwrap();
        v.minus_equals(0.5);
        assert_eq!(v.get_w(), vec![0.0, 0.0, 0.5, 0.0]);
        // values come back, but every index is now stored
        v.plus_equals(0.5).minus_equals(0.5);
        assert_eq!(v.get_w(), vec![0.0, 0.0, 0.5, 0.0]);
        assert_eq!(v.nnz(), 4);
    }

    #[test]
    fn vector_forms_accumulate_and_chain() {
        let mut w = DenseVector::from_vec(vec![1.0, 1.0, 1.0]);
        let x = SparseVector::from_pairs(3, [(0, 2.0), (2, 4.0)]).unwrap();
        w.plus_equals_vector(&x)
            .unwrap()
            .minus_equals_vector_times(&x, 0.5)
            .unwrap();
        assert_eq!(w.get_w(), vec![2.0, 1.0, 3.0]);
        w.minus_equals_vector(&x).unwrap().plus_equals_vector_times(&x, 2.0).unwrap();
        assert_eq!(w.get_w(), vec![4.0, 1.0, 7.0]);
    }

    #[test]
    fn vector_forms_reject_foreign_indices_without_writing() {
        let mut w = DenseVector::from_vec(vec![1.0, 1.0]);
        let x = SparseVector::from_pairs(5, [(0, 1.0), (4, 1.0)]).unwrap();
        let err = w.plus_equals_vector(&x).unwrap_err();
        assert_eq!(err, LvError::IndexOutOfBounds { index: 4, size: 2 });
        assert_eq!(w.get_w(), vec![1.0, 1.0]);
        assert!(w.dot(&x).is_err());
    }

    #[test]
    fn longer_other_with_fitting_support_is_accepted() {
        let mut w = DenseVector::<f64>::new(2);
        let x = SparseVector::from_pairs(10, [(1, 3.0)]).unwrap();
        w.plus_equals_vector(&x).unwrap();
        assert_eq!(w.get_w(), vec![0.0, 3.0]);
    }

    #[test]
    fn abs_normalize_scales_to_unit_l1() {
        let mut v = SparseVector::<f64>::from_pairs(8, [(0, 3.0), (5, -1.0)]).unwrap();
        v.abs_normalize();
        assert!((v.l1_norm() - 1.0).abs() < 1e-12);
        assert_eq!(v.get_value(5).unwrap(), -0.25);

        let mut zero = DenseVector::<f64>::new(3);
        zero.abs_normalize();
        assert_eq!(zero.get_w(), vec![0.0; 3]);
    }

    #[test]
    fn dot_uses_other_support() {
        let w = DenseVector::from_vec(vec![1.0, 2.0, 3.0]);
        let x = SparseVector::from_pairs(3, [(1, 10.0), (2, -1.0)]).unwrap();
        assert_eq!(w.dot(&x).unwrap(), 17.0);
        assert_eq!(x.dot(&w).unwrap(), 17.0);
    }
}
