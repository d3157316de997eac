//! Core vector traits for linvec.
//!
//! `VectorAccess` is the only seam between storage and algebra: a dense array, a hash map or
//! anything else becomes a full linear vector by implementing it. `LinearVector` layers the
//! bounds-checked accessors, bulk assignment and rendering on top and is implemented for every
//! `VectorAccess` type.

use std::fmt;

use num_traits::{Float, One};

use crate::core::norms::NormCache;
use crate::core::scaling::ValueScaling;
use crate::error::LvError;

/// Storage protocol for a fixed-dimension vector.
///
/// The `raw_*` accessors are only ever called with `index < self.size()`; implementations may
/// panic otherwise.
pub trait VectorAccess {
    /// Associated scalar type.
    type Scalar: Float;
    /// Lazy pass over the active indices.
    type ActiveIndices<'a>: Iterator<Item = usize>
    where
        Self: 'a;

    /// Fixed dimension of the vector.
    fn size(&self) -> usize;
    /// Stored value at `index` (zero when nothing is stored).
    fn raw_value(&self, index: usize) -> Self::Scalar;
    /// Accumulate-write: add `delta` to the value at `index`.
    fn raw_update(&mut self, index: usize, delta: Self::Scalar);
    /// Absolute-write: overwrite the value at `index`.
    fn raw_reset(&mut self, index: usize, value: Self::Scalar);
    /// Start a fresh pass over the active indices. Each index appears at most once.
    fn active_indices(&self) -> Self::ActiveIndices<'_>;
    /// Lazily filled norm slots owned by this vector.
    fn norm_cache(&self) -> &NormCache<Self::Scalar>;
}

pub(crate) fn check_index(index: usize, size: usize) -> Result<(), LvError> {
    if index < size {
        Ok(())
    } else {
        Err(LvError::IndexOutOfBounds { index, size })
    }
}

/// Bounds-checked access, bulk assignment and rendering for any `VectorAccess` type.
pub trait LinearVector: VectorAccess {
    /// Value at `index`.
    fn get_value(&self, index: usize) -> Result<Self::Scalar, LvError> {
        check_index(index, self.size())?;
        Ok(self.raw_value(index))
    }

    /// Value at `index` passed through `scaling`.
    fn get_scaled_value<S>(&self, scaling: &S, index: usize) -> Result<Self::Scalar, LvError>
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        self.get_value(index).map(|v| scaling.scale(v))
    }

    /// Add `delta` to the value at `index`.
    fn update_value(&mut self, index: usize, delta: Self::Scalar) -> Result<(), LvError> {
        check_index(index, self.size())?;
        self.raw_update(index, delta);
        Ok(())
    }

    /// Overwrite the value at `index`.
    fn reset_value(&mut self, index: usize, value: Self::Scalar) -> Result<(), LvError> {
        check_index(index, self.size())?;
        self.raw_reset(index, value);
        Ok(())
    }

    /// Accumulate `values[i]` into position `i` for every input position.
    ///
    /// This adds rather than assigns, so it only behaves as a "set" on a zero vector. Inputs
    /// longer than the dimension are rejected before anything is written.
    fn set_w<I>(&mut self, values: I) -> Result<(), LvError>
    where
        I: IntoIterator<Item = Self::Scalar>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        let len = values.len();
        if len > self.size() {
            return Err(LvError::IndexOutOfBounds {
                index: len - 1,
                size: self.size(),
            });
        }
        for (i, v) in values.enumerate() {
            self.raw_update(i, v);
        }
        Ok(())
    }

    /// Dense copy of every coordinate, implicit zeros included.
    fn get_w(&self) -> Vec<Self::Scalar> {
        (0..self.size()).map(|i| self.raw_value(i)).collect()
    }

    /// Dense copy followed by `bias_terms` trailing ones.
    ///
    /// # Panics
    ///
    /// Panics if `size() + bias_terms` overflows `usize`.
    fn get_w_bias(&self, bias_terms: usize) -> Vec<Self::Scalar> {
        let n = self.size();
        let Some(len) = n.checked_add(bias_terms) else {
            panic!("{bias_terms} bias terms overflow a vector of dimension {n}");
        };
        let mut out = Vec::with_capacity(len);
        out.extend((0..n).map(|i| self.raw_value(i)));
        out.resize(len, Self::Scalar::one());
        out
    }

    /// `get_w_bias` with a single bias term.
    fn get_w_bias_default(&self) -> Vec<Self::Scalar> {
        self.get_w_bias(1)
    }

    /// Writes `index:value` pairs for the active indices, comma separated, in iteration order.
    fn fmt_active(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        Self::Scalar: fmt::Debug,
    {
        for (k, i) in self.active_indices().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{:?}", i, self.raw_value(i))?;
        }
        Ok(())
    }

    /// The `fmt_active` text as an owned string.
    fn render(&self) -> String
    where
        Self::Scalar: fmt::Debug,
    {
        ActiveEntries(self).to_string()
    }
}

impl<V: VectorAccess + ?Sized> LinearVector for V {}

struct ActiveEntries<'a, V: ?Sized>(&'a V);

impl<V> fmt::Display for ActiveEntries<'_, V>
where
    V: LinearVector + ?Sized,
    V::Scalar: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_active(f)
    }
}
