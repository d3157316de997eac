//! Factory for linear vectors.
//!
//! This module provides the `VectorContext` struct, which holds a storage layout, a value scaling,
//! a dimension and a bias width, builds vectors accordingly and runs the configured norm queries
//! on them.
//!
//! # Usage
//!
//! 1. Build a context directly or from `VectorOptions`.
//! 2. Call `zeros` or `build` to obtain an `AnyVector`.
//! 3. Use `features` for bias-augmented dense rows and `norm_summary` for the cached norms.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use tracing::{debug, instrument};

use crate::config::options::VectorOptions;
use crate::core::norms::VectorNorms;
use crate::core::scaling::{BinaryScaling, LogScaling, Unscaled, ValueScaling};
use crate::core::traits::{LinearVector, VectorAccess};
use crate::error::LvError;
use crate::vector::{AnyVector, DenseVector, SparseVector};

/// Enum representing the available storage layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Contiguous array; every index is active
    Dense,
    /// Index map; only stored entries are active
    Sparse,
}

impl FromStr for StorageKind {
    type Err = LvError;

    fn from_str(s: &str) -> Result<Self, LvError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(StorageKind::Dense),
            "sparse" => Ok(StorageKind::Sparse),
            other => Err(LvError::Unsupported(format!("storage '{other}'"))),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StorageKind::Dense => "dense",
            StorageKind::Sparse => "sparse",
        })
    }
}

/// Enum representing the built-in value scalings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingKind {
    /// Identity
    #[default]
    Unscaled,
    /// sign(v)·ln(1 + |v|)
    Log,
    /// Non-zero becomes one
    Binary,
}

impl FromStr for ScalingKind {
    type Err = LvError;

    fn from_str(s: &str) -> Result<Self, LvError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unscaled" | "none" => Ok(ScalingKind::Unscaled),
            "log" | "logscaled" => Ok(ScalingKind::Log),
            "binary" => Ok(ScalingKind::Binary),
            other => Err(LvError::Unsupported(format!("scaling '{other}'"))),
        }
    }
}

impl<T: Float> ValueScaling<T> for ScalingKind {
    fn scale(&self, value: T) -> T {
        match self {
            ScalingKind::Unscaled => Unscaled.scale(value),
            ScalingKind::Log => LogScaling.scale(value),
            ScalingKind::Binary => BinaryScaling.scale(value),
        }
    }
}

/// The four cached norms of one vector.
#[derive(Clone, Debug, PartialEq)]
pub struct NormSummary<T> {
    pub l0: T,
    pub l1: T,
    pub l2: T,
    pub linf: T,
}

/// Settings shared by every vector a caller builds.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorContext {
    /// Storage layout for new vectors
    pub storage: StorageKind,
    /// Scaling passed to the cached norm queries
    pub scaling: ScalingKind,
    /// Dimension of new vectors
    pub dimension: usize,
    /// Bias entries appended by `features`
    pub bias_terms: usize,
}

impl VectorContext {
    /// Context with one bias term.
    pub fn new(storage: StorageKind, scaling: ScalingKind, dimension: usize) -> Self {
        Self {
            storage,
            scaling,
            dimension,
            bias_terms: 1,
        }
    }

    /// Parse string options into a context.
    #[instrument(
        skip(opts),
        fields(storage = %opts.storage, scaling = %opts.scaling, dimension = opts.dimension)
    )]
    pub fn from_options(opts: &VectorOptions) -> Result<Self, LvError> {
        let storage: StorageKind = opts.storage.parse()?;
        let scaling: ScalingKind = opts.scaling.parse()?;
        debug!(%storage, ?scaling, "vector context configured");
        Ok(Self {
            storage,
            scaling,
            dimension: opts.dimension,
            bias_terms: opts.bias_terms,
        })
    }

    /// Zero vector with the configured layout and dimension.
    pub fn zeros<T: Float>(&self) -> AnyVector<T> {
        match self.storage {
            StorageKind::Dense => AnyVector::Dense(DenseVector::new(self.dimension)),
            StorageKind::Sparse => AnyVector::Sparse(SparseVector::new(self.dimension)),
        }
    }

    /// Vector holding `values` in its leading positions. Sparse layouts skip zeros.
    pub fn build<T: Float>(&self, values: &[T]) -> Result<AnyVector<T>, LvError> {
        match self.storage {
            StorageKind::Dense => {
                let mut v = DenseVector::new(self.dimension);
                v.set_w(values.iter().copied())?;
                Ok(AnyVector::Dense(v))
            }
            StorageKind::Sparse => {
                if values.len() > self.dimension {
                    return Err(LvError::IndexOutOfBounds {
                        index: values.len() - 1,
                        size: self.dimension,
                    });
                }
                let nonzero = values
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|&(_, x)| x != T::zero());
                Ok(AnyVector::Sparse(SparseVector::from_pairs(self.dimension, nonzero)?))
            }
        }
    }

    /// Dense row with the configured number of bias entries.
    pub fn features<V: VectorAccess + ?Sized>(&self, v: &V) -> Vec<V::Scalar> {
        v.get_w_bias(self.bias_terms)
    }

    /// Cached norms of `v` under the configured scaling.
    ///
    /// Slots that were already filled keep their earlier value, whatever scaling produced it.
    pub fn norm_summary<V: VectorAccess + ?Sized>(&self, v: &V) -> NormSummary<V::Scalar> {
        NormSummary {
            l0: v.compute_l0_norm_scaled(&self.scaling),
            l1: v.compute_l1_norm_scaled(&self.scaling),
            l2: v.compute_l2_norm_scaled(&self.scaling),
            linf: v.compute_linf_norm_scaled(&self.scaling),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_options() {
        let opts = VectorOptions {
            storage: " Sparse ".into(),
            scaling: "binary".into(),
            dimension: 6,
            bias_terms: 2,
        };
        let ctx = VectorContext::from_options(&opts).unwrap();
        assert_eq!(ctx.storage, StorageKind::Sparse);
        assert_eq!(ctx.scaling, ScalingKind::Binary);
        assert_eq!(ctx.dimension, 6);
        assert_eq!(ctx.bias_terms, 2);

        let defaults = VectorContext::from_options(&VectorOptions::default()).unwrap();
        assert_eq!(defaults, VectorContext::new(StorageKind::Dense, ScalingKind::Unscaled, 0));
    }

    #[test]
    fn unknown_names_are_unsupported() {
        let bad = VectorOptions {
            storage: "ragged".into(),
            ..Default::default()
        };
        assert!(matches!(VectorContext::from_options(&bad), Err(LvError::Unsupported(_))));
        assert!("sqrt".parse::<ScalingKind>().is_err());
    }

    #[test]
    fn build_respects_layout() {
        let dense = VectorContext::new(StorageKind::Dense, ScalingKind::Unscaled, 4);
        let v = dense.build(&[1.0, 0.0, 2.0]).unwrap();
        assert_eq!(v.storage_kind(), StorageKind::Dense);
        assert_eq!(v.l0_norm(), 4.0);
        assert_eq!(dense.features(&v), vec![1.0, 0.0, 2.0, 0.0, 1.0]);

        let sparse = VectorContext {
            storage: StorageKind::Sparse,
            ..dense.clone()
        };
        let s = sparse.build(&[1.0, 0.0, 2.0]).unwrap();
        assert_eq!(s.storage_kind(), StorageKind::Sparse);
        assert_eq!(s.l0_norm(), 2.0);
        assert_eq!(s.get_w(), v.get_w());

        assert!(sparse.build(&[1.0; 5]).is_err());
        assert!(dense.build(&[1.0; 5]).is_err());
        assert_eq!(sparse.zeros::<f32>().get_w(), vec![0.0; 4]);
    }

    #[test]
    fn summary_uses_configured_scaling() {
        let ctx = VectorContext::new(StorageKind::Sparse, ScalingKind::Binary, 5);
        let v = ctx.build(&[0.0, -3.0, 0.0, 7.0]).unwrap();
        let s = ctx.norm_summary(&v);
        assert_eq!(
            s,
            NormSummary {
                l0: 2.0,
                l1: 3.0,
                l2: 2f64.sqrt(),
                linf: 1.0,
            }
        );
        let unscaled = VectorContext {
            scaling: ScalingKind::Unscaled,
            ..ctx
        };
        assert_eq!(unscaled.norm_summary(&v), s);
    }
}
