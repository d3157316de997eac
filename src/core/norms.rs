//! Norm computation and the per-vector lazy norm cache.
//!
//! Two families live side by side:
//!
//! - Fresh norms (`l0_norm`, `l1_norm`, `l2_norm`, `linf_norm`, `lp_norm`,
//!   `compute_lp_norm_scaled`) walk the active indices on every call and never touch the cache.
//! - Cached norms (`compute_l0_norm_scaled` and friends) fill their slot on first use and return
//!   the stored value from then on. The slot is neither keyed by scaling nor invalidated by
//!   mutation: a later call with another scaling, or after the vector changed, returns the
//!   first value. `NormCache::forget` is the only way to clear a slot.
//!
//! The cached forms keep their historical definitions: L0 counts entries whose scaled
//! magnitude is strictly positive (the fresh L0 counts active indices), and the L1
//! accumulator starts at one.

use std::cell::Cell;
use std::fmt;

use bitflags::bitflags;
use num_traits::{Float, One, ToPrimitive, Zero};
use tracing::{debug, trace};

use crate::core::scaling::{Unscaled, ValueScaling};
use crate::core::traits::VectorAccess;
use crate::error::LvError;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct NormKind: u8 {
        const L0   = 0b0001;
        const L1   = 0b0010;
        const L2   = 0b0100;
        const LINF = 0b1000;
    }
}

const SLOTS: usize = 4;

fn slot_of(kind: NormKind) -> Option<usize> {
    let bits = kind.bits();
    (bits.count_ones() == 1).then(|| bits.trailing_zeros() as usize)
}

/// Lazily filled L0/L1/L2/L∞ slots. Each slot is unset until its norm is first computed.
pub struct NormCache<T> {
    slots: [Cell<Option<T>>; SLOTS],
}

impl<T: Copy> NormCache<T> {
    /// All slots unset.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Cell::new(None)),
        }
    }

    /// Cached value of a single norm kind, if computed. Composite kinds yield `None`.
    pub fn get(&self, kind: NormKind) -> Option<T> {
        slot_of(kind).and_then(|k| self.slots[k].get())
    }

    /// Which slots currently hold a value.
    pub fn cached(&self) -> NormKind {
        NormKind::all().iter().filter(|&k| self.get(k).is_some()).collect()
    }

    /// Clear every slot named in `kinds`.
    pub fn forget(&self, kinds: NormKind) {
        for k in kinds.iter().filter_map(slot_of) {
            self.slots[k].set(None);
        }
    }

    pub(crate) fn get_or_compute(&self, kind: NormKind, compute: impl FnOnce() -> T) -> T
    where
        T: ToPrimitive,
    {
        let Some(k) = slot_of(kind) else {
            return compute();
        };
        if let Some(v) = self.slots[k].get() {
            return v;
        }
        let v = compute();
        self.slots[k].set(Some(v));
        trace!(norm = ?kind, value = ?v.to_f64(), "norm cached");
        v
    }
}

impl<T: Copy> Default for NormCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Clone for NormCache<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for NormCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormCache")
            .field("l0", &self.slots[0].get())
            .field("l1", &self.slots[1].get())
            .field("l2", &self.slots[2].get())
            .field("linf", &self.slots[3].get())
            .finish()
    }
}

/// Norm queries for any `VectorAccess` type.
pub trait VectorNorms: VectorAccess {
    /// Fresh, unscaled Lp norm. `p` must be strictly positive.
    fn lp_norm(&self, p: Self::Scalar) -> Result<Self::Scalar, LvError> {
        if !(p > Self::Scalar::zero()) {
            debug!(p = ?p.to_f64(), "rejected non-positive Lp exponent");
            return Err(LvError::InvalidArgument(format!(
                "p must be greater than 0. given: {}",
                p.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(self.compute_lp_norm_scaled(p, &Unscaled))
    }

    /// Number of active indices.
    fn l0_norm(&self) -> Self::Scalar {
        self.active_indices()
            .fold(Self::Scalar::zero(), |acc, _| acc + Self::Scalar::one())
    }

    /// Sum of absolute values.
    fn l1_norm(&self) -> Self::Scalar {
        self.active_indices()
            .fold(Self::Scalar::zero(), |acc, i| acc + self.raw_value(i).abs())
    }

    /// Euclidean norm.
    fn l2_norm(&self) -> Self::Scalar {
        self.active_indices()
            .fold(Self::Scalar::zero(), |acc, i| {
                let v = self.raw_value(i);
                acc + v * v
            })
            .sqrt()
    }

    /// Largest absolute value; zero when nothing is active.
    fn linf_norm(&self) -> Self::Scalar {
        let mut max = Self::Scalar::zero();
        for i in self.active_indices() {
            let next = self.raw_value(i).abs();
            if next > max {
                max = next;
            }
        }
        max
    }

    /// Fresh Lp norm of the scaled values. `p` is not validated.
    fn compute_lp_norm_scaled<S>(&self, p: Self::Scalar, scaling: &S) -> Self::Scalar
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        let total = self.active_indices().fold(Self::Scalar::zero(), |acc, i| {
            acc + scaling.scale(self.raw_value(i)).abs().powf(p)
        });
        total.powf(Self::Scalar::one() / p)
    }

    /// `compute_lp_norm_scaled` with the identity scaling.
    fn compute_lp_norm(&self, p: Self::Scalar) -> Self::Scalar {
        self.compute_lp_norm_scaled(p, &Unscaled)
    }

    /// Cached count of entries whose scaled magnitude is positive.
    fn compute_l0_norm_scaled<S>(&self, scaling: &S) -> Self::Scalar
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        self.norm_cache().get_or_compute(NormKind::L0, || {
            let zero = Self::Scalar::zero();
            self.active_indices()
                .filter(|&i| scaling.scale(self.raw_value(i)).abs() > zero)
                .fold(zero, |acc, _| acc + Self::Scalar::one())
        })
    }

    fn compute_l0_norm(&self) -> Self::Scalar {
        self.compute_l0_norm_scaled(&Unscaled)
    }

    /// Cached sum of scaled magnitudes, accumulated from one.
    fn compute_l1_norm_scaled<S>(&self, scaling: &S) -> Self::Scalar
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        self.norm_cache().get_or_compute(NormKind::L1, || {
            self.active_indices().fold(Self::Scalar::one(), |acc, i| {
                acc + scaling.scale(self.raw_value(i)).abs()
            })
        })
    }

    fn compute_l1_norm(&self) -> Self::Scalar {
        self.compute_l1_norm_scaled(&Unscaled)
    }

    /// Cached Euclidean norm of the scaled values.
    fn compute_l2_norm_scaled<S>(&self, scaling: &S) -> Self::Scalar
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        self.norm_cache().get_or_compute(NormKind::L2, || {
            self.active_indices()
                .fold(Self::Scalar::zero(), |acc, i| {
                    let v = scaling.scale(self.raw_value(i));
                    acc + v * v
                })
                .sqrt()
        })
    }

    fn compute_l2_norm(&self) -> Self::Scalar {
        self.compute_l2_norm_scaled(&Unscaled)
    }

    /// Cached largest scaled magnitude.
    fn compute_linf_norm_scaled<S>(&self, scaling: &S) -> Self::Scalar
    where
        S: ValueScaling<Self::Scalar> + ?Sized,
    {
        self.norm_cache().get_or_compute(NormKind::LINF, || {
            let mut max = Self::Scalar::zero();
            for i in self.active_indices() {
                let next = scaling.scale(self.raw_value(i)).abs();
                if next > max {
                    max = next;
                }
            }
            max
        })
    }

    fn compute_linf_norm(&self) -> Self::Scalar {
        self.compute_linf_norm_scaled(&Unscaled)
    }
}

impl<V: VectorAccess + ?Sized> VectorNorms for V {}
