//! Per-coordinate value scalings.
//!
//! A scaling is a pure function applied to each stored value before it is accumulated into a
//! norm. `Unscaled` is the identity and is what every parameterless norm query uses.

use num_traits::Float;

/// Transform applied to a single coordinate before norm accumulation.
pub trait ValueScaling<T> {
    /// Scale one value.
    fn scale(&self, value: T) -> T;
}

/// Identity scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unscaled;

impl<T: Float> ValueScaling<T> for Unscaled {
    fn scale(&self, value: T) -> T {
        value
    }
}

/// Sign-preserving log damping: `sign(v) * ln(1 + |v|)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogScaling;

impl<T: Float> ValueScaling<T> for LogScaling {
    fn scale(&self, value: T) -> T {
        if value == T::zero() {
            return value;
        }
        value.signum() * value.abs().ln_1p()
    }
}

/// Presence indicator: any non-zero value becomes one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BinaryScaling;

impl<T: Float> ValueScaling<T> for BinaryScaling {
    fn scale(&self, value: T) -> T {
        if value != T::zero() {
            T::one()
        } else {
            T::zero()
        }
    }
}

/// Adapts an arbitrary closure into a scaling.
#[derive(Clone, Copy)]
pub struct FnScaling<F>(pub F);

impl<T, F> ValueScaling<T> for FnScaling<F>
where
    F: Fn(T) -> T,
{
    fn scale(&self, value: T) -> T {
        (self.0)(value)
    }
}

impl<F> std::fmt::Debug for FnScaling<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnScaling(..)")
    }
}
