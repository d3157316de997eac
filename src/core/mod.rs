//! Core vector algebra: the access protocol and the engines built on it.

pub mod arithmetic;
pub mod norms;
pub mod scaling;
pub mod traits;

pub use arithmetic::VectorArithmetic;
pub use norms::{NormCache, NormKind, VectorNorms};
pub use scaling::{BinaryScaling, FnScaling, LogScaling, Unscaled, ValueScaling};
pub use traits::{LinearVector, VectorAccess};
