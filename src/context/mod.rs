//! Context module for linvec.
//!
//! This module provides the factory type that turns options into vectors and runs the configured
//! norm queries on them.
//!
//! Modules:
//! - [`vector_context`]: `VectorContext`, `StorageKind` and `ScalingKind`.
//!
//! # Example
//! ```rust
//! use linvec::context::{ScalingKind, StorageKind, VectorContext};
//! use linvec::core::VectorNorms;
//!
//! let ctx = VectorContext::new(StorageKind::Sparse, ScalingKind::Unscaled, 3);
//! let v = ctx.build(&[3.0, 0.0, -4.0]).unwrap();
//! assert_eq!(v.l2_norm(), 5.0);
//! ```

pub mod vector_context;
pub use vector_context::{NormSummary, ScalingKind, StorageKind, VectorContext};
