//! linvec: dense and sparse linear vectors over one generic algebra engine
//!
//! This crate provides the numeric vector primitive used by linear learners: a small access
//! protocol that any storage can implement, and in-place arithmetic, bias augmentation and
//! (lazily cached) norm computation written once against that protocol.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod vector;

// Re-exports for convenience
pub use self::config::*;
pub use self::context::*;
pub use self::core::*;
pub use self::error::*;
pub use self::vector::*;
