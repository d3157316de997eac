//! Configuration: plain option structs filled in by callers.

pub mod options;
pub use options::VectorOptions;
