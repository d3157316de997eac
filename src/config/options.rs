//! Command-line or API options for building vectors.
//!
//! This module provides the `VectorOptions` struct, which carries the storage layout, the value
//! scaling used by norm queries, the dimension and the number of bias terms as plain values.
//! `VectorContext::from_options` turns them into typed settings.

/// Vector layout & norm parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorOptions {
    /// Storage layout (dense, sparse)
    pub storage: String,

    /// Value scaling for norm queries (unscaled, log, binary)
    pub scaling: String,

    /// Dimension of every vector built from these options
    pub dimension: usize,

    /// Trailing constant entries appended by bias augmentation
    pub bias_terms: usize,
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            storage: "dense".to_string(),
            scaling: "unscaled".to_string(),
            dimension: 0,
            bias_terms: 1,
        }
    }
}
