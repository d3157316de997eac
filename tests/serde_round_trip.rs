//! Serialization round trips (requires the `serde` feature).
#![cfg(feature = "serde")]

use std::collections::HashMap;

use linvec::core::{LinearVector, VectorAccess, VectorNorms};
use linvec::vector::{DenseVector, SparseVector};

#[test]
fn sparse_round_trip_keeps_dimension_and_entries() {
    let v = SparseVector::from_pairs(1000, [(3, 1.5), (999, -2.0), (10, 0.0)]).unwrap();
    v.compute_l2_norm();
    let bytes = bincode::serialize(&v).unwrap();
    let back: SparseVector<f64> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back.size(), 1000);
    assert_eq!(back.nnz(), 3);
    assert_eq!(back.get_value(999).unwrap(), -2.0);
    assert!(back.norm_cache().cached().is_empty());
}

/// A stored index at or past the serialized dimension is rejected on the way in.
#[test]
fn sparse_entries_outside_dimension_are_rejected() {
    let entries = HashMap::from([(7usize, 5.0f64)]);
    // Same layout as a serialized `SparseVector`: dimension, then the entry map.
    let valid = bincode::serialize(&(10usize, &entries)).unwrap();
    let back: SparseVector<f64> = bincode::deserialize(&valid).unwrap();
    assert_eq!(back.get_value(7).unwrap(), 5.0);
    assert_eq!(valid, bincode::serialize(&back).unwrap());

    let shrunk = bincode::serialize(&(3usize, &entries)).unwrap();
    let err = bincode::deserialize::<SparseVector<f64>>(&shrunk).unwrap_err();
    assert!(err.to_string().contains("index 7 out of bounds"), "{err}");

    let edge = bincode::serialize(&(7usize, &entries)).unwrap();
    assert!(bincode::deserialize::<SparseVector<f64>>(&edge).is_err());
}

#[test]
fn dense_round_trip() {
    let v = DenseVector::from_vec(vec![0.25f32, 0.0, -8.0]);
    let bytes = bincode::serialize(&v).unwrap();
    let back: DenseVector<f32> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back.get_w(), v.get_w());
}
