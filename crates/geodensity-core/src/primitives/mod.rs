//! Computational primitives with compile-time dispatch
//!
//! This module provides the kernel-sum primitives used by the density
//! estimators.
//!
//! # Architecture
//!
//! - Single unified `ComputePrimitives` trait for all operations
//! - Concrete backend types: currently `ScalarBackend`
//! - Compile-time backend selection, no heap allocation or dynamic dispatch
//!
//! The trait boundary exists so that a vectorized backend can be slotted in
//! later without changing any estimator code.

pub mod scalar;
pub mod traits;

pub use scalar::ScalarBackend;
pub use traits::ComputePrimitives;

/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}
