//! Scalar backend implementation
//!
//! Portable backend that relies on the default trait implementations and the
//! compiler's auto-vectorization. Always available.

use crate::primitives::ComputePrimitives;

/// Scalar backend - works on every target
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ComputePrimitives for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
