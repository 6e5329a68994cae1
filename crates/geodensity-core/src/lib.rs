//! Core traits and types for the geodensity KDE engine
//!
//! This crate provides the two foundational layers the estimator crate builds
//! on:
//!
//! 1. **Primitives** - the kernel-sum inner loops behind the
//!    [`ComputePrimitives`] trait, with compile-time backend dispatch
//! 2. **Execution engines** - unified sequential/parallel control behind the
//!    [`ExecutionEngine`] trait
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Abstractions**: strategy and backend resolved at compile time
//! - **Strategy-agnostic algorithms**: estimators are written once against
//!   [`ExecutionEngine`] and run unchanged on either engine
//! - **No retained state**: engines hold no per-call state, so concurrent
//!   calls across parameter sets are inherently safe
//!
//! # Example
//!
//! ```rust
//! use geodensity_core::{scalar_sequential, ComputePrimitives, ExecutionEngine};
//!
//! let engine = scalar_sequential();
//!
//! // sigma = 1 => 1/(2 sigma^2) = 0.5
//! let density = engine.primitives().gaussian_sum(0.0, &[0.0, 0.0], 0.5);
//! assert_eq!(density, 2.0);
//! ```

pub mod error;
pub mod execution;
pub mod primitives;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{
    auto_engine, scalar_sequential, ExecutionEngine, ExecutionMode, ExecutionStrategy,
    SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use execution::{scalar_parallel, ParallelEngine};

pub use primitives::{scalar_backend, ComputePrimitives, ScalarBackend};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
