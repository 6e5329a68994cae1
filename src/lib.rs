//! Kernel density estimation engine for geographic density visualization
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`geodensity_core`] - execution engines, compute primitives, errors
//! - [`geodensity_kde`] - Gaussian KDE estimators, sample grids, axis
//!   projection
//!
//! Most users only need the estimator crate plus an engine constructor:
//!
//! ```rust
//! use geodensity::core::scalar_sequential;
//! use geodensity::kde::{generate_samples, Kde1d};
//!
//! # fn main() -> geodensity::core::Result<()> {
//! let samples = generate_samples(-10.0, 10.0, 1000)?;
//! let kde = Kde1d::new(scalar_sequential(), 1.0)?;
//! let profile = kde.estimate(&samples, &[0.0, 0.0])?;
//! assert!(profile.iter().all(|p| p.density >= 0.0));
//! # Ok(())
//! # }
//! ```

pub use geodensity_core as core;
pub use geodensity_kde as kde;

pub use geodensity_core::{Error, Result};
pub use geodensity_kde::{DensityPoint, GaussianKernel, GridRect, Kde1d, Kde2d};
