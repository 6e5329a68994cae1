//! Gaussian kernel density estimation for geographic density visualization
//!
//! This crate computes scalar density fields from sparse point observations
//! under an unnormalized isotropic Gaussian kernel. It covers the whole
//! pipeline between the observation source and the rendering layer:
//!
//! - [`samples`] generates the coordinates density is evaluated at: an evenly
//!   spaced 1-D sequence, or a row-major 2-D grid over a rectangle
//! - [`projection`] collapses 2-D observations onto a signed 1-D coordinate
//!   along an arbitrary directed axis
//! - [`Kde1d`] / [`Kde2d`] evaluate the density, sequentially or with one
//!   parallel task per sample, with identical numerical semantics
//!
//! The crate knows nothing about pixels, colors, projections, or contours;
//! it consumes coordinate arrays and a bandwidth and produces values in the
//! observations' own coordinate space.
//!
//! # Example
//!
//! ```rust
//! use geodensity_core::scalar_sequential;
//! use geodensity_kde::{generate_samples, project, Kde1d};
//!
//! # fn main() -> geodensity_core::Result<()> {
//! // Profile a 2-D population along the west-east axis.
//! let observations = [[3.0, 0.5], [4.0, -0.5], [-2.0, 1.0]];
//! let projected = project(&observations, [0.0, 0.0], [10.0, 0.0], 10.0)?;
//!
//! let samples = generate_samples(-10.0, 10.0, 1000)?;
//! let kde = Kde1d::new(scalar_sequential(), 1.0)?;
//! let profile = kde.estimate(&samples, &projected)?;
//! assert_eq!(profile.len(), 1000);
//! # Ok(())
//! # }
//! ```
//!
//! # Density semantics
//!
//! The kernel sum carries no normalization constant. Values are relative
//! magnitudes: comparable within one call, not across bandwidths or between
//! the 1-D and 2-D estimators. This matches what the rendering layer expects
//! and is deliberate.

pub mod kernel;
pub mod one_dim;
pub mod projection;
pub mod samples;
pub mod two_dim;

pub use kernel::GaussianKernel;
pub use one_dim::{DensityPoint, Kde1d};
pub use projection::{
    axis_endpoint, project, project_along_bearing, REFERENCE_AXIS_ANGLE_DEG,
    REFERENCE_AXIS_ORIGIN, REFERENCE_AXIS_RADIUS,
};
pub use samples::{generate_grid, generate_samples, GridRect, DEFAULT_SAMPLE_COUNT};
pub use two_dim::Kde2d;

use geodensity_core::{Error, Result};

/// Observation cap of the reference deployment
///
/// The original system ran its parallel strategy on a substrate that needed a
/// static inner-loop bound and declared it as the maximum expected number of
/// observations. CPU execution needs no bound; callers reproducing that
/// substrate can pass this to `with_observation_cap`.
pub const OBSERVATION_CAP_REFERENCE: usize = 80_000;

/// Reject observation sets larger than a configured cap, before any dispatch
pub(crate) fn check_observation_cap(cap: Option<usize>, actual: usize) -> Result<()> {
    match cap {
        Some(cap) if actual > cap => Err(Error::ObservationCapExceeded { cap, actual }),
        _ => Ok(()),
    }
}
