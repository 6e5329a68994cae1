//! Unified compute primitives trait
//!
//! The inner loops of the density estimators live here so that alternative
//! backends (SIMD, for instance) can override them without touching the
//! estimator code.

/// Trait for the low-level kernel-sum operations used by the estimators
///
/// All methods have scalar default implementations; a backend only overrides
/// what it can accelerate. Dispatch is compile-time through the type
/// parameter on the execution engine.
pub trait ComputePrimitives: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Get the SIMD width (number of elements processed in parallel)
    fn simd_width(&self) -> usize {
        1
    }

    /// Sum of unnormalized 1-D Gaussian weights centered at each observation:
    /// `Σ_j exp(-(x - obs_j)² * inv_two_sigma_sq)`
    ///
    /// `inv_two_sigma_sq` is `1 / (2σ²)`, precomputed by the caller.
    fn gaussian_sum(&self, x: f64, observations: &[f64], inv_two_sigma_sq: f64) -> f64 {
        observations
            .iter()
            .map(|&mu| {
                let d = x - mu;
                (-(d * d) * inv_two_sigma_sq).exp()
            })
            .sum()
    }

    /// Sum of unnormalized 2-D isotropic Gaussian weights:
    /// `Σ_j exp(-((sx - ox_j)² + (sy - oy_j)²) * inv_two_sigma_sq)`
    fn gaussian_sum_2d(
        &self,
        sample: [f64; 2],
        observations: &[[f64; 2]],
        inv_two_sigma_sq: f64,
    ) -> f64 {
        observations
            .iter()
            .map(|obs| {
                let dx = sample[0] - obs[0];
                let dy = sample[1] - obs[1];
                (-(dx * dx + dy * dy) * inv_two_sigma_sq).exp()
            })
            .sum()
    }
}
