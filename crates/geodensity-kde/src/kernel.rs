//! Unnormalized isotropic Gaussian kernel
//!
//! The kernel is deliberately unnormalized: no `1/(σ√2π)` factor is applied,
//! so densities are relative magnitudes, comparable within one estimate call
//! but not across bandwidths or dimensionalities. The rendering layer
//! rescales to its own axes anyway, and true normalization would change the
//! visual output.

use geodensity_core::{ComputePrimitives, Error, Result, ScalarBackend};

/// Unnormalized Gaussian kernel with a single isotropic bandwidth
///
/// Carries the primitives backend that evaluates its inner sums, in the same
/// way the estimators carry their execution engine.
#[derive(Clone, Debug)]
pub struct GaussianKernel<P: ComputePrimitives = ScalarBackend> {
    primitives: P,
    bandwidth: f64,
    inv_two_sigma_sq: f64,
}

impl<P: ComputePrimitives> GaussianKernel<P> {
    /// Create a kernel with the given primitives and bandwidth
    ///
    /// The bandwidth must be positive and finite; anything else is rejected
    /// here, before any estimator can dispatch work with it.
    pub fn new(primitives: P, bandwidth: f64) -> Result<Self> {
        if !bandwidth.is_finite() || bandwidth <= 0.0 {
            return Err(Error::invalid_bandwidth(bandwidth));
        }
        Ok(Self {
            primitives,
            bandwidth,
            inv_two_sigma_sq: 1.0 / (2.0 * bandwidth * bandwidth),
        })
    }

    /// The bandwidth σ this kernel was built with
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Evaluate the 1-D kernel at distance `x - mu`
    #[inline]
    pub fn eval_1d(&self, x: f64, mu: f64) -> f64 {
        let d = x - mu;
        (-(d * d) * self.inv_two_sigma_sq).exp()
    }

    /// Total density at `x` contributed by all observations
    #[inline]
    pub fn density_1d(&self, x: f64, observations: &[f64]) -> f64 {
        self.primitives
            .gaussian_sum(x, observations, self.inv_two_sigma_sq)
    }

    /// Total density at `sample` contributed by all 2-D observations
    #[inline]
    pub fn density_2d(&self, sample: [f64; 2], observations: &[[f64; 2]]) -> f64 {
        self.primitives
            .gaussian_sum_2d(sample, observations, self.inv_two_sigma_sq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geodensity_core::scalar_backend;

    #[test]
    fn test_rejects_degenerate_bandwidth() {
        assert!(GaussianKernel::new(scalar_backend(), 0.0).is_err());
        assert!(GaussianKernel::new(scalar_backend(), -1.0).is_err());
        assert!(GaussianKernel::new(scalar_backend(), f64::NAN).is_err());
        assert!(GaussianKernel::new(scalar_backend(), f64::INFINITY).is_err());
        assert!(GaussianKernel::new(scalar_backend(), 1.0).is_ok());
    }

    #[test]
    fn test_eval_1d_known_values() {
        let kernel = GaussianKernel::new(scalar_backend(), 1.0).unwrap();
        assert_relative_eq!(kernel.eval_1d(0.0, 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(kernel.eval_1d(1.0, 0.0), (-0.5f64).exp(), epsilon = 1e-12);
        // Symmetric in the distance
        assert_relative_eq!(kernel.eval_1d(-1.0, 0.0), kernel.eval_1d(1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_wider_bandwidth_flattens() {
        let narrow = GaussianKernel::new(scalar_backend(), 0.5).unwrap();
        let wide = GaussianKernel::new(scalar_backend(), 5.0).unwrap();
        // Away from the center, the wider kernel keeps more mass.
        assert!(wide.eval_1d(2.0, 0.0) > narrow.eval_1d(2.0, 0.0));
    }

    #[test]
    fn test_density_sums_over_observations() {
        let kernel = GaussianKernel::new(scalar_backend(), 1.0).unwrap();
        let obs = [0.0, 0.0];
        assert_relative_eq!(kernel.density_1d(0.0, &obs), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            kernel.density_1d(1.0, &obs),
            2.0 * (-0.5f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_tiny_bandwidth_underflows_to_zero() {
        // Distant points underflow to exactly 0.0; acceptable, not an error.
        let kernel = GaussianKernel::new(scalar_backend(), 1e-6).unwrap();
        assert_eq!(kernel.eval_1d(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_density_2d_isotropy() {
        let kernel = GaussianKernel::new(scalar_backend(), 2.0).unwrap();
        let obs = [[0.0, 0.0]];
        // Same Euclidean distance in any direction gives the same density.
        let d1 = kernel.density_2d([3.0, 0.0], &obs);
        let d2 = kernel.density_2d([0.0, 3.0], &obs);
        let d3 = kernel.density_2d([3.0 / 2f64.sqrt(), 3.0 / 2f64.sqrt()], &obs);
        assert_relative_eq!(d1, d2, epsilon = 1e-12);
        assert_relative_eq!(d1, d3, epsilon = 1e-12);
    }
}
