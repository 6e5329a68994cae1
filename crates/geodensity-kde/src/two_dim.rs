//! 2-D Gaussian kernel density estimator

use geodensity_core::{ExecutionEngine, Result};
use log::debug;

use crate::check_observation_cap;
use crate::kernel::GaussianKernel;

/// 2-D kernel density estimator over a row-major sample grid
///
/// Same contract as [`crate::Kde1d`] generalized to 2-vectors, except the
/// output is a flat value array rather than coordinate/value pairs: the
/// contour-extraction collaborator reconstructs (row, column) from the flat
/// index, so output slot `i` always belongs to grid sample `i`.
#[derive(Clone, Debug)]
pub struct Kde2d<E: ExecutionEngine> {
    engine: E,
    kernel: GaussianKernel<E::Primitives>,
    observation_cap: Option<usize>,
}

impl<E: ExecutionEngine> Kde2d<E> {
    /// Create an estimator with the given engine and bandwidth
    ///
    /// Fails on non-positive or non-finite bandwidth.
    pub fn new(engine: E, bandwidth: f64) -> Result<Self> {
        let kernel = GaussianKernel::new(engine.primitives().clone(), bandwidth)?;
        Ok(Self {
            engine,
            kernel,
            observation_cap: None,
        })
    }

    /// Declare a maximum observation count, checked before dispatch
    pub fn with_observation_cap(mut self, cap: usize) -> Self {
        self.observation_cap = Some(cap);
        self
    }

    /// The bandwidth σ this estimator was built with
    pub fn bandwidth(&self) -> f64 {
        self.kernel.bandwidth()
    }

    /// Evaluate the density field at `grid_samples`
    ///
    /// Returns one value per sample, preserving the input (row-major) order
    /// exactly. Zero observations yield an all-zero field; an empty grid
    /// yields an empty one.
    pub fn estimate(
        &self,
        grid_samples: &[[f64; 2]],
        observations: &[[f64; 2]],
    ) -> Result<Vec<f64>> {
        check_observation_cap(self.observation_cap, observations.len())?;

        debug!(
            "kde_2d: {} samples x {} observations, sigma={}, strategy={:?}",
            grid_samples.len(),
            observations.len(),
            self.kernel.bandwidth(),
            self.engine.strategy()
        );

        let kernel = &self.kernel;
        Ok(self.engine.execute_batch(grid_samples.len(), |i| {
            kernel.density_2d(grid_samples[i], observations)
        }))
    }
}
