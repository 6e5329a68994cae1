//! 1-D Gaussian kernel density estimator

use geodensity_core::{ExecutionEngine, Result};
use log::debug;

use crate::check_observation_cap;
use crate::kernel::GaussianKernel;

/// One (coordinate, density) pair of a 1-D density profile
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityPoint {
    /// Sample coordinate the density was evaluated at
    pub position: f64,
    /// Unnormalized kernel sum at that coordinate
    pub density: f64,
}

/// 1-D kernel density estimator
///
/// Sums an unnormalized Gaussian kernel over every observation at each sample
/// coordinate. The execution engine chosen at construction decides whether
/// sample coordinates are evaluated sequentially or as one parallel task per
/// sample; output ordering and values are engine-independent.
#[derive(Clone, Debug)]
pub struct Kde1d<E: ExecutionEngine> {
    engine: E,
    kernel: GaussianKernel<E::Primitives>,
    observation_cap: Option<usize>,
}

impl<E: ExecutionEngine> Kde1d<E> {
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
    ///
    /// CPU execution has no inherent bound; this exists for callers matching
    /// a substrate that requires a static inner-loop bound (see
    /// [`crate::OBSERVATION_CAP_REFERENCE`]).
    pub fn with_observation_cap(mut self, cap: usize) -> Self {
        self.observation_cap = Some(cap);
        self
    }

    /// The bandwidth σ this estimator was built with
    pub fn bandwidth(&self) -> f64 {
        self.kernel.bandwidth()
    }

    /// Evaluate the density profile at `samples`
    ///
    /// Returns one [`DensityPoint`] per sample, in sample order. Zero
    /// observations yield an all-zero profile; zero samples yield an empty
    /// one.
    pub fn estimate(&self, samples: &[f64], observations: &[f64]) -> Result<Vec<DensityPoint>> {
        check_observation_cap(self.observation_cap, observations.len())?;

        debug!(
            "kde_1d: {} samples x {} observations, sigma={}, strategy={:?}",
            samples.len(),
            observations.len(),
            self.kernel.bandwidth(),
            self.engine.strategy()
        );

        let kernel = &self.kernel;
        Ok(self.engine.execute_batch(samples.len(), |i| {
            let x = samples[i];
            DensityPoint {
                position: x,
                density: kernel.density_1d(x, observations),
            }
        }))
    }
}
